use thiserror::Error;

/// Errors that reach the caller. Per the propagation policy, a rejected
/// candidate position, an exhausted free-block list, or a `None` from the
/// valley solver are all recovered locally by trying the next candidate —
/// they never become a `PackError`. Only a bad precondition or a detected
/// invariant violation does.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid input: {0}")]
    BadInput(String),

    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
