//! Preset container library: a key-value catalog mapping fixed type tags
//! to dimensions in centimeters.

use crate::model::Dimensions;

/// All built-in presets as `(type_tag, dimensions)` pairs.
pub fn all() -> &'static [(&'static str, Dimensions)] {
    &[
        (
            "TRUCK",
            Dimensions {
                width: 245.0,
                length: 1360.0,
                height: 270.0,
            },
        ),
        (
            "20DC",
            Dimensions {
                width: 235.0,
                length: 590.0,
                height: 239.0,
            },
        ),
        (
            "40DC",
            Dimensions {
                width: 235.0,
                length: 1203.0,
                height: 239.0,
            },
        ),
        (
            "40HC",
            Dimensions {
                width: 235.0,
                length: 1203.0,
                height: 269.0,
            },
        ),
    ]
}

/// Looks up a preset by its type tag (case-sensitive, matching the tag
/// stored on `Container::type_tag`). Returns `None` for `"Custom"` and any
/// unrecognized tag; callers should supply explicit dimensions in that case.
pub fn preset(type_tag: &str) -> Option<Dimensions> {
    all()
        .iter()
        .find(|(tag, _)| *tag == type_tag)
        .map(|(_, dims)| *dims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_known_preset() {
        assert!(preset("TRUCK").is_some());
        assert!(preset("40HC").is_some());
    }

    #[test]
    fn unknown_and_custom_tags_return_none() {
        assert!(preset("Custom").is_none());
        assert!(preset("nope").is_none());
    }

    #[test]
    fn all_presets_have_positive_dimensions() {
        for (_, dims) in all() {
            assert!(dims.is_finite_and_positive());
        }
    }
}
