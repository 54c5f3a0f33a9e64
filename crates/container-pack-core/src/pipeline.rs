//! Public entry point (§6): validates preconditions, then delegates to the
//! mixed orchestrator and derives summary statistics.

use tracing::instrument;

use crate::config::EngineConfig;
use crate::error::{PackError, Result};
use crate::model::{CargoItem, Container, PackStats, PackingResult};
use crate::orchestrator;
use crate::stats;

/// Packs `manifest` into `container` using the default `EngineConfig`.
#[instrument(skip_all)]
pub fn pack(container: &Container, manifest: &[CargoItem]) -> Result<PackingResult> {
    pack_with_config(container, manifest, &EngineConfig::default())
}

/// Packs `manifest` into `container` using an explicit `EngineConfig`.
///
/// Preconditions (§6): every container extent is at least 1 cm, and every
/// manifest line has positive dimensions and `quantity >= 1`. A violation
/// returns `PackError::BadInput` without attempting to pack anything.
#[instrument(skip_all)]
pub fn pack_with_config(
    container: &Container,
    manifest: &[CargoItem],
    cfg: &EngineConfig,
) -> Result<PackingResult> {
    validate(container, manifest)?;
    Ok(orchestrator::run_with_config(container, manifest, cfg))
}

/// Packs `manifest` into `container` and also returns derived `PackStats`.
#[instrument(skip_all)]
pub fn pack_with_stats(
    container: &Container,
    manifest: &[CargoItem],
    cfg: &EngineConfig,
) -> Result<(PackingResult, PackStats)> {
    let result = pack_with_config(container, manifest, cfg)?;
    let summary = stats::compute(container, manifest, &result);
    Ok((result, summary))
}

fn validate(container: &Container, manifest: &[CargoItem]) -> Result<()> {
    let d = container.dimensions;
    if d.width < 1.0 || d.length < 1.0 || d.height < 1.0 {
        return Err(PackError::BadInput(format!(
            "container extents must be at least 1 cm on every axis, got {:?}",
            d
        )));
    }
    for item in manifest {
        if !item.dimensions.is_finite_and_positive() {
            return Err(PackError::BadInput(format!(
                "cargo item {:?} has non-positive or non-finite dimensions: {:?}",
                item.stable_id, item.dimensions
            )));
        }
        if item.quantity < 1 {
            return Err(PackError::BadInput(format!(
                "cargo item {:?} has quantity {} (must be >= 1)",
                item.stable_id, item.quantity
            )));
        }
    }
    Ok(())
}
