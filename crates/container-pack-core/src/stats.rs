//! Summary and statistics: counts placed/unplaced items by original
//! manifest line and computes volumetric fill.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::model::{CargoItem, CargoKind, Container, KindStats, PackStats, PackingResult};

/// Computes summary statistics from a `PackingResult` and the manifest it
/// was produced from.
pub fn compute(container: &Container, manifest: &[CargoItem], result: &PackingResult) -> PackStats {
    let items_by_id: HashMap<&str, &CargoItem> =
        manifest.iter().map(|i| (i.stable_id.as_str(), i)).collect();

    let mut by_kind: HashMap<CargoKind, KindStats> = HashMap::new();
    let mut used_volume = 0.0;

    for p in &result.placed {
        let volume = match (p.kind, items_by_id.get(p.source_stable_id.as_str())) {
            (CargoKind::Cylinder, Some(item)) => {
                let r = item.cylinder_diameter() / 2.0;
                PI * r * r * item.cylinder_axial_length()
            }
            _ => p.effective_dimensions.volume(),
        };
        used_volume += volume;
        let entry = by_kind.entry(p.kind).or_default();
        entry.placed += 1;
        entry.placed_volume += volume;
    }

    let mut items_requested = 0;
    for item in manifest {
        items_requested += item.quantity;
        let entry = by_kind.entry(item.kind).or_default();
        entry.unplaced = entry.unplaced.saturating_add(0); // ensure key exists
    }
    for (kind, entry) in by_kind.iter_mut() {
        let total_of_kind: u32 = manifest
            .iter()
            .filter(|i| i.kind == *kind)
            .map(|i| i.quantity)
            .sum();
        entry.unplaced = total_of_kind.saturating_sub(entry.placed);
    }

    let items_placed = result.placed.len() as u32;
    let items_unplaced = items_requested.saturating_sub(items_placed);
    let container_volume = container.dimensions.volume();
    let fill_rate = if container_volume > 0.0 {
        used_volume / container_volume
    } else {
        0.0
    };

    PackStats {
        items_requested,
        items_placed,
        items_unplaced,
        container_volume,
        used_volume,
        fill_rate,
        by_kind,
    }
}
