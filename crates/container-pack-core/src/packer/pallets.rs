//! Pallet floor optimizer (§4.3): wraps the guillotine rectangle packer
//! with inter-pallet gap handling and an optional 90 degree floor rotation.

use crate::config::EngineConfig;
use crate::geometry::inside_container;
use crate::ids::IdMinter;
use crate::model::{Container, Dimensions, PlacedItem, Rotation, Vector3};
use crate::packer::guillotine::FreeRectList;
use crate::packer::Instance;

/// Packs pallet instances onto the floor of `container`, returning placed
/// items (all at z=0) and the instances that did not fit.
pub fn pack(
    container: &Container,
    instances: Vec<Instance>,
    cfg: &EngineConfig,
    ids: &mut IdMinter,
) -> (Vec<PlacedItem>, Vec<Instance>) {
    let mut sorted = instances;
    sorted.sort_by(|a, b| {
        let area_a = a.dimensions.width * a.dimensions.length;
        let area_b = b.dimensions.width * b.dimensions.length;
        area_b
            .partial_cmp(&area_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let gap = cfg.object_margin;
    let mut free = FreeRectList::new(container.dimensions.width, container.dimensions.length);
    let mut placed = Vec::new();
    let mut unplaced = Vec::new();

    for inst in sorted {
        let base_w = inst.dimensions.width + gap;
        let base_l = inst.dimensions.length + gap;

        let (fit, rotated, used_w, used_l) = if let Some(fit) = free.find_position(base_w, base_l)
        {
            (Some(fit), false, base_w, base_l)
        } else if inst.allowed_rotation.y {
            let rot_w = inst.dimensions.length + gap;
            let rot_l = inst.dimensions.width + gap;
            match free.find_position(rot_w, rot_l) {
                Some(fit) => (Some(fit), true, rot_w, rot_l),
                None => (None, false, 0.0, 0.0),
            }
        } else {
            (None, false, 0.0, 0.0)
        };

        let Some(fit) = fit else {
            unplaced.push(inst);
            continue;
        };

        free.split(fit.index, used_w, used_l);

        let effective_dims = if rotated {
            inst.dimensions.swap_xy()
        } else {
            inst.dimensions
        };
        let position = Vector3::new(fit.x + gap / 2.0, fit.y + gap / 2.0, 0.0);

        debug_assert!(
            inside_container(position, effective_dims, container),
            "pallet placement escaped container bounds"
        );

        placed.push(PlacedItem {
            source_stable_id: inst.stable_id.clone(),
            source_display_name: inst.display_name.clone(),
            kind: inst.kind,
            unique_instance_id: ids.mint(&inst.stable_id, inst.kind),
            position,
            rotation: Rotation::from_flags(false, rotated, false),
            effective_dimensions: effective_dims,
            layer_id: Some(0),
        });
    }

    (placed, unplaced)
}
