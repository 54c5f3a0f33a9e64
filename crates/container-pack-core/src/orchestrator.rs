//! Mixed orchestrator (§4.6): partitions the manifest by kind, runs the
//! cylinder packer first against the full container, then runs the box
//! (and, depending on `PalletRouting`, pallet) packers against the
//! remaining depth-slice, translating their placements forward by the
//! depth the cylinders consumed.

use crate::config::{CylinderStrategy, EngineConfig, PalletRouting};
use crate::ids::IdMinter;
use crate::model::{CargoItem, CargoKind, Container, Dimensions, PackingResult, Vector3};
use crate::packer::{boxes, cylinders, pallets, valley, Instance};
use std::collections::HashMap;

#[tracing::instrument(skip_all)]
pub fn run(container: &Container, manifest: &[CargoItem]) -> PackingResult {
    run_with_config(container, manifest, &EngineConfig::default())
}

#[tracing::instrument(skip_all)]
pub fn run_with_config(
    container: &Container,
    manifest: &[CargoItem],
    cfg: &EngineConfig,
) -> PackingResult {
    let mut ids = IdMinter::new();

    let mut box_instances = Vec::new();
    let mut pallet_instances = Vec::new();
    let mut cylinder_instances = Vec::new();
    for inst in Instance::expand(manifest) {
        match inst.kind {
            CargoKind::Box => box_instances.push(inst),
            CargoKind::Pallet => pallet_instances.push(inst),
            CargoKind::Cylinder => cylinder_instances.push(inst),
        }
    }

    let mut placed = Vec::new();
    let mut unplaced_counts: HashMap<String, u32> = HashMap::new();

    let (cyl_placed, cyl_unplaced) = match cfg.cylinder_strategy {
        CylinderStrategy::Strip => cylinders::pack(container, cylinder_instances, cfg, &mut ids),
        CylinderStrategy::Valley => valley::pack(container, cylinder_instances, cfg, &mut ids),
    };
    tally_unplaced(&mut unplaced_counts, &cyl_unplaced);

    let max_used_y = cyl_placed
        .iter()
        .map(|p| p.position.y + p.effective_dimensions.length)
        .fold(0.0_f64, f64::max);
    placed.extend(cyl_placed);

    let remaining_y = container.dimensions.length - max_used_y;

    if remaining_y > 1.0 && !box_instances.is_empty() {
        let sub_container = Container::new(
            container.type_tag.clone(),
            Dimensions::new(container.dimensions.width, remaining_y, container.dimensions.height),
        );
        let (sub_placed, sub_unplaced) = boxes::pack(&sub_container, box_instances, cfg, &mut ids);
        for mut p in sub_placed {
            p.position = translate_y(p.position, max_used_y);
            placed.push(p);
        }
        tally_unplaced(&mut unplaced_counts, &sub_unplaced);
    } else {
        tally_unplaced(&mut unplaced_counts, &box_instances);
    }

    if remaining_y > 1.0 && !pallet_instances.is_empty() {
        let sub_container = Container::new(
            container.type_tag.clone(),
            Dimensions::new(container.dimensions.width, remaining_y, container.dimensions.height),
        );
        let (sub_placed, sub_unplaced) = match cfg.pallet_routing {
            PalletRouting::BoxBuilder => boxes::pack(&sub_container, pallet_instances, cfg, &mut ids),
            PalletRouting::Guillotine => {
                pallets::pack(&sub_container, pallet_instances, cfg, &mut ids)
            }
        };
        for mut p in sub_placed {
            p.position = translate_y(p.position, max_used_y);
            placed.push(p);
        }
        tally_unplaced(&mut unplaced_counts, &sub_unplaced);
    } else {
        tally_unplaced(&mut unplaced_counts, &pallet_instances);
    }

    PackingResult {
        placed,
        unplaced_summary: unplaced_counts,
    }
}

fn translate_y(pos: Vector3, dy: f64) -> Vector3 {
    Vector3::new(pos.x, pos.y + dy, pos.z)
}

fn tally_unplaced(counts: &mut HashMap<String, u32>, instances: &[Instance]) {
    for inst in instances {
        *counts.entry(inst.display_name.clone()).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AllowedRotation;

    fn cylinder_item(stable_id: &str, diameter: f64, length: f64, qty: u32) -> CargoItem {
        CargoItem {
            stable_id: stable_id.into(),
            display_name: stable_id.into(),
            kind: CargoKind::Cylinder,
            quantity: qty,
            color_tag: None,
            dimensions: Dimensions::new(diameter, diameter, length),
            allowed_rotation: AllowedRotation {
                x: true,
                y: false,
                z: false,
            },
            stackable: true,
        }
    }

    fn box_item(stable_id: &str, w: f64, l: f64, h: f64, qty: u32, rot_y: bool) -> CargoItem {
        CargoItem {
            stable_id: stable_id.into(),
            display_name: stable_id.into(),
            kind: CargoKind::Box,
            quantity: qty,
            color_tag: None,
            dimensions: Dimensions::new(w, l, h),
            allowed_rotation: AllowedRotation {
                x: false,
                y: rot_y,
                z: false,
            },
            stackable: true,
        }
    }

    #[test]
    fn mixed_manifest_places_cylinders_then_boxes_offset() {
        let container = Container::new("TRUCK", Dimensions::new(400.0, 800.0, 300.0));
        let manifest = vec![
            cylinder_item("cyl", 80.0, 300.0, 2),
            box_item("box", 100.0, 100.0, 100.0, 5, true),
        ];
        let result = run(&container, &manifest);

        let cyl_max_y = result
            .placed
            .iter()
            .filter(|p| p.kind == CargoKind::Cylinder)
            .map(|p| p.position.y + p.effective_dimensions.length)
            .fold(0.0_f64, f64::max);
        assert!(cyl_max_y <= 300.0 + 1e-6);

        for p in result.placed.iter().filter(|p| p.kind == CargoKind::Box) {
            assert!(p.position.y + 1e-6 >= cyl_max_y);
        }
        assert!(result.unplaced_summary.is_empty());
    }

    #[test]
    fn unplaced_items_are_tallied_by_display_name() {
        let container = Container::new("TRUCK", Dimensions::new(100.0, 100.0, 100.0));
        let manifest = vec![box_item("Crate", 60.0, 60.0, 60.0, 10, false)];
        let result = run(&container, &manifest);
        let unplaced = result.unplaced_summary.get("Crate").copied().unwrap_or(0);
        assert_eq!(result.placed.len() as u32 + unplaced, 10);
    }
}
