//! Vertical-stacker / valley-manager cylinder strategy: packs same-strip
//! cylinders into rows using circle-pair "valley" nesting instead of the
//! strip packer's flat AABB levels. Preserved as an optional strategy
//! behind `EngineConfig::cylinder_strategy`; the strip packer remains the
//! default.
//!
//! Row 0 is placed flush on the floor (real, materialized placements, not
//! just a geometric anchor); each subsequent row rests in the valley
//! between two adjacent cylinders of the row below it, tangent to both. A
//! cylinder resting in such a valley is therefore considered supported by
//! tangent contact with its two row-below neighbors rather than by the
//! strip packer's flat-top-equality check.

use crate::config::EngineConfig;
use crate::geometry::{aabb_intersect, valley_position};
use crate::ids::IdMinter;
use crate::model::{Container, Dimensions, PlacedItem, Rotation, Vector3};
use crate::packer::Instance;
use std::f64::consts::FRAC_PI_2;

struct Group {
    max_length: f64,
    members: Vec<Instance>,
}

pub fn pack(
    container: &Container,
    instances: Vec<Instance>,
    cfg: &EngineConfig,
    ids: &mut IdMinter,
) -> (Vec<PlacedItem>, Vec<Instance>) {
    let groups = group_by_length(instances, cfg.cylinder_group_length_tolerance);

    let mut placed = Vec::new();
    let mut unplaced = Vec::new();
    let mut strip_y = 0.0_f64;

    for group in groups {
        let diameter = group
            .members
            .iter()
            .fold(0.0_f64, |m, i| m.max(i.dimensions.width));
        let radius = diameter / 2.0;
        let axial_length = group.max_length;
        let dims = Dimensions::new(diameter, axial_length, diameter);

        let mut queue = group.members.into_iter();
        let mut any_placed = false;

        // Row 0: real cylinders placed flush on the floor, side by side.
        let mut row_centers: Vec<(f64, f64)> = Vec::new(); // (x, z) of the row below
        let mut x = radius;
        while x + radius <= container.dimensions.width + crate::geometry::EPSILON {
            let Some(inst) = queue.next() else {
                break;
            };
            let pos = Vector3::new(x - radius, strip_y, 0.0);
            if collision_free(pos, dims, &placed) {
                placed.push(finish(pos, dims, &inst, ids));
                row_centers.push((x, radius));
                any_placed = true;
            } else {
                unplaced.push(inst);
            }
            x += diameter;
        }

        'rows: loop {
            if row_centers.len() < 2 {
                for inst in queue.by_ref() {
                    unplaced.push(inst);
                }
                break;
            }
            let mut next_row: Vec<(f64, f64)> = Vec::new();
            for pair in row_centers.windows(2) {
                let Some(inst) = queue.next() else {
                    break 'rows;
                };
                let c1 = pair[0];
                let c2 = pair[1];
                match valley_position(c1, radius, c2, radius, radius) {
                    Some((cx, cz)) if cz + radius <= container.dimensions.height + crate::geometry::EPSILON => {
                        let pos = Vector3::new(cx - radius, strip_y, cz - radius);
                        if collision_free(pos, dims, &placed) {
                            placed.push(finish(pos, dims, &inst, ids));
                            next_row.push((cx, cz));
                            any_placed = true;
                        } else {
                            unplaced.push(inst);
                        }
                    }
                    _ => unplaced.push(inst),
                }
            }
            if next_row.len() < 2 {
                // remaining queued items for this group cannot nest further
                for inst in queue.by_ref() {
                    unplaced.push(inst);
                }
                break;
            }
            row_centers = next_row;
        }

        if any_placed {
            strip_y += axial_length;
        }
    }

    (placed, unplaced)
}

fn group_by_length(mut instances: Vec<Instance>, tolerance: f64) -> Vec<Group> {
    instances.sort_by(|a, b| a.dimensions.height.partial_cmp(&b.dimensions.height).unwrap());
    let mut groups: Vec<Group> = Vec::new();
    for inst in instances {
        let fits_current = groups.last().map(|g: &Group| {
            (inst.dimensions.height - g.members[0].dimensions.height).abs() <= tolerance
        });
        if fits_current == Some(true) {
            let g = groups.last_mut().unwrap();
            g.max_length = g.max_length.max(inst.dimensions.height);
            g.members.push(inst);
        } else {
            groups.push(Group {
                max_length: inst.dimensions.height,
                members: vec![inst],
            });
        }
    }
    groups.sort_by(|a, b| a.max_length.partial_cmp(&b.max_length).unwrap());
    groups
}

fn collision_free(pos: Vector3, dims: Dimensions, placed: &[PlacedItem]) -> bool {
    !placed
        .iter()
        .any(|p| aabb_intersect(pos, dims, p.position, p.effective_dimensions, 0.0))
}

fn finish(pos: Vector3, dims: Dimensions, inst: &Instance, ids: &mut IdMinter) -> PlacedItem {
    PlacedItem {
        source_stable_id: inst.stable_id.clone(),
        source_display_name: inst.display_name.clone(),
        kind: inst.kind,
        unique_instance_id: ids.mint(&inst.stable_id, inst.kind),
        position: pos,
        rotation: Rotation {
            x: FRAC_PI_2,
            y: 0.0,
            z: 0.0,
        },
        effective_dimensions: dims,
        layer_id: Some((pos.z / 50.0).floor() as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AllowedRotation, CargoKind};

    fn cylinder(stable_id: &str, diameter: f64, axial_length: f64) -> Instance {
        Instance {
            stable_id: stable_id.into(),
            display_name: stable_id.into(),
            kind: CargoKind::Cylinder,
            dimensions: Dimensions::new(diameter, diameter, axial_length),
            allowed_rotation: AllowedRotation {
                x: true,
                y: false,
                z: false,
            },
            stackable: true,
        }
    }

    #[test]
    fn first_row_sits_on_the_floor() {
        let container = Container::new("TRUCK", Dimensions::new(400.0, 300.0, 300.0));
        let cfg = EngineConfig::default();
        let mut ids = IdMinter::new();
        let instances: Vec<_> = (0..4).map(|i| cylinder(&format!("c{i}"), 60.0, 200.0)).collect();
        let (placed, _) = pack(&container, instances, &cfg, &mut ids);
        assert!(!placed.is_empty());
        let floor_count = placed
            .iter()
            .filter(|p| p.position.z.abs() < 1e-6)
            .count();
        assert!(floor_count >= 1);
    }

    #[test]
    fn nested_rows_do_not_overlap() {
        let container = Container::new("TRUCK", Dimensions::new(400.0, 300.0, 300.0));
        let cfg = EngineConfig::default();
        let mut ids = IdMinter::new();
        let instances: Vec<_> = (0..9).map(|i| cylinder(&format!("c{i}"), 50.0, 200.0)).collect();
        let (placed, _) = pack(&container, instances, &cfg, &mut ids);
        for i in 0..placed.len() {
            for j in (i + 1)..placed.len() {
                assert!(!aabb_intersect(
                    placed[i].position,
                    placed[i].effective_dimensions,
                    placed[j].position,
                    placed[j].effective_dimensions,
                    0.0
                ));
            }
        }
    }
}
