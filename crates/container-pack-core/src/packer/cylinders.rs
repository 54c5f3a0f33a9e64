//! Cylinder strip packer (§4.5): groups cylinders by similar axial length
//! into strips along the depth axis, greedily packs each strip width x
//! height, supports stacking on already-placed cylinders via a base-overlap
//! check, and falls back to a general-position search for leftovers.
//!
//! All cylinders are treated as AABBs for collision in this packer, which
//! over-approximates tangent fits in favor of simplicity and safety.

use crate::config::EngineConfig;
use crate::geometry::{aabb_intersect, cylinder_aabb, footprint_overlap_area, CylinderOrientation};
use crate::ids::IdMinter;
use crate::model::{Container, Dimensions, PlacedItem, Rotation, Vector3};
use crate::packer::Instance;
use std::f64::consts::FRAC_PI_2;

/// All cylinders placed by this packer use the horizontal-y orientation
/// (axis along depth), per spec.
const ORIENTATION: CylinderOrientation = CylinderOrientation::HorizontalY;

struct Group {
    max_length: f64,
    members: Vec<Instance>,
}

/// Packs cylinder instances into `container`, returning placed items and
/// the instances that did not fit.
pub fn pack(
    container: &Container,
    instances: Vec<Instance>,
    cfg: &EngineConfig,
    ids: &mut IdMinter,
) -> (Vec<PlacedItem>, Vec<Instance>) {
    let groups = group_by_length(instances, cfg.cylinder_group_length_tolerance);

    let mut placed: Vec<PlacedItem> = Vec::new();
    let mut deferred: Vec<Instance> = Vec::new();
    let mut strip_y = 0.0_f64;

    for mut group in groups {
        group
            .members
            .sort_by(|a, b| b.dimensions.width.partial_cmp(&a.dimensions.width).unwrap());

        let mut placed_in_strip = false;
        for inst in group.members {
            match place_in_strip(container, &inst, strip_y, group.max_length, &placed, cfg) {
                Some(p) => {
                    placed.push(finish(p, &inst, ids));
                    placed_in_strip = true;
                }
                None => deferred.push(inst),
            }
        }
        if placed_in_strip {
            strip_y += group.max_length;
        }
    }

    let mut unplaced = Vec::new();
    for inst in deferred {
        match place_general(container, &inst, &placed, cfg) {
            Some(p) => placed.push(finish(p, &inst, ids)),
            None => unplaced.push(inst),
        }
    }

    (placed, unplaced)
}

/// Groups instances by similar axial length: sorted ascending, a new group
/// starts whenever the candidate's length exceeds the group's first
/// member's length by more than `tolerance`. Groups are then reordered by
/// ascending maximum length.
fn group_by_length(mut instances: Vec<Instance>, tolerance: f64) -> Vec<Group> {
    instances.sort_by(|a, b| a.dimensions.height.partial_cmp(&b.dimensions.height).unwrap());

    let mut groups: Vec<Group> = Vec::new();
    for inst in instances {
        let fits_current = groups.last().map(|g: &Group| {
            let first_len = g.members[0].dimensions.height;
            (inst.dimensions.height - first_len).abs() <= tolerance
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

struct Placement {
    position: Vector3,
    dims: Dimensions,
}

fn fits_in_container(z: f64, diameter: f64, container: &Container) -> bool {
    z + diameter <= container.dimensions.height + crate::geometry::EPSILON
}

fn collision_free(pos: Vector3, dims: Dimensions, placed: &[PlacedItem], margin: f64) -> bool {
    !placed
        .iter()
        .any(|p| aabb_intersect(pos, dims, p.position, p.effective_dimensions, -margin))
}

fn is_supported(pos: Vector3, dims: Dimensions, placed: &[PlacedItem], tolerance: f64) -> bool {
    if pos.z.abs() <= crate::geometry::EPSILON {
        return true;
    }
    let footprint = (pos.x, pos.y, pos.x + dims.width, pos.y + dims.length);
    placed.iter().any(|p| {
        let top = p.position.z + p.effective_dimensions.height;
        if (top - pos.z).abs() > tolerance {
            return false;
        }
        let other = (
            p.position.x,
            p.position.y,
            p.position.x + p.effective_dimensions.width,
            p.position.y + p.effective_dimensions.length,
        );
        footprint_overlap_area(footprint, other) > 0.0
    })
}

/// Candidate floor levels for cylinders resting within `strip_y`..`strip_y +
/// strip_length`: zero plus the top of every cylinder already placed in
/// that strip.
fn strip_levels(placed: &[PlacedItem], strip_y: f64, strip_length: f64) -> Vec<f64> {
    let mut levels = vec![0.0_f64];
    for p in placed {
        if p.position.y + crate::geometry::EPSILON >= strip_y
            && p.position.y < strip_y + strip_length
        {
            levels.push(p.position.z + p.effective_dimensions.height);
        }
    }
    levels.sort_by(|a, b| a.partial_cmp(b).unwrap());
    levels.dedup_by(|a, b| (*a - *b).abs() < crate::geometry::EPSILON);
    levels
}

fn place_in_strip(
    container: &Container,
    inst: &Instance,
    strip_y: f64,
    strip_length: f64,
    placed: &[PlacedItem],
    cfg: &EngineConfig,
) -> Option<Placement> {
    let diameter = inst.cylinder_diameter();
    let axial_length = inst.cylinder_axial_length();
    let dims = Dimensions::new(diameter, axial_length, diameter);

    for z in strip_levels(placed, strip_y, strip_length) {
        if !fits_in_container(z, diameter, container) {
            continue;
        }
        let max_x = container.dimensions.width - diameter;
        if max_x < -crate::geometry::EPSILON {
            continue;
        }
        let mut x = 0.0_f64;
        while x <= max_x + crate::geometry::EPSILON {
            let pos = Vector3::new(x, strip_y, z);
            if collision_free(pos, dims, placed, cfg.object_margin)
                && is_supported(pos, dims, placed, cfg.cylinder_support_tolerance)
            {
                return Some(Placement { position: pos, dims });
            }
            x += cfg.scan_step;
        }
    }
    None
}

fn place_general(
    container: &Container,
    inst: &Instance,
    placed: &[PlacedItem],
    cfg: &EngineConfig,
) -> Option<Placement> {
    let diameter = inst.cylinder_diameter();
    let axial_length = inst.cylinder_axial_length();
    let dims = Dimensions::new(diameter, axial_length, diameter);

    let mut ys = vec![0.0_f64];
    let mut zs = vec![0.0_f64];
    for p in placed {
        ys.push(p.position.y);
        ys.push(p.position.y + p.effective_dimensions.length);
        zs.push(p.position.z + p.effective_dimensions.height);
    }
    ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
    ys.dedup_by(|a, b| (*a - *b).abs() < crate::geometry::EPSILON);
    zs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    zs.dedup_by(|a, b| (*a - *b).abs() < crate::geometry::EPSILON);

    let max_y = container.dimensions.length - axial_length;
    let max_x = container.dimensions.width - diameter;
    if max_x < -crate::geometry::EPSILON || max_y < -crate::geometry::EPSILON {
        return None;
    }

    for &z in &zs {
        if !fits_in_container(z, diameter, container) {
            continue;
        }
        for &y in &ys {
            if y > max_y + crate::geometry::EPSILON {
                continue;
            }
            let mut x = 0.0_f64;
            while x <= max_x + crate::geometry::EPSILON {
                let pos = Vector3::new(x, y, z);
                if collision_free(pos, dims, placed, cfg.object_margin)
                    && is_supported(pos, dims, placed, cfg.cylinder_support_tolerance)
                {
                    return Some(Placement { position: pos, dims });
                }
                x += cfg.scan_step;
            }
        }
    }
    None
}

fn finish(p: Placement, inst: &Instance, ids: &mut IdMinter) -> PlacedItem {
    let (_pmin, effective_dims) = cylinder_aabb(
        Vector3::new(
            p.position.x + p.dims.width / 2.0,
            p.position.y + p.dims.length / 2.0,
            p.position.z + p.dims.height / 2.0,
        ),
        p.dims.width / 2.0,
        p.dims.length,
        ORIENTATION,
    );
    debug_assert_eq!(effective_dims, p.dims);

    PlacedItem {
        source_stable_id: inst.stable_id.clone(),
        source_display_name: inst.display_name.clone(),
        kind: inst.kind,
        unique_instance_id: ids.mint(&inst.stable_id, inst.kind),
        position: p.position,
        rotation: Rotation {
            x: FRAC_PI_2,
            y: 0.0,
            z: 0.0,
        },
        effective_dimensions: p.dims,
        layer_id: Some((p.position.z / 50.0).floor() as u32),
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
    fn places_cylinders_side_by_side_on_floor() {
        let container = Container::new("TRUCK", Dimensions::new(1360.0, 240.0, 260.0));
        let cfg = EngineConfig::default();
        let mut ids = IdMinter::new();
        let instances: Vec<_> = (0..6).map(|i| cylinder(&format!("c{i}"), 60.0, 200.0)).collect();

        let (placed, unplaced) = pack(&container, instances, &cfg, &mut ids);
        assert_eq!(placed.len(), 6);
        assert!(unplaced.is_empty());

        let mut xs: Vec<f64> = placed.iter().map(|p| p.position.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs[0], 0.0);
        for pair in xs.windows(2) {
            assert!(pair[1] - pair[0] >= 60.0 + cfg.object_margin - crate::geometry::EPSILON);
        }
        for p in &placed {
            assert_eq!(p.position.y, 0.0);
            assert_eq!(p.position.z, 0.0);
            assert_eq!(p.rotation.x, FRAC_PI_2);
        }
    }

    #[test]
    fn no_two_cylinders_overlap() {
        let container = Container::new("TRUCK", Dimensions::new(400.0, 800.0, 300.0));
        let cfg = EngineConfig::default();
        let mut ids = IdMinter::new();
        let instances: Vec<_> = (0..10)
            .map(|i| cylinder(&format!("c{i}"), 80.0, 300.0))
            .collect();
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

    #[test]
    fn length_groups_form_separate_strips() {
        let container = Container::new("TRUCK", Dimensions::new(400.0, 800.0, 300.0));
        let cfg = EngineConfig::default();
        let mut ids = IdMinter::new();
        let mut instances = vec![cylinder("short", 60.0, 100.0)];
        instances.push(cylinder("long", 60.0, 400.0));
        let (placed, _) = pack(&container, instances, &cfg, &mut ids);
        assert_eq!(placed.len(), 2);
        let ys: Vec<f64> = placed.iter().map(|p| p.position.y).collect();
        assert_eq!(ys.iter().filter(|&&y| y == 0.0).count(), 1);
    }
}
