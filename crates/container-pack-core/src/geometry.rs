//! Pure geometry functions shared by every packer: AABB tests, cylinder
//! orientation math, and circle-pair "valley" nesting.

use crate::model::{Container, Dimensions, Vector3};

/// Tolerance for "same coordinate" floating point comparisons (centimeters).
pub const EPSILON: f64 = 0.001;

/// Orientation of a cylinder's rotational axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CylinderOrientation {
    /// Axis parallel to Z (standing upright).
    Vertical,
    /// Axis parallel to X (lying, rolling along width).
    HorizontalX,
    /// Axis parallel to Y (lying, rolling along depth). Used by the strip packer.
    HorizontalY,
}

/// Axis-separated AABB intersection test: two boxes defined by a corner and
/// dimensions intersect iff on every axis `min1 < max2 - gap` and
/// `max1 > min2 + gap`. `gap` is additive slack (e.g. object margin plus
/// EPSILON); a positive gap shrinks the effective overlap tolerance.
pub fn aabb_intersect(p1: Vector3, d1: Dimensions, p2: Vector3, d2: Dimensions, gap: f64) -> bool {
    let axes = [
        (p1.x, d1.width, p2.x, d2.width),
        (p1.y, d1.length, p2.y, d2.length),
        (p1.z, d1.height, p2.z, d2.height),
    ];
    axes.iter().all(|&(min1, ext1, min2, ext2)| {
        let max1 = min1 + ext1;
        let max2 = min2 + ext2;
        min1 < max2 - gap && max1 > min2 + gap
    })
}

/// True if the AABB `(p, d)` lies fully inside the container, within EPSILON.
pub fn inside_container(p: Vector3, d: Dimensions, container: &Container) -> bool {
    let cd = container.dimensions;
    p.x >= -EPSILON
        && p.y >= -EPSILON
        && p.z >= -EPSILON
        && p.x + d.width <= cd.width + EPSILON
        && p.y + d.length <= cd.length + EPSILON
        && p.z + d.height <= cd.height + EPSILON
}

/// Given two circles (centers `c1`, `c2` in an X-Z plane, radii `r1`, `r2`),
/// computes the center of a third circle of radius `r3` tangent to both and
/// resting atop them (the larger-z of the two symmetric solutions).
///
/// Returns `None` if the centers are farther apart than `r1 + r2 + 2*r3`
/// (no tangent solution reaches both), the circles already overlap, or the
/// resulting triangle has an imaginary height (the third circle cannot
/// bridge the gap without overlapping one of the two).
pub fn valley_position(
    c1: (f64, f64),
    r1: f64,
    c2: (f64, f64),
    r2: f64,
    r3: f64,
) -> Option<(f64, f64)> {
    let dx = c2.0 - c1.0;
    let dz = c2.1 - c1.1;
    let c = (dx * dx + dz * dz).sqrt();
    if c < EPSILON {
        return None; // coincident centers, no well-defined direction
    }
    if c < r1 + r2 - EPSILON {
        return None; // circles already overlap
    }
    if c > r1 + r2 + 2.0 * r3 {
        return None; // too far apart for a radius-r3 circle to bridge
    }

    let a = r1 + r3;
    let b = r2 + r3;
    let p = (a * a - b * b + c * c) / (2.0 * c);
    let h_sq = a * a - p * p;
    if h_sq < 0.0 {
        return None; // imaginary height: no real tangent solution
    }
    let h = h_sq.sqrt();

    // unit vector along c1 -> c2, and its perpendicular (normal)
    let ux = dx / c;
    let uz = dz / c;
    let nx = -uz;
    let nz = ux;

    let base_x = c1.0 + p * ux;
    let base_z = c1.1 + p * uz;

    let sol1 = (base_x + h * nx, base_z + h * nz);
    let sol2 = (base_x - h * nx, base_z - h * nz);

    Some(if sol1.1 >= sol2.1 { sol1 } else { sol2 })
}

/// Computes the minimum corner and effective dimensions of a cylinder's AABB
/// for one of the three canonical orientations, given its center, radius,
/// and axial length.
pub fn cylinder_aabb(
    center: Vector3,
    radius: f64,
    length: f64,
    orientation: CylinderOrientation,
) -> (Vector3, Dimensions) {
    let diameter = radius * 2.0;
    let dims = match orientation {
        CylinderOrientation::Vertical => Dimensions::new(diameter, diameter, length),
        CylinderOrientation::HorizontalX => Dimensions::new(length, diameter, diameter),
        CylinderOrientation::HorizontalY => Dimensions::new(diameter, length, diameter),
    };
    let pmin = Vector3::new(
        center.x - dims.width / 2.0,
        center.y - dims.length / 2.0,
        center.z - dims.height / 2.0,
    );
    (pmin, dims)
}

/// Positive-area XY overlap between two footprints given as
/// `(xmin, ymin, xmax, ymax)`.
pub fn footprint_overlap_area(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64)) -> f64 {
    let ox = (a.2.min(b.2) - a.0.max(b.0)).max(0.0);
    let oy = (a.3.min(b.3) - a.1.max(b.1)).max(0.0);
    ox * oy
}
