use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Extents in centimeters. Width is the X extent, length the Y (depth)
/// extent, height the Z (vertical) extent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    pub fn volume(&self) -> f64 {
        self.width * self.length * self.height
    }

    pub fn is_finite_and_positive(&self) -> bool {
        [self.width, self.length, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    /// Dimensions with width and length swapped (a 90 degree rotation about Z).
    pub fn swap_xy(&self) -> Self {
        Self {
            width: self.length,
            length: self.width,
            height: self.height,
        }
    }
}

/// A point in container coordinates, origin at the left-bottom-back corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A rectangular container (truck or shipping container).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    /// Opaque label used only for presets (e.g. "TRUCK", "40HC", "Custom").
    pub type_tag: String,
    pub dimensions: Dimensions,
    pub max_weight: Option<f64>,
}

impl Container {
    pub fn new(type_tag: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            type_tag: type_tag.into(),
            dimensions,
            max_weight: None,
        }
    }
}

/// Distinguishes the placement algorithm used for a cargo item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CargoKind {
    Box,
    Pallet,
    Cylinder,
}

impl CargoKind {
    /// Single-letter tag used when minting instance ids (see `PlacedItem`).
    pub fn letter(&self) -> char {
        match self {
            CargoKind::Box => 'B',
            CargoKind::Pallet => 'P',
            CargoKind::Cylinder => 'C',
        }
    }
}

/// Which axes a cargo item is permitted to rotate 90 degrees around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AllowedRotation {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

/// One line of a cargo manifest: a cargo type and how many of it there are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoItem {
    pub stable_id: String,
    pub display_name: String,
    pub kind: CargoKind,
    pub quantity: u32,
    pub color_tag: Option<String>,
    pub dimensions: Dimensions,
    pub allowed_rotation: AllowedRotation,
    pub stackable: bool,
}

impl CargoItem {
    /// For cylinders, the diameter (`dimensions.width`, required to equal
    /// `dimensions.length`) and the axial length (`dimensions.height`).
    pub fn cylinder_diameter(&self) -> f64 {
        debug_assert_eq!(self.kind, CargoKind::Cylinder);
        self.dimensions.width
    }

    pub fn cylinder_axial_length(&self) -> f64 {
        debug_assert_eq!(self.kind, CargoKind::Cylinder);
        self.dimensions.height
    }
}

/// Rotation around each axis, in radians, each constrained to `{0, pi/2}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Builds a rotation from `{0, pi/2}` flags on each axis. Callers are
    /// responsible for only passing `true` on axes permitted by the
    /// placed item's `allowed_rotation` (invariant 4, §3).
    pub fn from_flags(x: bool, y: bool, z: bool) -> Self {
        Self {
            x: if x { FRAC_PI_2 } else { 0.0 },
            y: if y { FRAC_PI_2 } else { 0.0 },
            z: if z { FRAC_PI_2 } else { 0.0 },
        }
    }
}

/// An item placed inside the container: position, orientation, and a back
/// reference to the manifest line it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedItem {
    pub source_stable_id: String,
    pub source_display_name: String,
    pub kind: CargoKind,
    /// Unique within a single `PackingResult`. See `crate::ids`.
    pub unique_instance_id: String,
    /// Minimum-coordinate corner of the item's AABB.
    pub position: Vector3,
    pub rotation: Rotation,
    pub effective_dimensions: Dimensions,
    pub layer_id: Option<u32>,
}

impl PlacedItem {
    /// Maximum-coordinate corner of the item's AABB.
    pub fn max_corner(&self) -> Vector3 {
        Vector3::new(
            self.position.x + self.effective_dimensions.width,
            self.position.y + self.effective_dimensions.length,
            self.position.z + self.effective_dimensions.height,
        )
    }
}

/// Result of a single `pack` call: what got placed, and what didn't.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackingResult {
    pub placed: Vec<PlacedItem>,
    /// display_name -> count of instances that could not be placed.
    pub unplaced_summary: std::collections::HashMap<String, u32>,
}

/// Per-kind volumetric and count statistics, part of `PackStats`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct KindStats {
    pub placed: u32,
    pub unplaced: u32,
    pub placed_volume: f64,
}

/// Summary statistics derived from a `PackingResult` and the manifest it was
/// computed from. See `crate::stats`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PackStats {
    pub items_requested: u32,
    pub items_placed: u32,
    pub items_unplaced: u32,
    pub container_volume: f64,
    pub used_volume: f64,
    pub fill_rate: f64,
    pub by_kind: std::collections::HashMap<CargoKind, KindStats>,
}
