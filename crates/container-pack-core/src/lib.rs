//! Core library for packing cargo manifests into containers.
//!
//! - Algorithms: box wall-builder, pallet guillotine, cylinder strip packer
//!   (with an optional valley/honeycomb strategy)
//! - Pipeline: `pack` takes a `Container` and a cargo manifest and returns a
//!   `PackingResult` plus derived `PackStats`
//! - Data model is serde-serializable.
//!
//! Quick example:
//! ```ignore
//! use container_pack_core::prelude::*;
//!
//! let container = Container::new("40DC", Dimensions::new(235.0, 1203.0, 239.0));
//! let manifest = vec![CargoItem {
//!     stable_id: "crate-a".into(),
//!     display_name: "Crate A".into(),
//!     kind: CargoKind::Box,
//!     quantity: 10,
//!     color_tag: None,
//!     dimensions: Dimensions::new(50.0, 50.0, 50.0),
//!     allowed_rotation: AllowedRotation { x: false, y: true, z: false },
//!     stackable: true,
//! }];
//! let result = pack(&container, &manifest)?;
//! println!("placed: {}", result.placed.len());
//! # Ok::<(), container_pack_core::PackError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod model;
pub mod orchestrator;
pub mod packer;
pub mod pipeline;
pub mod presets;
pub mod stats;

pub use config::*;
pub use error::*;
pub use model::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `container_pack_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{CylinderStrategy, EngineConfig, EngineConfigBuilder, PalletRouting};
    pub use crate::error::PackError;
    pub use crate::model::{
        AllowedRotation, CargoItem, CargoKind, Container, Dimensions, KindStats, PackStats,
        PackingResult, PlacedItem, Rotation, Vector3,
    };
    pub use crate::pipeline::{pack, pack_with_config, pack_with_stats};
    pub use crate::presets::{all as all_presets, preset};
}
