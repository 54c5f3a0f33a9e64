//! Engine-wide tunables: margins, tolerances, the cylinder grouping
//! threshold, and the strategy switches for pallet routing and cylinder
//! stacking, each with the default the component design calls for.

use serde::{Deserialize, Serialize};

/// Which packer routes palletized cargo: the box wall-builder, or the
/// dedicated pallet floor optimizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PalletRouting {
    /// Pallets flow through the box wall-builder.
    BoxBuilder,
    /// Pallets flow through the dedicated pallet floor optimizer.
    Guillotine,
}

/// Which strategy the cylinder component uses to stack cylinders atop one
/// another.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CylinderStrategy {
    /// Strip-based packer with AABB-approximated support (default, active path).
    Strip,
    /// Honeycomb/valley nesting using circle-pair tangency math.
    Valley,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum gap enforced between any two placed items (cm).
    pub object_margin: f64,
    /// Cylinders are grouped into the same strip when their axial length is
    /// within this many centimeters of the group's first member.
    pub cylinder_group_length_tolerance: f64,
    /// Tolerance used by the cylinder packer's "same layer" support check (cm).
    pub cylinder_support_tolerance: f64,
    /// Step size (cm) used when scanning candidate X positions.
    pub scan_step: f64,
    pub pallet_routing: PalletRouting,
    pub cylinder_strategy: CylinderStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            object_margin: 0.1,
            cylinder_group_length_tolerance: 25.0,
            cylinder_support_tolerance: 1.0,
            scan_step: 1.0,
            pallet_routing: PalletRouting::BoxBuilder,
            cylinder_strategy: CylinderStrategy::Strip,
        }
    }
}

/// Builder for `EngineConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct EngineConfigBuilder {
    cfg: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: EngineConfig::default(),
        }
    }
    pub fn object_margin(mut self, v: f64) -> Self {
        self.cfg.object_margin = v;
        self
    }
    pub fn cylinder_group_length_tolerance(mut self, v: f64) -> Self {
        self.cfg.cylinder_group_length_tolerance = v;
        self
    }
    pub fn cylinder_support_tolerance(mut self, v: f64) -> Self {
        self.cfg.cylinder_support_tolerance = v;
        self
    }
    pub fn scan_step(mut self, v: f64) -> Self {
        self.cfg.scan_step = v;
        self
    }
    pub fn pallet_routing(mut self, v: PalletRouting) -> Self {
        self.cfg.pallet_routing = v;
        self
    }
    pub fn cylinder_strategy(mut self, v: CylinderStrategy) -> Self {
        self.cfg.cylinder_strategy = v;
        self
    }
    pub fn build(self) -> EngineConfig {
        self.cfg
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }
}
