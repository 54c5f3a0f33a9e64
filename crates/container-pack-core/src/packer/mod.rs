pub mod boxes;
pub mod cylinders;
pub mod guillotine;
pub mod pallets;
pub mod valley;

/// An expanded cargo instance: one unit of a `CargoItem`, carrying enough of
/// the original line to mint ids and report unplaced counts without holding
/// a borrow across the packer's lifetime.
#[derive(Debug, Clone)]
pub struct Instance {
    pub stable_id: String,
    pub display_name: String,
    pub kind: crate::model::CargoKind,
    pub dimensions: crate::model::Dimensions,
    pub allowed_rotation: crate::model::AllowedRotation,
    pub stackable: bool,
}

impl Instance {
    /// Expands every `CargoItem` in `items` into `quantity` independent
    /// instances, in manifest order.
    pub fn expand(items: &[crate::model::CargoItem]) -> Vec<Instance> {
        let mut out = Vec::new();
        for item in items {
            for _ in 0..item.quantity {
                out.push(Instance {
                    stable_id: item.stable_id.clone(),
                    display_name: item.display_name.clone(),
                    kind: item.kind,
                    dimensions: item.dimensions,
                    allowed_rotation: item.allowed_rotation,
                    stackable: item.stackable,
                });
            }
        }
        out
    }
}
