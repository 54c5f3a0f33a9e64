//! Box wall-builder (§4.4): a free-block (3D rectangular volume) list
//! packer with a "deep right-block" split rule and lexicographic
//! (depth -> height -> width) scoring, biased toward flat, stackable
//! "walls" of cargo.

use crate::config::EngineConfig;
use crate::geometry::inside_container;
use crate::ids::IdMinter;
use crate::model::{Container, Dimensions, PlacedItem, Rotation, Vector3};
use crate::packer::Instance;

/// A free 3D rectangular volume tracked by the packer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FreeBlock {
    origin: Vector3,
    dims: Dimensions,
}

/// Minimum extent (cm) a free block must keep on every axis after a split;
/// smaller slivers are dropped rather than tracked.
const MIN_BLOCK_EXTENT: f64 = 1.0;

struct Candidate {
    block_index: usize,
    rotated: bool,
    effective_dims: Dimensions,
    score: f64,
}

/// Packs box (or, when routed here, pallet) instances into `container`,
/// returning placed items and the instances that did not fit.
pub fn pack(
    container: &Container,
    instances: Vec<Instance>,
    cfg: &EngineConfig,
    ids: &mut IdMinter,
) -> (Vec<PlacedItem>, Vec<Instance>) {
    let mut sorted = instances;
    sorted.sort_by(|a, b| {
        let key_b = (b.dimensions.height, b.dimensions.volume());
        let key_a = (a.dimensions.height, a.dimensions.volume());
        key_b
            .partial_cmp(&key_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut free: Vec<FreeBlock> = vec![FreeBlock {
        origin: Vector3::ZERO,
        dims: container.dimensions,
    }];
    let mut placed = Vec::new();
    let mut unplaced = Vec::new();

    for inst in sorted {
        match best_candidate(&free, &inst) {
            Some(cand) => {
                let block = free[cand.block_index];
                let position = block.origin;

                debug_assert!(
                    inside_container(position, cand.effective_dims, container),
                    "box placement escaped container bounds"
                );

                placed.push(PlacedItem {
                    source_stable_id: inst.stable_id.clone(),
                    source_display_name: inst.display_name.clone(),
                    kind: inst.kind,
                    unique_instance_id: ids.mint(&inst.stable_id, inst.kind),
                    position,
                    rotation: Rotation::from_flags(false, cand.rotated, false),
                    effective_dimensions: cand.effective_dims,
                    layer_id: None,
                });

                split_block(
                    &mut free,
                    cand.block_index,
                    block,
                    cand.effective_dims,
                    cfg.object_margin,
                );
            }
            None => unplaced.push(inst),
        }
    }

    (placed, unplaced)
}

/// Scores a free block for lexicographic depth -> height -> width ordering
/// (pack back-bottom-left).
fn score(block: &FreeBlock) -> f64 {
    block.origin.y * 1_000_000.0 + block.origin.z * 1_000.0 + block.origin.x
}

fn best_candidate(free: &[FreeBlock], inst: &Instance) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    let mut try_orientation = |dims: Dimensions, rotated: bool, best: &mut Option<Candidate>| {
        for (i, block) in free.iter().enumerate() {
            if dims.width <= block.dims.width
                && dims.length <= block.dims.length
                && dims.height <= block.dims.height
            {
                let s = score(block);
                let better = match best {
                    Some(c) => s < c.score,
                    None => true,
                };
                if better {
                    *best = Some(Candidate {
                        block_index: i,
                        rotated,
                        effective_dims: dims,
                        score: s,
                    });
                }
            }
        }
    };

    try_orientation(inst.dimensions, false, &mut best);
    if inst.allowed_rotation.y {
        try_orientation(inst.dimensions.swap_xy(), true, &mut best);
    }

    best
}

fn split_block(
    free: &mut Vec<FreeBlock>,
    index: usize,
    block: FreeBlock,
    used: Dimensions,
    margin: f64,
) {
    free.swap_remove(index);

    let top = FreeBlock {
        origin: Vector3::new(block.origin.x, block.origin.y, block.origin.z + used.height),
        dims: Dimensions::new(
            block.dims.width,
            block.dims.length,
            block.dims.height - used.height,
        ),
    };
    let right = FreeBlock {
        origin: Vector3::new(
            block.origin.x + used.width + margin,
            block.origin.y,
            block.origin.z,
        ),
        dims: Dimensions::new(
            block.dims.width - used.width - margin,
            block.dims.length,
            used.height,
        ),
    };
    let front = FreeBlock {
        origin: Vector3::new(
            block.origin.x,
            block.origin.y + used.length + margin,
            block.origin.z,
        ),
        dims: Dimensions::new(
            used.width,
            block.dims.length - used.length - margin,
            used.height,
        ),
    };

    for candidate in [top, right, front] {
        if candidate.dims.width >= MIN_BLOCK_EXTENT
            && candidate.dims.length >= MIN_BLOCK_EXTENT
            && candidate.dims.height >= MIN_BLOCK_EXTENT
        {
            free.push(candidate);
        }
    }
}
