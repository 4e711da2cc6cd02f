//! Boundary walker: seed discovery and pixel-level contour tracing.
//!
//! The walker consumes a binary/greyscale edge map produced by an external
//! edge detector and emits one ordered [`Contour`] per seed. The algorithm:
//!
//! - Seed scan: rows are scanned from the image bottom upward; the first row
//!   holding any pixel above the seed threshold contributes every such pixel
//!   as a seed. A blank map yields an empty [`BoundarySet`].
//! - Per-seed trace: starting at the seed, candidate neighbors are probed in
//!   a fixed rotation (down, right, up, left). A cumulative failure counter
//!   escalates the probe pattern — unit orthogonal, unit diagonal, then both
//!   scaled ×2 to hop over single-pixel gaps (see [`offsets::SearchMode`]).
//!   A probe succeeds when it lands on a nonzero pixel not yet in the
//!   contour; success resets the rotation and the failure counter.
//! - Termination: an out-of-bounds probe after the contour has left its seed
//!   ends the whole trace; otherwise the per-contour step cap does. Neither
//!   is an error.
//!
//! Traces are independent per seed (the edge map is only read), so the
//! optional `parallel` feature runs one rayon task per seed with identical
//! output ordering.
//!
//! Complexity: O(steps) per seed with O(1) membership checks via a
//! per-contour hash set; the step cap bounds the worst case.

mod offsets;
mod seeds;
mod tracer;

pub use offsets::SearchMode;

use log::debug;
use serde::Deserialize;

use crate::image::ImageU8;
use crate::types::BoundarySet;

use tracer::SeedTracer;

/// Knobs for seed detection and trace termination.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct WalkerOptions {
    /// Seed rows must hold a pixel strictly above this intensity.
    pub seed_threshold: u8,
    /// Hard cap on probe iterations per contour; exhausting it ends the
    /// trace with whatever was collected.
    pub max_steps: usize,
}

impl Default for WalkerOptions {
    fn default() -> Self {
        Self {
            seed_threshold: 128,
            max_steps: 200_000,
        }
    }
}

/// Trace one contour per seed found at the bottom of `edges`.
pub fn trace_contours(edges: &ImageU8, options: &WalkerOptions) -> BoundarySet {
    let Some((seed_row, seeds)) = seeds::find_seeds(edges, options.seed_threshold) else {
        debug!("walker: no seed row found, returning empty boundary set");
        return BoundarySet::default();
    };
    debug!(
        "walker: seed row {} with {} seed(s), cap {} steps",
        seed_row,
        seeds.len(),
        options.max_steps
    );

    let tracer = SeedTracer::new(edges, options.max_steps);
    let contours = seeds.iter().map(|&seed| tracer.trace(seed)).collect();

    BoundarySet {
        contours,
        seed_row: Some(seed_row),
    }
}

/// Same as [`trace_contours`] but traces seeds on a rayon pool.
///
/// Seed traces share nothing but the read-only edge map; output ordering
/// matches the sequential variant.
#[cfg(feature = "parallel")]
pub fn trace_contours_parallel(edges: &ImageU8, options: &WalkerOptions) -> BoundarySet {
    use rayon::prelude::*;

    let Some((seed_row, seeds)) = seeds::find_seeds(edges, options.seed_threshold) else {
        debug!("walker: no seed row found, returning empty boundary set");
        return BoundarySet::default();
    };

    let tracer = SeedTracer::new(edges, options.max_steps);
    let contours = seeds.par_iter().map(|&seed| tracer.trace(seed)).collect();

    BoundarySet {
        contours,
        seed_row: Some(seed_row),
    }
}
