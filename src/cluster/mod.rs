//! Windowed green-channel sampling and cluster counting along a boundary.
//!
//! Two pure stages with no shared state:
//!
//! - [`build_windows`] samples a fixed-width horizontal strip of the color
//!   image's green channel around every boundary coordinate, thresholds it,
//!   and stacks the strips into a rectangular [`SampleGrid`]. Coordinates
//!   whose strip would leave the image are dropped whole, never truncated.
//! - [`count_clusters`] labels 8-connected nonzero components of the grid
//!   and returns their count.
//!
//! Keeping geometry and labeling separate lets each be tested on its own.

mod label;
mod window;

pub use label::count_clusters;
pub use window::{build_windows, SampleGrid, WindowOptions, WindowSamples};
