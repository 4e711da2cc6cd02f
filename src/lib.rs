#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod cluster;
pub mod diagnostics;
pub mod image;
pub mod selector;
pub mod types;
pub mod walker;

// Glue modules for the demo tooling.
pub mod config;
pub mod pairing;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{AnalysisError, AnalyzerParams, BoundaryAnalyzer};
pub use crate::diagnostics::{AnalysisReport, ProcessingDiagnostics};
pub use crate::types::{AnalysisResult, BoundarySet, Contour, Coord};

// Stage-level entry points for callers composing their own pipeline.
pub use crate::cluster::{build_windows, count_clusters, SampleGrid, WindowOptions};
pub use crate::selector::{select_inner, select_inner_index, SelectError};
pub use crate::walker::{trace_contours, WalkerOptions};

#[cfg(feature = "parallel")]
pub use crate::walker::trace_contours_parallel;

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{ImageRgb8, ImageU8};
    pub use crate::{AnalysisReport, AnalyzerParams, BoundaryAnalyzer};
}
