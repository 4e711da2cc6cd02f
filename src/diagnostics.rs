use serde::Serialize;

use crate::types::Coord;

/// Per-stage observations of one analysis run.
#[derive(Clone, Debug, Serialize)]
pub struct ProcessingDiagnostics {
    pub input_width: usize,
    pub input_height: usize,
    /// Row that supplied the trace seeds.
    pub seed_row: Option<usize>,
    pub seeds: usize,
    /// Length of every traced contour, in seed scan order.
    pub contour_lengths: Vec<usize>,
    /// Index of the contour selected as the inner boundary.
    pub selected_contour: usize,
    pub retained_windows: usize,
    pub dropped_windows: usize,
    pub walk_ms: f64,
    pub window_ms: f64,
    pub label_ms: f64,
    pub total_latency_ms: f64,
}

/// Everything one `process` call produces: the headline numbers, the raw
/// window coordinates for an external visualization step, and diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    pub result: crate::types::AnalysisResult,
    /// Raw coordinates of every retained sample strip, 1:1 with grid rows.
    pub window_coordinates: Vec<Vec<Coord>>,
    pub diagnostics: ProcessingDiagnostics,
}
