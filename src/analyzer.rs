//! Analysis pipeline orchestrating boundary tracing and cluster counting.
//!
//! [`BoundaryAnalyzer`] exposes a simple API: feed an edge map of the tissue
//! annotation plus the matching color image, get the cluster count along the
//! inner boundary with per-stage diagnostics. Internally it coordinates the
//! walker, the inner-boundary selector, windowed green-channel sampling, and
//! connected-component counting.
//!
//! Typical usage:
//! ```no_run
//! use boundary_detector::{AnalyzerParams, BoundaryAnalyzer};
//! use boundary_detector::image::{ImageRgb8, ImageU8};
//!
//! # fn example(edges: ImageU8, color: ImageRgb8) {
//! let analyzer = BoundaryAnalyzer::new(AnalyzerParams {
//!     pixel_width: 50,
//!     green_threshold: 200,
//!     walker: Default::default(),
//! });
//! match analyzer.process(edges, color) {
//!     Ok(report) => println!("clusters: {}", report.result.cluster_count),
//!     Err(err) => eprintln!("analysis failed: {err}"),
//! }
//! # }
//! ```

use std::time::Instant;

use log::debug;
use serde::Deserialize;

use crate::cluster::{build_windows, count_clusters, WindowOptions};
use crate::diagnostics::{AnalysisReport, ProcessingDiagnostics};
use crate::image::{ImageRgb8, ImageU8};
use crate::selector::{select_inner_index, SelectError};
use crate::types::AnalysisResult;
use crate::walker::{trace_contours, WalkerOptions};

/// Parameters of one analyzer instance.
///
/// `pixel_width` and `green_threshold` are required and carry no defaults;
/// walker knobs fall back to [`WalkerOptions::default`].
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AnalyzerParams {
    /// Window half-width around each boundary coordinate, in pixels.
    pub pixel_width: usize,
    /// Green-channel cutoff for cluster membership.
    pub green_threshold: u8,
    #[serde(default)]
    pub walker: WalkerOptions,
}

/// Reasons why an analysis run may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// Edge map and color image must cover the same pixel grid.
    SizeMismatch {
        edge: (usize, usize),
        color: (usize, usize),
    },
    /// The walker produced too few contours for boundary selection.
    DegenerateBoundary(SelectError),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::SizeMismatch { edge, color } => write!(
                f,
                "edge map {}x{} does not match color image {}x{}",
                edge.0, edge.1, color.0, color.1
            ),
            AnalysisError::DegenerateBoundary(err) => write!(f, "boundary selection: {err}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<SelectError> for AnalysisError {
    fn from(err: SelectError) -> Self {
        AnalysisError::DegenerateBoundary(err)
    }
}

/// Pipeline runner: walker → selector → window sampling → cluster count.
pub struct BoundaryAnalyzer {
    params: AnalyzerParams,
}

impl BoundaryAnalyzer {
    /// Create an analyzer with the supplied parameters.
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Run the full pipeline on one edge-map / color-image pair.
    pub fn process(
        &self,
        edges: ImageU8,
        color: ImageRgb8,
    ) -> Result<AnalysisReport, AnalysisError> {
        let total_start = Instant::now();

        if edges.w != color.w || edges.h != color.h {
            return Err(AnalysisError::SizeMismatch {
                edge: (edges.w, edges.h),
                color: (color.w, color.h),
            });
        }

        let walk_start = Instant::now();
        let boundaries = trace_contours(&edges, &self.params.walker);
        let walk_ms = walk_start.elapsed().as_secs_f64() * 1000.0;

        let selected = select_inner_index(&boundaries.contours)?;
        let inner = &boundaries.contours[selected];
        debug!(
            "analyzer: selected contour {} of {} ({} px)",
            selected,
            boundaries.len(),
            inner.len()
        );

        let window_opts = WindowOptions {
            pixel_width: self.params.pixel_width,
            green_threshold: self.params.green_threshold,
        };
        let window_start = Instant::now();
        let samples = build_windows(&color, inner, &window_opts);
        let window_ms = window_start.elapsed().as_secs_f64() * 1000.0;

        let label_start = Instant::now();
        let cluster_count = count_clusters(&samples.grid);
        let label_ms = label_start.elapsed().as_secs_f64() * 1000.0;

        let retained = samples.grid.rows();
        let boundary_len = inner.len();
        let total_latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "analyzer: {} cluster(s) over {} window row(s) in {:.3} ms",
            cluster_count, retained, total_latency_ms
        );

        Ok(AnalysisReport {
            result: AnalysisResult {
                cluster_count,
                boundary_len,
                retained_windows: retained,
                latency_ms: total_latency_ms,
            },
            window_coordinates: samples.coordinates,
            diagnostics: ProcessingDiagnostics {
                input_width: edges.w,
                input_height: edges.h,
                seed_row: boundaries.seed_row,
                seeds: boundaries.len(),
                contour_lengths: boundaries.contours.iter().map(Vec::len).collect(),
                selected_contour: selected,
                retained_windows: retained,
                dropped_windows: boundary_len - retained,
                walk_ms,
                window_ms,
                label_ms,
                total_latency_ms,
            },
        })
    }
}
