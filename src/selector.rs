//! Inner-boundary selection among traced contours.
//!
//! The heuristic assumes the first two traced contours are the two epidermis
//! boundaries in traced order: when the first contour ends at a larger
//! column than it started (the annotation curves rightward), the inner
//! boundary is the second contour, otherwise the first. This is a fixed
//! geometric rule, not a general curve classifier.

use crate::types::Contour;

/// Reasons why inner-boundary selection may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// Fewer than the two contours the heuristic requires (an empty edge
    /// map ends up here as well).
    DegenerateBoundarySet { found: usize },
    /// A contour with no coordinates; traces always carry their seed, so
    /// this indicates a malformed input set.
    EmptyContour,
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::DegenerateBoundarySet { found } => {
                write!(f, "degenerate boundary set ({found} contour(s), need ≥2)")
            }
            SelectError::EmptyContour => write!(f, "contour without coordinates"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Index of the contour representing the inner boundary.
///
/// Requires at least two contours; compares the start and end columns of
/// `contours[0]` and picks `contours[1]` when it curves rightward.
pub fn select_inner_index(contours: &[Contour]) -> Result<usize, SelectError> {
    if contours.len() < 2 {
        return Err(SelectError::DegenerateBoundarySet {
            found: contours.len(),
        });
    }

    let first = &contours[0];
    let (start, end) = match (first.first(), first.last()) {
        (Some(s), Some(e)) => (s, e),
        _ => return Err(SelectError::EmptyContour),
    };

    if start.x < end.x {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// The contour representing the inner boundary. See [`select_inner_index`].
pub fn select_inner(contours: &[Contour]) -> Result<&Contour, SelectError> {
    select_inner_index(contours).map(|i| &contours[i])
}
