use serde::Serialize;

/// Pixel coordinate in (row, column) order.
///
/// Row 0 is the top of the image; traced contours and window coordinates use
/// this convention throughout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    /// Row index (y)
    pub y: usize,
    /// Column index (x)
    pub x: usize,
}

impl Coord {
    #[inline]
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    /// Apply a signed (dy, dx) offset, returning `None` when the result
    /// leaves the `height × width` image bounds.
    #[inline]
    pub fn offset(&self, dy: isize, dx: isize, height: usize, width: usize) -> Option<Coord> {
        let y = self.y as isize + dy;
        let x = self.x as isize + dx;
        if y < 0 || x < 0 {
            return None;
        }
        let (y, x) = (y as usize, x as usize);
        if y >= height || x >= width {
            return None;
        }
        Some(Coord { y, x })
    }
}

/// Ordered trace of connected edge pixels, starting at its seed.
/// No coordinate repeats within one contour.
pub type Contour = Vec<Coord>;

/// All contours produced by one walker run, in seed scan order.
#[derive(Clone, Debug, Default)]
pub struct BoundarySet {
    pub contours: Vec<Contour>,
    /// Row that supplied the seeds, if any row qualified.
    pub seed_row: Option<usize>,
}

impl BoundarySet {
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }
}

/// Final numbers of one analysis run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AnalysisResult {
    /// 8-connected clusters found in the thresholded boundary window.
    pub cluster_count: usize,
    /// Pixel length of the selected inner boundary.
    pub boundary_len: usize,
    /// Boundary coordinates that produced a full-width window row.
    pub retained_windows: usize,
    pub latency_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn offset_respects_bounds() {
        let c = Coord::new(0, 0);
        assert_eq!(c.offset(-1, 0, 10, 10), None);
        assert_eq!(c.offset(0, -1, 10, 10), None);
        assert_eq!(c.offset(1, 2, 10, 10), Some(Coord::new(1, 2)));

        let edge = Coord::new(9, 9);
        assert_eq!(edge.offset(1, 0, 10, 10), None);
        assert_eq!(edge.offset(0, 1, 10, 10), None);
        assert_eq!(edge.offset(-2, -2, 10, 10), Some(Coord::new(7, 7)));
    }
}
