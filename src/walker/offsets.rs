//! Candidate step tables for the boundary walker.
//!
//! The walker probes neighbors in a fixed order {down, right, up, left}
//! (diagonals: {down-right, up-right, up-left, down-left}) and escalates the
//! search pattern as consecutive probes fail: orthogonal first, then
//! diagonal, then the same patterns scaled ×2 to jump over one-pixel gaps
//! left by thinning artifacts.

/// (dy, dx) per direction index: down, right, up, left.
const ORTHO: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
/// (dy, dx) per direction index: down-right, up-right, up-left, down-left.
const DIAG: [(isize, isize); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Search pattern selected by the cumulative failed-attempt counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Unit orthogonal steps (failures ≤ 4).
    Ortho,
    /// Unit diagonal steps (failures in 5..=8).
    Diag,
    /// Orthogonal steps scaled ×2, gap recovery (failures in 9..=12).
    OrthoJump,
    /// Diagonal steps scaled ×2, gap recovery (failures > 12).
    DiagJump,
}

impl SearchMode {
    /// Pattern in effect after `failures` consecutive failed probes.
    #[inline]
    pub fn for_failures(failures: u32) -> Self {
        match failures {
            0..=4 => SearchMode::Ortho,
            5..=8 => SearchMode::Diag,
            9..=12 => SearchMode::OrthoJump,
            _ => SearchMode::DiagJump,
        }
    }

    /// Candidate (dy, dx) for direction index `dir ∈ 0..4`.
    #[inline]
    pub fn offset(self, dir: usize) -> (isize, isize) {
        let ((dy, dx), scale) = match self {
            SearchMode::Ortho => (ORTHO[dir], 1),
            SearchMode::Diag => (DIAG[dir], 1),
            SearchMode::OrthoJump => (ORTHO[dir], 2),
            SearchMode::DiagJump => (DIAG[dir], 2),
        };
        (dy * scale, dx * scale)
    }
}
