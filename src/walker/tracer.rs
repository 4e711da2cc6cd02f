use std::collections::HashSet;

use crate::image::ImageU8;
use crate::types::{Contour, Coord};

use super::offsets::SearchMode;

/// Per-seed contour-following state machine.
///
/// Holds only the read-only edge map and the step cap; all mutable trace
/// state is local to [`SeedTracer::trace`], so one tracer can serve many
/// seeds (sequentially or from parallel workers).
pub(super) struct SeedTracer<'a> {
    edges: &'a ImageU8<'a>,
    max_steps: usize,
}

impl<'a> SeedTracer<'a> {
    pub(super) fn new(edges: &'a ImageU8<'a>, max_steps: usize) -> Self {
        Self { edges, max_steps }
    }

    /// Trace one contour starting at `seed`.
    ///
    /// The trace ends when an out-of-bounds candidate is probed after the
    /// contour has moved past its seed, or when the step cap runs out.
    /// Both are normal termination, not errors; the contour collected so
    /// far (possibly the seed alone) is returned.
    pub(super) fn trace(&self, seed: Coord) -> Contour {
        let h = self.edges.h;
        let w = self.edges.w;

        let mut contour: Contour = vec![seed];
        let mut visited: HashSet<Coord> = HashSet::new();
        visited.insert(seed);

        let mut current = seed;
        let mut dir = 0usize;
        let mut failures = 0u32;
        let mut terminated = false;
        let mut steps = 0usize;

        while !terminated {
            if steps >= self.max_steps {
                break;
            }

            let (dy, dx) = SearchMode::for_failures(failures).offset(dir);
            match current.offset(dy, dx, h, w) {
                None => {
                    dir = (dir + 1) % 4;
                    failures += 1;
                    // One border probe past the seed ends the whole trace.
                    if contour.len() > 1 {
                        terminated = true;
                    }
                }
                Some(next) => {
                    if self.edges.get(next.x, next.y) != 0 && visited.insert(next) {
                        contour.push(next);
                        current = next;
                        dir = 0;
                        failures = 0;
                    } else {
                        dir = (dir + 1) % 4;
                        failures += 1;
                    }
                }
            }
            steps += 1;
        }

        contour
    }
}
