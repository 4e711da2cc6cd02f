use crate::image::ImageU8;
use crate::types::Coord;

/// Scan rows from the bottom of the image upward and return the first row
/// containing at least one pixel with intensity above `threshold`, together
/// with every qualifying pixel of that row as a seed coordinate.
///
/// Returns `None` when no row qualifies (blank edge map).
pub(super) fn find_seeds(edges: &ImageU8, threshold: u8) -> Option<(usize, Vec<Coord>)> {
    for y in (0..edges.h).rev() {
        let row = edges.row(y);
        let seeds: Vec<Coord> = row
            .iter()
            .enumerate()
            .filter(|(_, &v)| v > threshold)
            .map(|(x, _)| Coord::new(y, x))
            .collect();
        if !seeds.is_empty() {
            return Some((y, seeds));
        }
    }
    None
}
