use log::debug;
use serde::Deserialize;

use crate::image::ImageRgb8;
use crate::types::Coord;

/// Geometry and threshold of the boundary sampling window.
///
/// Both values are required inputs of an analysis run; the core supplies no
/// defaults for them.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct WindowOptions {
    /// Window half-width in pixels; each strip spans `2 * pixel_width + 1`
    /// columns centered on the boundary coordinate.
    pub pixel_width: usize,
    /// Green intensities at or below this cutoff are stored as 0.
    pub green_threshold: u8,
}

impl WindowOptions {
    /// Full strip width in samples.
    #[inline]
    pub fn window_width(&self) -> usize {
        2 * self.pixel_width + 1
    }
}

/// Rectangular stack of thresholded sample strips, row-major.
///
/// Every row has the same width by construction; the grid is the sole input
/// of [`count_clusters`](super::count_clusters).
#[derive(Clone, Debug)]
pub struct SampleGrid {
    width: usize,
    data: Vec<u8>,
}

impl SampleGrid {
    /// Empty grid with the given fixed row width.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            data: Vec::new(),
        }
    }

    /// Row width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of retained rows.
    #[inline]
    pub fn rows(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.data.len() / self.width
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn row(&self, r: usize) -> &[u8] {
        let start = r * self.width;
        &self.data[start..start + self.width]
    }

    /// Append one strip; its length must equal the grid width.
    pub fn push_row(&mut self, row: &[u8]) {
        assert_eq!(row.len(), self.width, "sample row width mismatch");
        self.data.extend_from_slice(row);
    }
}

/// Sample grid paired 1:1 with the raw coordinates of each retained strip.
/// The coordinate windows exist for downstream visualization only.
#[derive(Clone, Debug)]
pub struct WindowSamples {
    pub grid: SampleGrid,
    pub coordinates: Vec<Vec<Coord>>,
}

/// Sample a thresholded green-channel strip around every contour coordinate.
///
/// A coordinate is skipped entirely when its strip would run outside the
/// image: `x - pixel_width < 0` or `x + pixel_width + 1 > width - 1`. Note
/// the second comparison also rejects strips that would merely touch the
/// last column; downstream counts depend on this exact rule.
pub fn build_windows(
    color: &ImageRgb8,
    contour: &[Coord],
    options: &WindowOptions,
) -> WindowSamples {
    let window_width = options.window_width();
    let mut grid = SampleGrid::new(window_width);
    let mut coordinates = Vec::new();

    if color.w == 0 || color.h == 0 {
        return WindowSamples { grid, coordinates };
    }

    let mut strip = Vec::with_capacity(window_width);
    let mut strip_coords = Vec::with_capacity(window_width);
    for &coord in contour {
        let (y, x) = (coord.y, coord.x);
        if x < options.pixel_width
            || x.saturating_add(options.pixel_width) + 1 > color.w - 1
        {
            continue;
        }

        strip.clear();
        strip_coords.clear();
        for i in (x - options.pixel_width)..=(x + options.pixel_width) {
            let green = color.green(i, y);
            strip.push(if green > options.green_threshold {
                green
            } else {
                0
            });
            strip_coords.push(Coord::new(y, i));
        }

        grid.push_row(&strip);
        coordinates.push(strip_coords.clone());
    }

    debug!(
        "windows: retained {}/{} boundary coordinate(s), strip width {}",
        grid.rows(),
        contour.len(),
        window_width
    );

    WindowSamples { grid, coordinates }
}

#[cfg(test)]
mod tests {
    use super::{build_windows, WindowOptions};
    use crate::image::ImageRgb8;
    use crate::types::Coord;

    /// Solid-color RGB buffer with a helper to poke individual green values.
    fn rgb_buffer(w: usize, h: usize, green: u8) -> Vec<u8> {
        let mut data = vec![0u8; w * h * 3];
        for px in 0..w * h {
            data[px * 3 + 1] = green;
        }
        data
    }

    fn view(w: usize, h: usize, data: &[u8]) -> ImageRgb8<'_> {
        ImageRgb8 {
            w,
            h,
            stride: w * 3,
            data,
        }
    }

    #[test]
    fn strips_have_fixed_width_and_thresholded_values() {
        let mut data = rgb_buffer(10, 10, 50);
        // one bright pixel inside the strip of (5, 4)
        data[(5 * 10 + 3) * 3 + 1] = 220;
        let img = view(10, 10, &data);

        let opts = WindowOptions {
            pixel_width: 2,
            green_threshold: 100,
        };
        let out = build_windows(&img, &[Coord::new(5, 4)], &opts);

        assert_eq!(out.grid.rows(), 1);
        assert_eq!(out.grid.width(), 5);
        assert_eq!(out.grid.row(0), &[0, 220, 0, 0, 0]);
        assert_eq!(
            out.coordinates[0],
            (2..=6).map(|x| Coord::new(5, x)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn near_border_rows_are_dropped_whole() {
        let data = rgb_buffer(10, 10, 200);
        let img = view(10, 10, &data);
        let opts = WindowOptions {
            pixel_width: 3,
            green_threshold: 100,
        };

        // column 1 would need columns -2..=4
        let out = build_windows(&img, &[Coord::new(4, 1)], &opts);
        assert!(out.grid.is_empty());
        assert!(out.coordinates.is_empty());
    }

    #[test]
    fn right_border_rule_rejects_strips_touching_last_column() {
        let data = rgb_buffer(10, 10, 200);
        let img = view(10, 10, &data);
        let opts = WindowOptions {
            pixel_width: 3,
            green_threshold: 100,
        };

        // x=5: 5+3+1 = 9, not above width-1 = 9 -> kept
        let kept = build_windows(&img, &[Coord::new(4, 5)], &opts);
        assert_eq!(kept.grid.rows(), 1);

        // x=6: 6+3+1 = 10 > 9 -> dropped, even though columns 3..=9 exist
        let dropped = build_windows(&img, &[Coord::new(4, 6)], &opts);
        assert_eq!(dropped.grid.rows(), 0);
    }

    #[test]
    fn grid_rows_follow_contour_order() {
        let data = rgb_buffer(12, 12, 150);
        let img = view(12, 12, &data);
        let opts = WindowOptions {
            pixel_width: 1,
            green_threshold: 100,
        };
        let contour = vec![Coord::new(9, 5), Coord::new(8, 5), Coord::new(7, 6)];
        let out = build_windows(&img, &contour, &opts);

        assert_eq!(out.grid.rows(), 3);
        assert_eq!(out.coordinates[0][1], Coord::new(9, 5));
        assert_eq!(out.coordinates[2][1], Coord::new(7, 6));
    }
}
