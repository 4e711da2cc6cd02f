mod common;

use boundary_detector::cluster::{build_windows, count_clusters, SampleGrid, WindowOptions};
use boundary_detector::image::ImageRgb8;
use boundary_detector::types::Coord;
use common::synthetic_image::{set_green, solid_green_rgb};

fn rgb_view(w: usize, h: usize, data: &[u8]) -> ImageRgb8<'_> {
    ImageRgb8 {
        w,
        h,
        stride: w * 3,
        data,
    }
}

#[test]
fn every_retained_window_has_fixed_width() {
    let w = 20;
    let h = 20;
    let data = solid_green_rgb(w, h, 150);
    let img = rgb_view(w, h, &data);

    // mix of retained and dropped coordinates
    let contour: Vec<Coord> = (0..w).map(|x| Coord::new(10, x)).collect();
    let opts = WindowOptions {
        pixel_width: 4,
        green_threshold: 100,
    };
    let out = build_windows(&img, &contour, &opts);

    assert!(out.grid.rows() > 0);
    assert!(out.grid.rows() < contour.len());
    assert_eq!(out.grid.width(), 2 * opts.pixel_width + 1);
    for r in 0..out.grid.rows() {
        assert_eq!(out.grid.row(r).len(), 9);
        assert_eq!(out.coordinates[r].len(), 9);
    }
}

#[test]
fn window_at_column_one_is_dropped_for_pixel_width_three() {
    let data = solid_green_rgb(10, 10, 250);
    let img = rgb_view(10, 10, &data);
    let opts = WindowOptions {
        pixel_width: 3,
        green_threshold: 100,
    };
    let out = build_windows(&img, &[Coord::new(5, 1)], &opts);
    assert!(out.grid.is_empty());
}

#[test]
fn all_zero_grid_has_no_clusters() {
    let mut grid = SampleGrid::new(7);
    for _ in 0..5 {
        grid.push_row(&[0; 7]);
    }
    assert_eq!(count_clusters(&grid), 0);
}

#[test]
fn diagonally_adjacent_cells_form_one_cluster() {
    let mut grid = SampleGrid::new(4);
    grid.push_row(&[0, 200, 0, 0]);
    grid.push_row(&[0, 0, 180, 0]);
    grid.push_row(&[0, 0, 0, 0]);
    assert_eq!(count_clusters(&grid), 1);
}

#[test]
fn raising_the_threshold_never_increases_the_count() {
    // Two blobs of different brightness along the boundary: the faint one
    // drops out first as the threshold rises, then the bright one.
    let w = 30;
    let h = 10;
    let mut data = solid_green_rgb(w, h, 0);
    for x in 5..8 {
        set_green(&mut data, w, x, 4, 180); // faint blob
    }
    for x in 15..18 {
        set_green(&mut data, w, x, 4, 240); // bright blob
    }
    let img = rgb_view(w, h, &data);
    let contour: Vec<Coord> = (10..=12).map(|x| Coord::new(4, x)).collect();

    let mut last = usize::MAX;
    for threshold in [100u8, 200, 250] {
        let opts = WindowOptions {
            pixel_width: 8,
            green_threshold: threshold,
        };
        let out = build_windows(&img, &contour, &opts);
        let count = count_clusters(&out.grid);
        assert!(
            count <= last,
            "count increased from {last} to {count} at threshold {threshold}"
        );
        last = count;
    }
    assert_eq!(last, 0, "highest threshold should suppress everything");
}

#[test]
fn thresholds_partition_blobs_as_expected() {
    let w = 30;
    let h = 10;
    let mut data = solid_green_rgb(w, h, 0);
    for x in 5..8 {
        set_green(&mut data, w, x, 4, 180);
    }
    for x in 15..18 {
        set_green(&mut data, w, x, 4, 240);
    }
    let img = rgb_view(w, h, &data);
    let contour: Vec<Coord> = (10..=12).map(|x| Coord::new(4, x)).collect();

    let count_at = |threshold: u8| {
        let opts = WindowOptions {
            pixel_width: 8,
            green_threshold: threshold,
        };
        count_clusters(&build_windows(&img, &contour, &opts).grid)
    };

    assert_eq!(count_at(100), 2);
    assert_eq!(count_at(200), 1);
    assert_eq!(count_at(250), 0);
}
