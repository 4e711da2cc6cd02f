/// Blank (all-zero) edge map buffer.
pub fn blank_edge_map(width: usize, height: usize) -> Vec<u8> {
    vec![0u8; width * height]
}

/// Edge map with a horizontal run of bright pixels on one row.
pub fn horizontal_line(width: usize, height: usize, row: usize, x0: usize, x1: usize) -> Vec<u8> {
    assert!(row < height && x1 < width && x0 <= x1);
    let mut img = blank_edge_map(width, height);
    for x in x0..=x1 {
        img[row * width + x] = 255;
    }
    img
}

/// Edge map with full-height vertical lines at the given columns.
pub fn vertical_lines(width: usize, height: usize, columns: &[usize]) -> Vec<u8> {
    let mut img = blank_edge_map(width, height);
    for &x in columns {
        assert!(x < width);
        for y in 0..height {
            img[y * width + x] = 255;
        }
    }
    img
}

/// Interleaved RGB buffer with a uniform green level everywhere.
pub fn solid_green_rgb(width: usize, height: usize, green: u8) -> Vec<u8> {
    let mut data = vec![0u8; width * height * 3];
    for px in 0..width * height {
        data[px * 3 + 1] = green;
    }
    data
}

/// Overwrite the green channel of a single pixel in an interleaved buffer.
pub fn set_green(data: &mut [u8], width: usize, x: usize, y: usize, green: u8) {
    data[(y * width + x) * 3 + 1] = green;
}
