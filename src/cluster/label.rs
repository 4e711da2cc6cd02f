use super::window::SampleGrid;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the connected foreground components of a sample grid.
///
/// Foreground is any nonzero sample; connectivity is 8-way, so diagonally
/// adjacent cells belong to the same cluster. An empty grid counts 0.
pub fn count_clusters(grid: &SampleGrid) -> usize {
    let w = grid.width();
    let h = grid.rows();
    if w == 0 || h == 0 {
        return 0;
    }

    let n = w * h;
    let mut seen = vec![0u8; n];
    let mut stack: Vec<usize> = Vec::with_capacity(64);
    let mut count = 0usize;

    for idx in 0..n {
        if seen[idx] != 0 || grid.row(idx / w)[idx % w] == 0 {
            continue;
        }

        count += 1;
        seen[idx] = 1;
        stack.push(idx);

        while let Some(p) = stack.pop() {
            let x = p % w;
            let y = p / w;
            for (dx, dy) in NEIGH_OFFSETS {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                    continue;
                }
                let neighbor = yn as usize * w + xn as usize;
                if seen[neighbor] != 0 {
                    continue;
                }
                if grid.row(yn as usize)[xn as usize] == 0 {
                    continue;
                }
                seen[neighbor] = 1;
                stack.push(neighbor);
            }
        }
    }

    count
}
