/// Borrowed 8-bit interleaved RGB view, row-major.
///
/// `stride` is the byte distance between row starts (`3 * w` when tightly
/// packed). The cluster window stage only reads the green channel.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Green-channel intensity at (x, y).
    #[inline]
    pub fn green(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x * 3 + 1]
    }
}
