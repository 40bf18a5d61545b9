/// Owned RGBA8 pixel data read back from a drawing surface.
///
/// Layout: tightly packed rows, top-left origin, 4 bytes per pixel with
/// premultiplied alpha (what tiny-skia produces and what the GPU upload expects).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    pub(crate) fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), byte_len(width, height));
        Self { width, height, data }
    }

    /// Wraps caller-provided RGBA8 bytes. Returns `None` if the length does not
    /// match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == byte_len(width, height)).then(|| Self::new(width, height, data))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }

    /// Premultiplied RGBA at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels().get(idx).copied()
    }

    /// Copies the buffer with color un-premultiplied, as image encoders expect.
    pub fn to_straight_alpha(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for &[r, g, b, a] in self.pixels() {
            if a == 0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            let unmul = |c: u8| ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8;
            out.extend_from_slice(&[unmul(r), unmul(g), unmul(b), a]);
        }
        out
    }
}

/// Borrowed view of a drawing surface's current contents.
///
/// Same layout as [`RasterBuffer`]. Valid until the surface is next resized or drawn.
#[derive(Debug, Copy, Clone)]
pub struct PixelView<'a> {
    pub width: u32,
    pub height: u32,
    pub data: &'a [u8],
}

impl<'a> PixelView<'a> {
    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    /// Copies the viewed pixels into an owned buffer.
    pub fn to_buffer(&self) -> RasterBuffer {
        RasterBuffer::new(self.width, self.height, self.data.to_vec())
    }
}

#[inline]
pub(crate) fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_one() -> RasterBuffer {
        RasterBuffer::from_rgba(2, 1, vec![255, 0, 0, 255, 64, 32, 0, 128]).unwrap()
    }

    #[test]
    fn from_rgba_rejects_wrong_length() {
        assert!(RasterBuffer::from_rgba(2, 2, vec![0; 15]).is_none());
        assert!(RasterBuffer::from_rgba(2, 2, vec![0; 16]).is_some());
    }

    #[test]
    fn pixel_reads_row_major() {
        let buf = two_by_one();
        assert_eq!(buf.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(buf.pixel(1, 0), Some([64, 32, 0, 128]));
    }

    #[test]
    fn pixel_out_of_range_is_none() {
        let buf = two_by_one();
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.pixel(0, 1), None);
    }

    #[test]
    fn straight_alpha_undoes_premultiplication() {
        let straight = two_by_one().to_straight_alpha();
        assert_eq!(&straight[..4], &[255, 0, 0, 255]);
        // 64 / (128/255) ≈ 127.5 → 128, 32 → 64
        assert_eq!(&straight[4..], &[128, 64, 0, 128]);
    }

    #[test]
    fn straight_alpha_zeroes_transparent_pixels() {
        let buf = RasterBuffer::from_rgba(1, 1, vec![9, 9, 9, 0]).unwrap();
        assert_eq!(buf.to_straight_alpha(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn view_copies_into_buffer() {
        let data = [1u8, 2, 3, 4];
        let view = PixelView { width: 1, height: 1, data: &data };
        assert_eq!(view.bytes_per_row(), 4);
        assert_eq!(view.to_buffer().as_bytes(), &data);
    }
}
