//! The decoded pixel buffer and its typed views.

use rgb::{AsPixels as _, RGB8};

/// A decoded image: owned contiguous RGB bytes, rows top-down.
///
/// Produced once by the decoder and immutable afterwards. Storage is exactly
/// `width * height * 3` bytes, `[row][col]` with row 0 at the top of the
/// image, each pixel a red/green/blue triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub(crate) fn from_raw(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(bytes.len(), width as usize * height as usize * 3);
        Self {
            bytes,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the raw RGB bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Typed view of the pixel data, row-major top-down.
    pub fn as_pixels(&self) -> &[RGB8] {
        self.bytes.as_pixels()
    }

    /// The pixel at column `x`, row `y` (row 0 is the top of the image).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: u32, y: u32) -> RGB8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.as_pixels()[y as usize * self.width as usize + x as usize]
    }

    /// Iterator over rows of raw RGB bytes, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(self.width as usize * 3)
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGB8> {
        imgref::ImgRef::new(self.as_pixels(), self.width as usize, self.height as usize)
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    pub fn to_imgvec(&self) -> imgref::ImgVec<RGB8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}
