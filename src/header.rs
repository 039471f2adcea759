//! BMP file header and info header parsing.
//!
//! Both headers use a fixed on-disk layout with little-endian multi-byte
//! integers and no padding between fields, so every field is decoded
//! explicitly byte-by-byte rather than through in-memory struct layout.

use log::trace;

use crate::error::BmpError;

/// Size of the BITMAPFILEHEADER on disk.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the BITMAPINFOHEADER on disk.
pub const INFO_HEADER_SIZE: usize = 40;

/// The 14-byte BMP file header.
///
/// The `BM` signature is validated during parsing and not stored; all other
/// fields are returned exactly as they appear in the byte stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Declared total file size in bytes. Informational only.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset from the start of the file to the pixel array.
    pub pixel_data_offset: u32,
}

/// The 40-byte BITMAPINFOHEADER.
///
/// Only `planes`, `bit_count` and `compression` are validated; everything
/// else is carried through as-is, including a `header_size` other than 40.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    /// Signed on disk. Validated positive by the pixel decoder, not here.
    pub width: i32,
    /// Signed on disk; a positive value means bottom-up row storage.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        if self.pos + N > self.data.len() {
            return Err(BmpError::TruncatedHeader {
                needed: self.pos + N,
                actual: self.data.len(),
            });
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        self.read_fixed_bytes::<2>().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        self.read_fixed_bytes::<4>().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BmpError> {
        self.read_fixed_bytes::<4>().map(i32::from_le_bytes)
    }
}

// ── Header parsing ──────────────────────────────────────────────────

/// Parse and validate the two fixed-layout headers at the start of `data`.
///
/// Reads exactly [`FILE_HEADER_SIZE`] + [`INFO_HEADER_SIZE`] bytes. Fails
/// with [`BmpError::InvalidSignature`] if the file does not start with
/// `BM`, [`BmpError::TruncatedHeader`] if either header is cut short, and
/// [`BmpError::UnsupportedFormat`] for anything other than 24-bit
/// uncompressed single-plane data.
pub fn parse_headers(data: &[u8]) -> Result<(FileHeader, InfoHeader), BmpError> {
    let mut bytes = Cursor::new(data);

    let [m0, m1] = bytes.read_fixed_bytes::<2>()?;
    if m0 != b'B' || m1 != b'M' {
        return Err(BmpError::InvalidSignature);
    }

    let file_header = FileHeader {
        file_size: bytes.get_u32_le()?,
        reserved1: bytes.get_u16_le()?,
        reserved2: bytes.get_u16_le()?,
        pixel_data_offset: bytes.get_u32_le()?,
    };

    let info_header = InfoHeader {
        header_size: bytes.get_u32_le()?,
        width: bytes.get_i32_le()?,
        height: bytes.get_i32_le()?,
        planes: bytes.get_u16_le()?,
        bit_count: bytes.get_u16_le()?,
        compression: bytes.get_u32_le()?,
        image_size: bytes.get_u32_le()?,
        x_pixels_per_meter: bytes.get_i32_le()?,
        y_pixels_per_meter: bytes.get_i32_le()?,
        colors_used: bytes.get_u32_le()?,
        colors_important: bytes.get_u32_le()?,
    };

    trace!("Width: {}", info_header.width);
    trace!("Height: {}", info_header.height);
    trace!("Bit depth: {}", info_header.bit_count);
    trace!("Compression: {}", info_header.compression);
    trace!("Pixel data offset: {}", file_header.pixel_data_offset);

    if info_header.bit_count != 24 {
        return Err(BmpError::UnsupportedFormat(format!(
            "bit depth {} (only 24-bit supported)",
            info_header.bit_count
        )));
    }
    if info_header.compression != 0 {
        return Err(BmpError::UnsupportedFormat(format!(
            "compression scheme {} (only uncompressed supported)",
            info_header.compression
        )));
    }
    if info_header.planes != 1 {
        return Err(BmpError::UnsupportedFormat(format!(
            "planes field is {}, expected 1",
            info_header.planes
        )));
    }

    Ok((file_header, info_header))
}
