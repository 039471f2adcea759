//! Pixel decoding: bottom-up padded BGR scanlines into a top-down RGB buffer.

use log::debug;

use crate::error::BmpError;
use crate::header::{FileHeader, InfoHeader, parse_headers};
use crate::limits::Limits;
use crate::pixel::PixelBuffer;

/// Bytes occupied by one scanline in the file: the logical row byte count
/// (`width * 3`) rounded up to the next multiple of 4. `None` on overflow.
pub fn row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)?
        .checked_add(3)
        .map(|r| r & !3)
}

/// Decode a complete BMP file: parse headers, then decode pixels.
pub fn decode(data: &[u8]) -> Result<PixelBuffer, BmpError> {
    let (file_header, info_header) = parse_headers(data)?;
    decode_pixels(data, &file_header, &info_header)
}

/// Decode a complete BMP file, rejecting images that exceed `limits`
/// before any pixel allocation happens.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<PixelBuffer, BmpError> {
    let (file_header, info_header) = parse_headers(data)?;
    if info_header.width > 0 && info_header.height > 0 {
        limits.check(info_header.width as u32, info_header.height as u32)?;
        if let Some(out_size) = (info_header.width as usize)
            .checked_mul(info_header.height as usize)
            .and_then(|wh| wh.checked_mul(3))
        {
            limits.check_memory(out_size)?;
        }
    }
    decode_pixels(data, &file_header, &info_header)
}

/// Decode the pixel array of `data` (the complete file contents) using
/// already-parsed headers.
///
/// Seeks to `file_header.pixel_data_offset`, reads `height` bottom-up
/// scanlines of [`row_stride`] bytes each, and produces a top-down RGB
/// buffer. Per-row padding bytes are skipped, never interpreted as pixels.
/// All-or-nothing: on any error no partial buffer is returned.
pub fn decode_pixels(
    data: &[u8],
    file_header: &FileHeader,
    info_header: &InfoHeader,
) -> Result<PixelBuffer, BmpError> {
    // Signed fields from an untrusted file; negative height (the top-down
    // storage variant) is rejected rather than handled.
    if info_header.width <= 0 || info_header.height <= 0 {
        return Err(BmpError::InvalidDimensions {
            width: info_header.width,
            height: info_header.height,
        });
    }
    let width = info_header.width as u32;
    let height = info_header.height as u32;
    let w = width as usize;
    let h = height as usize;

    let too_large = || BmpError::DimensionsTooLarge { width, height };
    let stride = row_stride(width).ok_or_else(too_large)?;
    let row_bytes = w * 3;
    let pixel_data_size = stride.checked_mul(h).ok_or_else(too_large)?;
    let out_size = row_bytes.checked_mul(h).ok_or_else(too_large)?;

    let offset = file_header.pixel_data_offset as usize;
    let region = data.get(offset..).ok_or(BmpError::TruncatedPixelData {
        needed: pixel_data_size,
        actual: 0,
    })?;
    if region.len() < pixel_data_size {
        return Err(BmpError::TruncatedPixelData {
            needed: pixel_data_size,
            actual: region.len(),
        });
    }

    debug!("Decoding {width}x{height}, stride {stride}, pixel data at offset {offset}");

    // Stored rows run bottom-to-top, so the first scanline lands in the
    // last output row. Pixels are BGR on disk.
    let mut out = vec![0u8; out_size];
    for (in_row, out_row) in region
        .chunks_exact(stride)
        .take(h)
        .zip(out.rchunks_exact_mut(row_bytes))
    {
        out_row.copy_from_slice(&in_row[..row_bytes]);
        for pix in out_row.chunks_exact_mut(3) {
            pix.swap(0, 2);
        }
    }

    Ok(PixelBuffer::from_raw(out, width, height))
}
