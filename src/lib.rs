//! # bmpview
//!
//! Decoder for uncompressed 24-bit Windows bitmaps (the classic
//! 40-byte-info-header variant) plus a minimal window viewer built on it.
//!
//! The decoder validates the two fixed-layout headers, computes the padded
//! scanline stride, and converts the file's bottom-up BGR scanlines into a
//! top-down RGB [`PixelBuffer`] ready for display. Decoding is all-or-nothing
//! and deterministic: the same bytes always produce the same buffer, and no
//! partial buffer is ever exposed on error.
//!
//! ## Non-Goals
//!
//! - Compressed bitmaps (RLE, bitfields)
//! - Bit depths other than 24, color palettes, alpha channels
//! - Any container other than `BM` with a 40-byte info header
//!
//! ## Usage
//!
//! ```no_run
//! let data = std::fs::read("image.bmp").unwrap();
//! let image = bmpview::decode(&data)?;
//! println!("{}x{}", image.width(), image.height());
//! let top_left = image.pixel(0, 0);
//! # Ok::<(), bmpview::BmpError>(())
//! ```

#![forbid(unsafe_code)]

mod decode;
mod display;
mod error;
mod header;
mod limits;
mod pixel;

// Re-exports
pub use decode::{decode, decode_pixels, decode_with_limits, row_stride};
pub use display::{DisplayError, Event, EventSource, Surface, blit};
pub use error::BmpError;
pub use header::{FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader, parse_headers};
pub use limits::Limits;
pub use pixel::PixelBuffer;
