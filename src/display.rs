//! The rendering boundary: surfaces, events, and the bulk blit.
//!
//! The core decoder knows nothing about windows. It hands a finished
//! [`PixelBuffer`] to a [`Surface`], and a separate [`EventSource`] says
//! when to stop. The viewer binary implements both over a real window;
//! tests implement them over plain structs.

use crate::pixel::PixelBuffer;

/// Errors from the display boundary, separate from the decode taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("display initialization failed: {0}")]
    InitFailure(String),

    #[error("present failed: {0}")]
    PresentFailure(String),
}

/// Something decoded pixels can be drawn onto.
pub trait Surface {
    /// Width and height of the drawable area in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Write one pixel. `y` counts down from the top of the surface.
    fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8);

    /// Make everything written so far visible.
    fn present(&mut self) -> Result<(), DisplayError>;
}

/// An input event the viewer reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// The user asked to close the viewer.
    Quit,
}

/// A non-blocking source of input events.
pub trait EventSource {
    /// Returns the next pending event, or `None` when there is none.
    fn poll(&mut self) -> Option<Event>;
}

/// Write every pixel of `buffer` onto `surface`.
///
/// The buffer is already top-down, so buffer row `y` goes straight to
/// surface row `y` with no further row-order transformation. Pixels outside
/// the surface are clipped.
pub fn blit(buffer: &PixelBuffer, surface: &mut dyn Surface) {
    let (surf_w, surf_h) = surface.dimensions();
    let cols = buffer.width().min(surf_w) as usize;

    for (y, row) in buffer.rows().enumerate().take(surf_h as usize) {
        for (x, pix) in row.chunks_exact(3).enumerate().take(cols) {
            surface.set_pixel(x as u32, y as u32, pix[0], pix[1], pix[2]);
        }
    }
}
