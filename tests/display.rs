//! Blit behavior at the rendering boundary, using a recording fake surface.

use bmpview::*;

/// A surface that remembers every write as an RGB grid.
struct RecordingSurface {
    width: u32,
    height: u32,
    grid: Vec<(u8, u8, u8)>,
    writes: usize,
    presents: usize,
}

impl RecordingSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            grid: vec![(0, 0, 0); width as usize * height as usize],
            writes: 0,
            presents: 0,
        }
    }

    fn at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        self.grid[y as usize * self.width as usize + x as usize]
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        assert!(x < self.width && y < self.height, "write out of bounds");
        self.grid[y as usize * self.width as usize + x as usize] = (r, g, b);
        self.writes += 1;
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.presents += 1;
        Ok(())
    }
}

/// A canned event stream.
struct ScriptedEvents {
    events: Vec<Option<Event>>,
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Option<Event> {
        if self.events.is_empty() {
            None
        } else {
            self.events.remove(0)
        }
    }
}

fn checkerboard(width: i32, height: i32) -> PixelBuffer {
    let w = width as usize;
    let stride = row_stride(width as u32).unwrap();
    let mut scanlines = vec![0u8; stride * height as usize];
    for y in 0..height as usize {
        for x in 0..w {
            let off = y * stride + x * 3;
            if (x + y) % 2 == 0 {
                scanlines[off..off + 3].copy_from_slice(&[128, 0, 255]); // BGR
            } else {
                scanlines[off..off + 3].copy_from_slice(&[50, 200, 0]);
            }
        }
    }

    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes());
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes());
    bmp.extend_from_slice(&scanlines);
    decode(&bmp).unwrap()
}

#[test]
fn blit_writes_rows_top_down_without_reordering() {
    let image = checkerboard(3, 2);
    let mut surface = RecordingSurface::new(3, 2);

    blit(&image, &mut surface);

    assert_eq!(surface.writes, 6, "one write per pixel");
    for y in 0..2u32 {
        for x in 0..3u32 {
            let expected = image.pixel(x, y);
            assert_eq!(
                surface.at(x, y),
                (expected.r, expected.g, expected.b),
                "surface ({x},{y}) must equal buffer ({x},{y})"
            );
        }
    }
}

#[test]
fn blit_clips_to_a_smaller_surface() {
    let image = checkerboard(4, 4);
    let mut surface = RecordingSurface::new(2, 3);

    blit(&image, &mut surface);

    assert_eq!(surface.writes, 6, "only the overlapping 2x3 region is drawn");
    let expected = image.pixel(1, 2);
    assert_eq!(surface.at(1, 2), (expected.r, expected.g, expected.b));
}

#[test]
fn blit_leaves_extra_surface_area_untouched() {
    let image = checkerboard(1, 1);
    let mut surface = RecordingSurface::new(3, 3);

    blit(&image, &mut surface);

    assert_eq!(surface.writes, 1);
    assert_eq!(surface.at(2, 2), (0, 0, 0));
}

#[test]
fn event_source_drives_a_quit_loop() {
    let image = checkerboard(2, 2);
    let mut surface = RecordingSurface::new(2, 2);
    let mut events = ScriptedEvents {
        events: vec![None, None, Some(Event::Quit)],
    };

    // The viewer's loop shape: blit once, present every frame until quit.
    blit(&image, &mut surface);
    loop {
        surface.present().unwrap();
        if matches!(events.poll(), Some(Event::Quit)) {
            break;
        }
    }

    assert_eq!(surface.presents, 3);
}
