//! bmpview: decode a 24-bit uncompressed BMP and show it in a window.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use log::{Level, error, info};
use minifb::{Key, Window, WindowOptions};

use bmpview::{
    DisplayError, Event, EventSource, Limits, PixelBuffer, Surface, blit, decode_with_limits,
};

#[derive(Parser)]
#[command(name = "bmpview", version)]
#[command(about = "View an uncompressed 24-bit BMP image in a window")]
struct Cli {
    /// Path to the BMP file.
    image: PathBuf,

    /// Reject images wider than this many pixels.
    #[arg(long)]
    max_width: Option<u64>,

    /// Reject images taller than this many pixels.
    #[arg(long)]
    max_height: Option<u64>,

    /// Use debug log level.
    #[arg(long, conflicts_with_all = ["trace", "quiet"])]
    debug: bool,

    /// Use trace log level.
    #[arg(long, conflicts_with = "quiet")]
    trace: bool,

    /// Only log errors.
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let wants_exit_zero =
                matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            let _ = e.print();
            return if wants_exit_zero {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    setup_logger(&cli);

    if let Err(err) = run(&cli) {
        error!("{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn setup_logger(cli: &Cli) {
    let log_level = if cli.trace {
        Level::Trace
    } else if cli.debug {
        Level::Debug
    } else if cli.quiet {
        Level::Error
    } else {
        Level::Info
    };

    // Only fails if a logger is already set, which it is not.
    let _ = simple_logger::init_with_level(log_level);
}

fn run(cli: &Cli) -> Result<()> {
    let data = std::fs::read(&cli.image)
        .with_context(|| format!("could not read {}", cli.image.display()))?;

    let limits = Limits {
        max_width: cli.max_width,
        max_height: cli.max_height,
        ..Default::default()
    };
    let image = decode_with_limits(&data, &limits)
        .with_context(|| format!("could not decode {}", cli.image.display()))?;
    info!("Decoded {}x{} image", image.width(), image.height());

    let filename = cli
        .image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.image.display().to_string());
    let mut window = MinifbWindow::open(&format!("{filename} — bmpview"), &image)
        .context("could not open window")?;

    blit(&image, &mut window);

    loop {
        window.present().context("could not present frame")?;
        if matches!(window.poll(), Some(Event::Quit)) {
            break;
        }
    }
    Ok(())
}

/// A real window implementing both boundary traits over minifb.
///
/// Pixels are packed into minifb's 0RGB framebuffer here, outside the core.
struct MinifbWindow {
    window: Window,
    framebuffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl MinifbWindow {
    fn open(title: &str, image: &PixelBuffer) -> Result<Self, DisplayError> {
        let (width, height) = (image.width(), image.height());
        let mut window = Window::new(
            title,
            width as usize,
            height as usize,
            WindowOptions::default(),
        )
        .map_err(|e| DisplayError::InitFailure(e.to_string()))?;
        window.set_target_fps(60);

        Ok(Self {
            window,
            framebuffer: vec![0u32; width as usize * height as usize],
            width,
            height,
        })
    }
}

impl Surface for MinifbWindow {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let packed = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
        self.framebuffer[y as usize * self.width as usize + x as usize] = packed;
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.window
            .update_with_buffer(&self.framebuffer, self.width as usize, self.height as usize)
            .map_err(|e| DisplayError::PresentFailure(e.to_string()))
    }
}

impl EventSource for MinifbWindow {
    fn poll(&mut self) -> Option<Event> {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            return Some(Event::Quit);
        }
        None
    }
}
