//! Renders a fretboard off-screen and writes it to a PNG file.

use anyhow::{anyhow, Result};
use clap::Parser;
use frets::Fretboard;
use std::path::PathBuf;
use std::sync::Arc;
use tiny_skia::Pixmap;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trellis::basic::FilledBox;
use trellis::{Color, Error, Extent, HeadlessView, Layers, Rect, View};

#[derive(Parser)]
#[command(name = "frets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Draws a guitar fretboard into a PNG file", long_about = None)]
struct Cli {
    /// Output path
    #[arg(short, long, default_value = "frets.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value = "640")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "160")]
    height: u32,

    /// Background color as a hex string (RRGGBB or RRGGBBAA)
    #[arg(short, long, default_value = "3b2412")]
    background: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let background = Color::from_hex(&cli.background)
        .ok_or_else(|| anyhow!("invalid background color: {}", cli.background))?;

    let host = Arc::new(HeadlessView::new(Extent::new(
        cli.width as f32,
        cli.height as f32,
    )));
    let mut view = View::new(host.clone())?;
    view.set_content(
        Layers::default()
            .with(FilledBox::new(background))
            .with(Fretboard::new()),
    );

    // Keep the image within what the content accepts, the way a window would be constrained.
    let limits = view.current_limits();
    let width = limits.clamp_width(cli.width as f32).ceil();
    let height = limits.clamp_height(cli.height as f32).ceil();
    if width != cli.width as f32 || height != cli.height as f32 {
        warn!(width, height, "requested size is outside the content limits, adjusting");
    }
    host.resize(Extent::new(width, height));

    let (w, h) = (width as u32, height as u32);
    let mut pixmap = Pixmap::new(w, h).ok_or(Error::SurfaceAllocation {
        width: w,
        height: h,
    })?;
    view.draw(pixmap.as_mut(), Rect::new(0., 0., width, height));
    let tasks = view.poll();
    debug!(tasks, "drained event loop");

    pixmap
        .save_png(&cli.output)
        .map_err(|e| Error::Encode(e.to_string()))?;
    info!(path = %cli.output.display(), width = w, height = h, "wrote fretboard");
    Ok(())
}
