use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use vhs_vr_viewer::{
    config::Config,
    driver::{OffscreenSurface, RenderDriver},
    render::{FrameOutcome, FrameRenderer},
};

#[derive(Parser)]
#[command(
    name = "vhs-vr-viewer",
    version,
    about = "Synthetic VHS tape + stereoscopic VR viewer effect",
    long_about = "Renders the VHS/VR effect procedurally, either offline (a fixed number of \
frames, optionally saved as PNGs) or as a paced background render loop."
)]
struct Cli {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 1080)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1920)]
    height: u32,

    /// Render this many frames offline instead of running the loop
    #[arg(short, long)]
    frames: Option<u32>,

    /// Directory for PNG output (every frame offline, final frame otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How long to run the render loop, in seconds
    #[arg(short, long, default_value_t = 5)]
    duration: u64,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting VHS/VR viewer v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };
    config.validate()?;

    match cli.frames {
        Some(frames) => render_offline(&cli, &config, frames),
        None => run_loop(&cli, &config),
    }
}

/// Render a fixed number of frames without a background thread
fn render_offline(cli: &Cli, config: &Config, frames: u32) -> Result<()> {
    let mut surface = OffscreenSurface::new(cli.width, cli.height)?;
    let mut renderer = FrameRenderer::new(config);

    if let Some(dir) = &cli.output {
        std::fs::create_dir_all(dir)?;
    }

    info!("Rendering {} frames at {}x{}", frames, cli.width, cli.height);
    for n in 0..frames {
        let outcome = renderer.render_frame(&mut surface)?;
        if outcome == FrameOutcome::Skipped {
            continue;
        }

        if let Some(dir) = &cli.output {
            let path = dir.join(format!("frame_{n:04}.png"));
            surface.canvas().save_png(&path)?;
        }
    }

    info!("Done; {} frames presented", surface.frames_presented());
    Ok(())
}

/// Run the paced render loop for the requested duration
fn run_loop(cli: &Cli, config: &Config) -> Result<()> {
    let surface = OffscreenSurface::new(cli.width, cli.height)?;
    let renderer = FrameRenderer::new(config);
    let mut driver = RenderDriver::new(config, renderer, surface);

    driver.start()?;
    std::thread::sleep(Duration::from_secs(cli.duration));
    driver.stop();

    let presented = driver.with_surface(|s| s.frames_presented());
    info!("Presented {} frames over {}s", presented, cli.duration);

    if let Some(dir) = &cli.output {
        std::fs::create_dir_all(dir)?;
        let path = dir.join("final.png");
        driver.with_surface(|s| s.canvas().save_png(&path))?;
        info!("Final frame saved to {:?}", path);
    }

    Ok(())
}
