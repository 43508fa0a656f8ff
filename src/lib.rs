//! # VHS/VR Viewer
//!
//! Render a synthetic "VHS tape + stereoscopic VR viewer" effect, frame by
//! frame, into an in-memory canvas: static noise, a moving scan line over a
//! fixed interlace grid, wobbling chromatic-aberration bands, breathing
//! corner distortion rings, and a stereo split with focus crosshairs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vhs_vr_viewer::{config::Config, driver::OffscreenSurface, render::FrameRenderer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let mut surface = OffscreenSurface::new(1080, 1920)?;
//!     let mut renderer = FrameRenderer::new(&config);
//!
//!     renderer.render_frame(&mut surface)?;
//!     surface.canvas().save_png("frame.png")?;
//!     Ok(())
//! }
//! ```
//!
//! For continuous rendering, hand the renderer and surface to a
//! [`RenderDriver`](driver::RenderDriver), which paces a background thread
//! at the configured frame interval and stops cooperatively.
//!
//! ## Architecture
//!
//! - [`canvas`] - The pixel buffer and alpha-blended draw primitives
//! - [`layers`] - The five effect layers behind the [`Layer`](layers::Layer) trait
//! - [`render`] - Animation state and the per-tick [`FrameRenderer`](render::FrameRenderer)
//! - [`driver`] - Background render loop, surface provider, status sink
//! - [`config`] - Configuration management

pub mod canvas;
pub mod config;
pub mod driver;
pub mod error;
pub mod layers;
pub mod render;

// Re-export commonly used types for convenience
pub use crate::{
    canvas::{Brush, Canvas},
    config::Config,
    driver::{OffscreenSurface, RenderDriver, SurfaceProvider},
    error::{RendererError, Result},
    layers::Layer,
    render::{FrameOutcome, FrameRenderer},
};
