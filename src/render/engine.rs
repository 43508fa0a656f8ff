use std::time::Instant;

use rand::{rngs::SmallRng, SeedableRng};
use tracing::trace;

use crate::{
    canvas::BLACK,
    config::Config,
    driver::SurfaceProvider,
    error::Result,
    layers::{standard_stack, Layer},
    render::RenderState,
};

/// Outcome of one render tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was drawn and presented
    Rendered,
    /// The surface was unavailable; nothing was drawn and no state moved
    Skipped,
}

/// The per-tick procedural renderer
///
/// Owns the animation state, the shared random source, and the fixed layer
/// stack. One instance lives for a whole rendering session; the driver calls
/// [`render_frame`](FrameRenderer::render_frame) once per tick.
pub struct FrameRenderer {
    state: RenderState,
    rng: SmallRng,
    layers: Vec<Box<dyn Layer>>,
}

impl FrameRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            state: RenderState::new(),
            rng: SmallRng::from_entropy(),
            layers: standard_stack(&config.effects),
        }
    }

    /// The animation state carried across frames
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Forget the previous frame's timestamp; the next frame sees a zero
    /// delta. Called by the driver whenever the loop (re)starts.
    pub fn reset_clock(&mut self) {
        self.state.reset_clock();
    }

    /// Render one frame into the surface
    ///
    /// If the surface cannot be locked this tick the frame is skipped
    /// entirely: zero draw calls, zero state mutation, and `Ok(Skipped)` —
    /// an unavailable surface is not an error.
    pub fn render_frame<S: SurfaceProvider + ?Sized>(&mut self, surface: &mut S) -> Result<FrameOutcome> {
        if !surface.is_valid() {
            return Ok(FrameOutcome::Skipped);
        }

        {
            let canvas = match surface.lock() {
                Some(canvas) => canvas,
                None => return Ok(FrameOutcome::Skipped),
            };

            // Dimensions are re-read every frame; they may have changed.
            let width = canvas.width();
            let height = canvas.height();
            if width == 0 || height == 0 {
                return Ok(FrameOutcome::Skipped);
            }

            canvas.clear(BLACK);

            let delta = self.state.advance_wave(Instant::now());
            trace!(width, height, delta, wave = self.state.wave_offset(), "rendering frame");

            for layer in &self.layers {
                trace!(layer = layer.name(), "applying layer");
                layer.draw(canvas, &mut self.state, &mut self.rng)?;
            }
        }

        surface.unlock_and_present();
        Ok(FrameOutcome::Rendered)
    }
}
