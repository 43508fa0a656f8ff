use rand::rngs::SmallRng;

use crate::{canvas::Canvas, error::Result, render::RenderState};

/// Core trait every effect layer implements
///
/// Layers are applied in a fixed order, each blending on top of what the
/// previous one drew. A layer may mutate the animation state (the scan-line
/// layer advances `scan_line_y`) and may draw from the shared random
/// generator, but it owns no pixels and no paint state of its own.
pub trait Layer: Send + Sync {
    /// Returns the unique name of this layer
    fn name(&self) -> &str;

    /// Draw this layer onto the canvas
    ///
    /// # Arguments
    ///
    /// * `canvas` - The frame being composed, already cleared and carrying
    ///   the output of earlier layers
    /// * `state` - Animation state for the current rendering session
    /// * `rng` - The single shared random source for all stochastic draws
    fn draw(&self, canvas: &mut Canvas, state: &mut RenderState, rng: &mut SmallRng) -> Result<()>;
}
