use rand::rngs::SmallRng;

use crate::{
    canvas::{Brush, Canvas},
    error::Result,
    layers::Layer,
    render::RenderState,
};

const CORNER_GREEN: [u8; 3] = [0, 200, 0];
const CORNER_ALPHA: u8 = 50;
const CORNER_STROKE: u32 = 5;
const CORNER_MARGIN: i32 = 50;

/// Lens distortion hinted at by breathing stroked circles in the top-left
/// and bottom-right corners
pub struct CornerDistortionLayer;

impl CornerDistortionLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CornerDistortionLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer for CornerDistortionLayer {
    fn name(&self) -> &str {
        "corner_distortion"
    }

    fn draw(&self, canvas: &mut Canvas, state: &mut RenderState, _rng: &mut SmallRng) -> Result<()> {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;
        let wave = state.wave_offset();

        let brush = Brush::new(CORNER_GREEN, CORNER_ALPHA).with_width(CORNER_STROKE);

        let top_left_radius = 100.0 + 20.0 * wave.sin();
        canvas.stroke_circle(CORNER_MARGIN, CORNER_MARGIN, top_left_radius, brush);

        let bottom_right_radius = 80.0 + 15.0 * wave.cos();
        canvas.stroke_circle(width - CORNER_MARGIN, height - CORNER_MARGIN, bottom_right_radius, brush);

        Ok(())
    }
}
