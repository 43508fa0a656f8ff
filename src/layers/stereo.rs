use rand::rngs::SmallRng;

use crate::{
    canvas::{Brush, Canvas, CYAN, GREEN, WHITE},
    config::EffectsConfig,
    error::Result,
    layers::Layer,
    render::RenderState,
};

const WARM_TINT: [u8; 3] = [150, 100, 100];
const COOL_TINT: [u8; 3] = [100, 100, 150];
const TINT_ALPHA: u8 = 30;
const DIVIDER_ALPHA: u8 = 100;
const DIVIDER_STROKE: u32 = 3;
const CROSS_ALPHA: u8 = 150;
const CROSS_STROKE: u32 = 2;

/// Stereo split for binocular viewing: warm/cool half-screen tints, a white
/// divider, and one focus crosshair per eye
pub struct StereoSplitLayer {
    arm_length: u32,
    ring_radius: u32,
}

impl StereoSplitLayer {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            arm_length: config.cross_arm_length,
            ring_radius: config.cross_ring_radius,
        }
    }

    /// Draw a "+" with a surrounding ring, centered at (x, y)
    fn draw_focus_cross(&self, canvas: &mut Canvas, x: i32, y: i32, color: [u8; 3]) {
        let arm = self.arm_length as i32;
        let brush = Brush::new(color, CROSS_ALPHA).with_width(CROSS_STROKE);

        canvas.draw_line(x - arm, y, x + arm, y, brush);
        canvas.draw_line(x, y - arm, x, y + arm, brush);

        canvas.stroke_circle(x, y, self.ring_radius as f32, Brush::new(color, CROSS_ALPHA));
    }
}

/// X coordinate of the divider between the two eye views
pub fn divider_x(width: u32) -> i32 {
    (width / 2) as i32
}

/// Center of the left-eye focus cross
pub fn left_cross_center(width: u32, height: u32) -> (i32, i32) {
    ((width / 4) as i32, (height / 2) as i32)
}

/// Center of the right-eye focus cross
pub fn right_cross_center(width: u32, height: u32) -> (i32, i32) {
    ((3 * width as u64 / 4) as i32, (height / 2) as i32)
}

impl Layer for StereoSplitLayer {
    fn name(&self) -> &str {
        "stereo_split"
    }

    fn draw(&self, canvas: &mut Canvas, _state: &mut RenderState, _rng: &mut SmallRng) -> Result<()> {
        let width = canvas.width();
        let height = canvas.height();
        let half = divider_x(width);

        // Left eye leans warm, right eye leans cool
        canvas.fill_rect(0, 0, half as u32, height, Brush::new(WARM_TINT, TINT_ALPHA));
        canvas.fill_rect(half, 0, width - half as u32, height, Brush::new(COOL_TINT, TINT_ALPHA));

        canvas.draw_line(half, 0, half, height as i32, Brush::new(WHITE, DIVIDER_ALPHA).with_width(DIVIDER_STROKE));

        let (lx, ly) = left_cross_center(width, height);
        self.draw_focus_cross(canvas, lx, ly, GREEN);

        let (rx, ry) = right_cross_center(width, height);
        self.draw_focus_cross(canvas, rx, ry, CYAN);

        Ok(())
    }
}
