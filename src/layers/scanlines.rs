use rand::rngs::SmallRng;

use crate::{
    canvas::{Brush, Canvas, GREEN},
    config::EffectsConfig,
    error::Result,
    layers::Layer,
    render::RenderState,
};

const SCAN_LINE_ALPHA: u8 = 80;
const INTERLACE_GRAY: [u8; 3] = [100, 100, 100];
const INTERLACE_ALPHA: u8 = 30;
const TRACK_GRAY: [u8; 3] = [50, 50, 50];
const TRACK_ALPHA: u8 = 20;

/// The moving retrace line plus the fixed interlace pattern
///
/// This is the only layer that advances `scan_line_y`: the line moves by the
/// configured step each rendered frame and wraps modulo the canvas height.
/// The interlace grid underneath is fixed, recomputed every frame.
pub struct ScanLineLayer {
    step: u32,
    interlace_spacing: u32,
    track_spacing: u32,
}

impl ScanLineLayer {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            step: config.scan_line_step,
            interlace_spacing: config.interlace_spacing,
            track_spacing: config.track_spacing,
        }
    }
}

impl Layer for ScanLineLayer {
    fn name(&self) -> &str {
        "scan_lines"
    }

    fn draw(&self, canvas: &mut Canvas, state: &mut RenderState, _rng: &mut SmallRng) -> Result<()> {
        let width = canvas.width() as i32;
        let height = canvas.height();

        // The bright moving line
        let y = state.advance_scan_line(self.step, height) as i32;
        canvas.draw_line(0, y, width, y, Brush::new(GREEN, SCAN_LINE_ALPHA).with_width(3));

        // Fixed interlace rows
        let interlace = Brush::new(INTERLACE_GRAY, INTERLACE_ALPHA);
        for row in (0..height).step_by(self.interlace_spacing as usize) {
            canvas.draw_line(0, row as i32, width, row as i32, interlace);
        }

        // Faint vertical tape tracks
        let track = Brush::new(TRACK_GRAY, TRACK_ALPHA);
        for col in (0..canvas.width()).step_by(self.track_spacing as usize) {
            canvas.draw_line(col as i32, 0, col as i32, height as i32, track);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn draw_once(state: &mut RenderState, height: u32) {
        let mut canvas = Canvas::new(16, height);
        let mut rng = SmallRng::seed_from_u64(0);
        let layer = ScanLineLayer::new(&EffectsConfig::default());
        layer.draw(&mut canvas, state, &mut rng).unwrap();
    }

    #[test]
    fn test_scan_line_advances_by_step() {
        let mut state = RenderState::new();
        draw_once(&mut state, 100);
        assert_eq!(state.scan_line_y(), 5);
        draw_once(&mut state, 100);
        assert_eq!(state.scan_line_y(), 10);
    }

    #[test]
    fn test_scan_line_wraps_modulo_height() {
        let mut state = RenderState::new();
        for _ in 0..20 {
            draw_once(&mut state, 100);
        }
        // 20 * 5 = 100 ≡ 0 (mod 100)
        assert_eq!(state.scan_line_y(), 0);
    }

    #[test]
    fn test_moving_line_reads_green() {
        let mut canvas = Canvas::new(16, 64);
        let mut state = RenderState::new();
        let mut rng = SmallRng::seed_from_u64(0);
        let layer = ScanLineLayer::new(&EffectsConfig::default());
        layer.draw(&mut canvas, &mut state, &mut rng).unwrap();

        let y = state.scan_line_y();
        let pixel = canvas.get_pixel(8, y);
        assert!(pixel[1] > pixel[0], "scan line row should lean green: {:?}", pixel);
    }
}
