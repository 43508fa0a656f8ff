use rand::{rngs::SmallRng, Rng};

use crate::{
    canvas::{Brush, Canvas, GREEN},
    config::EffectsConfig,
    error::Result,
    layers::Layer,
    render::RenderState,
};

/// Tape static: gray flecks plus stray green phosphor dots
///
/// Purely stochastic per frame; there is no temporal coherence between
/// consecutive frames.
pub struct NoiseLayer {
    flecks: usize,
    phosphor_dots: usize,
}

impl NoiseLayer {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            flecks: config.noise_flecks,
            phosphor_dots: config.phosphor_dots,
        }
    }
}

impl Layer for NoiseLayer {
    fn name(&self) -> &str {
        "noise"
    }

    fn draw(&self, canvas: &mut Canvas, _state: &mut RenderState, rng: &mut SmallRng) -> Result<()> {
        let width = canvas.width();
        let height = canvas.height();

        // Gray static
        for _ in 0..self.flecks {
            let x = rng.gen_range(0..width) as i32;
            let y = rng.gen_range(0..height) as i32;
            let size = rng.gen_range(1..=3u32);
            let brightness: u8 = rng.gen_range(50..200);
            let alpha: u8 = rng.gen_range(30..100);

            let gray = [brightness, brightness, brightness];
            canvas.fill_rect(x, y, size, size, Brush::new(gray, alpha));
        }

        // Green pixels, like on old monitors
        for _ in 0..self.phosphor_dots {
            let x = rng.gen_range(0..width) as i32;
            let y = rng.gen_range(0..height) as i32;
            let alpha: u8 = rng.gen_range(100..200);

            canvas.draw_point(x, y, Brush::new(GREEN, alpha));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_noise_leaves_marks_on_the_canvas() {
        let mut canvas = Canvas::new(64, 64);
        let mut state = RenderState::new();
        let mut rng = SmallRng::seed_from_u64(7);

        let layer = NoiseLayer::new(&EffectsConfig::default());
        layer.draw(&mut canvas, &mut state, &mut rng).unwrap();

        let touched = canvas
            .as_image()
            .pixels()
            .filter(|p| p.0 != [0, 0, 0])
            .count();
        assert!(touched > 0, "noise layer drew nothing");
    }

    #[test]
    fn test_noise_does_not_touch_animation_state() {
        let mut canvas = Canvas::new(32, 32);
        let mut state = RenderState::new();
        let mut rng = SmallRng::seed_from_u64(7);

        let layer = NoiseLayer::new(&EffectsConfig::default());
        layer.draw(&mut canvas, &mut state, &mut rng).unwrap();

        assert_eq!(state.scan_line_y(), 0);
        assert_eq!(state.wave_offset(), 0.0);
    }
}
