use rand::rngs::SmallRng;

use crate::{
    canvas::{Brush, Canvas},
    error::Result,
    layers::Layer,
    render::RenderState,
};

const BAND_ALPHA: u8 = 30;
const RED_BAND_HEIGHT: u32 = 20;
const BLUE_BAND_HEIGHT: u32 = 15;
const BAND_COUNT: u32 = 3;

/// Chromatic-aberration bands: translucent red and blue stripes whose
/// vertical positions wobble with the global wave phase
pub struct ColorBandLayer;

impl ColorBandLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ColorBandLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Center row of red band `i` at the given wave phase
pub fn red_band_center(height: u32, wave: f32, i: u32) -> i32 {
    let jitter = (10.0 * (0.5 * wave + i as f32).sin()).round() as i32;
    (height / 4 * (i + 1)) as i32 + jitter
}

/// Center row of blue band `i` at the given wave phase
pub fn blue_band_center(height: u32, wave: f32, i: u32) -> i32 {
    let jitter = (8.0 * (0.7 * wave + i as f32).cos()).round() as i32;
    (height / 5 * (i + 2)) as i32 + jitter
}

impl Layer for ColorBandLayer {
    fn name(&self) -> &str {
        "color_bands"
    }

    fn draw(&self, canvas: &mut Canvas, state: &mut RenderState, _rng: &mut SmallRng) -> Result<()> {
        let width = canvas.width();
        let height = canvas.height();
        let wave = state.wave_offset();

        let red = Brush::new([255, 0, 0], BAND_ALPHA);
        for i in 0..BAND_COUNT {
            let center = red_band_center(height, wave, i);
            let top = center - (RED_BAND_HEIGHT / 2) as i32;
            canvas.fill_rect(0, top, width, RED_BAND_HEIGHT, red);
        }

        let blue = Brush::new([0, 0, 255], BAND_ALPHA);
        for i in 0..BAND_COUNT {
            let center = blue_band_center(height, wave, i);
            let top = center - (BLUE_BAND_HEIGHT / 2) as i32;
            canvas.fill_rect(0, top, width, BLUE_BAND_HEIGHT, blue);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_red_band_centers_at_zero_phase() {
        // jitter = round(10 * sin(i))
        assert_eq!(red_band_center(1920, 0.0, 0), 480);
        assert_eq!(red_band_center(1920, 0.0, 1), 960 + 8);
        assert_eq!(red_band_center(1920, 0.0, 2), 1440 + 9);
    }

    #[test]
    fn test_red_band_center_at_frozen_phase() {
        // wave = 3.5: round(10 * sin(1.75)) = 10
        assert_eq!(red_band_center(1920, 3.5, 0), 490);
    }

    #[test]
    fn test_blue_band_centers_at_zero_phase() {
        // jitter = round(8 * cos(i))
        assert_eq!(blue_band_center(1920, 0.0, 0), 768 + 8);
        assert_eq!(blue_band_center(1920, 0.0, 1), 1152 + 4);
        assert_eq!(blue_band_center(1920, 0.0, 2), 1536 - 3);
    }

    #[test]
    fn test_bands_tint_their_center_rows() {
        let mut canvas = Canvas::new(32, 400);
        let mut state = RenderState::new();
        let mut rng = SmallRng::seed_from_u64(0);

        ColorBandLayer::new().draw(&mut canvas, &mut state, &mut rng).unwrap();

        let center = red_band_center(400, 0.0, 0);
        let pixel = canvas.get_pixel(16, center as u32);
        assert!(pixel[0] > 0, "red band center should carry red: {:?}", pixel);
    }
}
