//! Alpha-blended drawing primitives
//!
//! All primitives clip silently to the canvas bounds; geometry that wobbles
//! off-screen (color bands, corner circles) is simply cut, never an error.
//! Lines are half-open along their major axis, so a full-width line at
//! `y` covers exactly `[0, width)` columns.

use super::types::{Brush, Canvas};

impl Canvas {
    /// Clear the entire canvas to an opaque color
    pub fn clear(&mut self, color: [u8; 3]) {
        for pixel in self.as_image_mut().pixels_mut() {
            pixel.0 = color;
        }
    }

    /// Blend a single pixel; out-of-bounds coordinates are ignored
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: [u8; 3], alpha: u8) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }

        let pixel = self.as_image_mut().get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let dst = pixel[c] as i32;
            let src = color[c] as i32;
            pixel[c] = (dst + (src - dst) * alpha as i32 / 255) as u8;
        }
    }

    /// Draw a single point
    pub fn draw_point(&mut self, x: i32, y: i32, brush: Brush) {
        self.blend_pixel(x, y, brush.color, brush.alpha);
    }

    /// Fill an axis-aligned rectangle of `w` x `h` pixels with top-left (x, y)
    ///
    /// Each covered pixel is blended exactly once.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, brush: Brush) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i32).min(self.width() as i32);
        let y1 = (y + h as i32).min(self.height() as i32);

        for py in y0..y1 {
            for px in x0..x1 {
                let pixel = self.as_image_mut().get_pixel_mut(px as u32, py as u32);
                for c in 0..3 {
                    let dst = pixel[c] as i32;
                    let src = brush.color[c] as i32;
                    pixel[c] = (dst + (src - dst) * brush.alpha as i32 / 255) as u8;
                }
            }
        }
    }

    /// Draw a line from (x0, y0) to (x1, y1)
    ///
    /// Axis-aligned lines honor the brush stroke width, expanding
    /// symmetrically around the line's axis (the extra pixel of an even
    /// width lands on the positive side). Diagonal lines are drawn one
    /// pixel wide.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, brush: Brush) {
        let width = brush.width.max(1);

        if y0 == y1 {
            let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
            let top = y0 - (width as i32 - 1) / 2;
            self.fill_rect(lo, top, (hi - lo) as u32, width, brush);
        } else if x0 == x1 {
            let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
            let left = x0 - (width as i32 - 1) / 2;
            self.fill_rect(left, lo, width, (hi - lo) as u32, brush);
        } else {
            self.draw_line_bresenham(x0, y0, x1, y1, brush);
        }
    }

    fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, brush: Brush) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.blend_pixel(x, y, brush.color, brush.alpha);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Stroke an unfilled circle of the given radius centered at (cx, cy)
    ///
    /// The ring covers pixels whose distance from the center is within half
    /// a stroke width of the radius.
    pub fn stroke_circle(&mut self, cx: i32, cy: i32, radius: f32, brush: Brush) {
        if radius <= 0.0 {
            return;
        }

        let half = brush.width.max(1) as f32 / 2.0;
        let reach = (radius + half).ceil() as i32 + 1;

        let x0 = (cx - reach).max(0);
        let y0 = (cy - reach).max(0);
        let x1 = (cx + reach).min(self.width() as i32 - 1);
        let y1 = (cy + reach).min(self.height() as i32 - 1);

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = (px - cx) as f32;
                let dy = (py - cy) as f32;
                let dist = (dx * dx + dy * dy).sqrt();
                if (dist - radius).abs() <= half {
                    self.blend_pixel(px, py, brush.color, brush.alpha);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::types::WHITE;

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut canvas = Canvas::new(4, 4);
        canvas.clear([10, 20, 30]);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.get_pixel(x, y), [10, 20, 30]);
            }
        }
    }

    #[test]
    fn test_opaque_blend_replaces_pixel() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(0, 0, WHITE, 255);
        assert_eq!(canvas.get_pixel(0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_half_alpha_blend_over_black() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(1, 1, [255, 255, 255], 128);
        // 0 + (255 - 0) * 128 / 255 = 128
        assert_eq!(canvas.get_pixel(1, 1), [128, 128, 128]);
    }

    #[test]
    fn test_zero_alpha_is_invisible() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear([40, 40, 40]);
        canvas.blend_pixel(0, 0, WHITE, 0);
        assert_eq!(canvas.get_pixel(0, 0), [40, 40, 40]);
    }

    #[test]
    fn test_out_of_bounds_draws_are_ignored() {
        let mut canvas = Canvas::new(3, 3);
        canvas.blend_pixel(-1, 0, WHITE, 255);
        canvas.blend_pixel(0, 3, WHITE, 255);
        canvas.fill_rect(-5, -5, 3, 3, Brush::new(WHITE, 255));
        canvas.stroke_circle(-10, -10, 4.0, Brush::new(WHITE, 255));
        assert_eq!(canvas.to_rgb_bytes(), vec![0u8; 3 * 3 * 3]);
    }

    #[test]
    fn test_fill_rect_clips_to_bounds() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(2, 2, 10, 10, Brush::new(WHITE, 255));
        assert_eq!(canvas.get_pixel(1, 1), [0, 0, 0]);
        assert_eq!(canvas.get_pixel(2, 2), [255, 255, 255]);
        assert_eq!(canvas.get_pixel(3, 3), [255, 255, 255]);
    }

    #[test]
    fn test_horizontal_line_is_half_open() {
        let mut canvas = Canvas::new(8, 3);
        canvas.draw_line(0, 1, 8, 1, Brush::new(WHITE, 255));
        for x in 0..8 {
            assert_eq!(canvas.get_pixel(x, 1), [255, 255, 255]);
        }
        assert_eq!(canvas.get_pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_thick_vertical_line_expands_around_axis() {
        let mut canvas = Canvas::new(7, 7);
        canvas.draw_line(3, 0, 3, 7, Brush::new(WHITE, 255).with_width(3));
        for y in 0..7 {
            assert_eq!(canvas.get_pixel(2, y), [255, 255, 255]);
            assert_eq!(canvas.get_pixel(3, y), [255, 255, 255]);
            assert_eq!(canvas.get_pixel(4, y), [255, 255, 255]);
            assert_eq!(canvas.get_pixel(1, y), [0, 0, 0]);
            assert_eq!(canvas.get_pixel(5, y), [0, 0, 0]);
        }
    }

    #[test]
    fn test_stroke_circle_is_a_ring() {
        let mut canvas = Canvas::new(21, 21);
        canvas.stroke_circle(10, 10, 6.0, Brush::new(WHITE, 255));
        // On the ring
        assert_eq!(canvas.get_pixel(16, 10), [255, 255, 255]);
        assert_eq!(canvas.get_pixel(10, 4), [255, 255, 255]);
        // Center and far corner stay untouched
        assert_eq!(canvas.get_pixel(10, 10), [0, 0, 0]);
        assert_eq!(canvas.get_pixel(0, 0), [0, 0, 0]);
    }
}
