use image::{ImageBuffer, Rgb, RgbImage};

/// Pure green, as old phosphor monitors drew it
pub const GREEN: [u8; 3] = [0, 255, 0];

/// Cyan, used for the right-eye focus cross
pub const CYAN: [u8; 3] = [0, 255, 255];

/// Opaque white
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Opaque black, the per-frame clear color
pub const BLACK: [u8; 3] = [0, 0, 0];

/// An addressable 2D pixel target the renderer draws into each tick
///
/// This is a thin wrapper around an RGB image buffer; the drawing primitives
/// live in [`draw`](crate::canvas::draw).
#[derive(Clone, Debug)]
pub struct Canvas {
    buffer: RgbImage,
}

impl Canvas {
    /// Create a new canvas with the given dimensions, filled with black
    pub fn new(width: u32, height: u32) -> Self {
        let buffer = ImageBuffer::new(width, height);
        Self { buffer }
    }

    /// Create a canvas from an existing RGB image buffer
    pub fn from_image(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Get the width of the canvas
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the canvas
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.buffer.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }

    /// Set a pixel at the given coordinates, ignoring alpha
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        self.buffer.put_pixel(x, y, Rgb(color));
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Get a mutable reference to the underlying image buffer
    pub fn as_image_mut(&mut self) -> &mut RgbImage {
        &mut self.buffer
    }

    /// Convert the canvas to raw RGB bytes
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.buffer.as_raw().clone()
    }

    /// Save the canvas as a PNG file
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.buffer.save(path)
    }
}

/// Immutable per-call drawing style: color, alpha, stroke width
///
/// Whether a shape is filled or stroked is decided by which primitive is
/// called, never by a mode flag carried between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    /// RGB color
    pub color: [u8; 3],

    /// Opacity blended against existing canvas content (255 = opaque)
    pub alpha: u8,

    /// Stroke width in pixels, for line and circle primitives
    pub width: u32,
}

impl Brush {
    /// Create a brush with stroke width 1
    pub fn new(color: [u8; 3], alpha: u8) -> Self {
        Self { color, alpha, width: 1 }
    }

    /// Set the stroke width
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}
