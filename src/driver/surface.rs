use crate::{
    canvas::Canvas,
    error::{Result, SurfaceError},
};

/// A lockable drawable surface the render loop targets
///
/// Mirrors the usual platform surface-holder contract: validity may change
/// between ticks, `lock` hands out the canvas for drawing, and
/// `unlock_and_present` commits the drawn content. A `None` from `lock`
/// means "skip this frame", never an error.
pub trait SurfaceProvider: Send {
    /// Whether the surface can currently be drawn into
    fn is_valid(&self) -> bool;

    /// Lock the surface for drawing, or `None` if it is not valid this tick
    fn lock(&mut self) -> Option<&mut Canvas>;

    /// Commit the drawn content for display
    fn unlock_and_present(&mut self);

    /// React to a changed(width, height) lifecycle notification
    ///
    /// Default is a no-op for surfaces with fixed backing storage.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// An in-memory surface: a plain canvas plus a validity flag
///
/// This is the backing store for offline rendering, benchmarks and tests; a
/// windowed backend would implement [`SurfaceProvider`] over its own
/// swapchain instead.
pub struct OffscreenSurface {
    canvas: Canvas,
    valid: bool,
    frames_presented: u64,
}

impl OffscreenSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidDimensions { width, height }.into());
        }

        Ok(Self {
            canvas: Canvas::new(width, height),
            valid: true,
            frames_presented: 0,
        })
    }

    /// Flip surface validity, as a lifecycle callback would
    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Number of frames committed so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// The last presented content
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl SurfaceProvider for OffscreenSurface {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn lock(&mut self) -> Option<&mut Canvas> {
        if self.valid {
            Some(&mut self.canvas)
        } else {
            None
        }
    }

    fn unlock_and_present(&mut self) {
        self.frames_presented += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            self.valid = false;
            return;
        }
        self.canvas = Canvas::new(width, height);
        self.valid = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert!(OffscreenSurface::new(0, 10).is_err());
        assert!(OffscreenSurface::new(10, 0).is_err());
    }

    #[test]
    fn test_invalid_surface_refuses_lock() {
        let mut surface = OffscreenSurface::new(8, 8).unwrap();
        assert!(surface.lock().is_some());

        surface.set_valid(false);
        assert!(!surface.is_valid());
        assert!(surface.lock().is_none());
    }

    #[test]
    fn test_resize_replaces_backing_canvas() {
        let mut surface = OffscreenSurface::new(8, 8).unwrap();
        surface.resize(16, 4);
        assert_eq!(surface.canvas().width(), 16);
        assert_eq!(surface.canvas().height(), 4);
        assert!(surface.is_valid());

        surface.resize(0, 4);
        assert!(!surface.is_valid());
    }
}
