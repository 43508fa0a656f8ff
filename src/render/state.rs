use std::time::Instant;

/// Mutable animation state carried across frames
///
/// Created once when a rendering session starts and owned exclusively by the
/// renderer; it is never persisted. A skipped frame mutates nothing here.
#[derive(Debug, Clone)]
pub struct RenderState {
    scan_line_y: u32,
    wave_offset: f32,
    last_update: Option<Instant>,
}

impl RenderState {
    pub fn new() -> Self {
        Self {
            scan_line_y: 0,
            wave_offset: 0.0,
            last_update: None,
        }
    }

    /// Current vertical position of the moving scan line
    pub fn scan_line_y(&self) -> u32 {
        self.scan_line_y
    }

    /// Current phase of the sinusoidal distortions
    ///
    /// Monotonically non-decreasing; it only feeds periodic trig functions,
    /// so unbounded growth is harmless.
    pub fn wave_offset(&self) -> f32 {
        self.wave_offset
    }

    /// Forget the previous frame's timestamp
    ///
    /// Called when the render loop (re)starts so the first frame after a
    /// pause sees a zero delta instead of the whole pause duration.
    pub fn reset_clock(&mut self) {
        self.last_update = None;
    }

    /// Advance the wave phase by twice the elapsed seconds since the last
    /// frame, returning the delta. The first frame after a clock reset
    /// observes a delta of zero.
    pub(crate) fn advance_wave(&mut self, now: Instant) -> f32 {
        let delta = self
            .last_update
            .map(|prev| now.saturating_duration_since(prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last_update = Some(now);
        self.wave_offset += delta * 2.0;
        delta
    }

    /// Advance the scan line by `step` rows, wrapping modulo `height`
    ///
    /// Callers guarantee `height > 0` (the renderer skips degenerate
    /// canvases before any layer runs).
    pub(crate) fn advance_scan_line(&mut self, step: u32, height: u32) -> u32 {
        self.scan_line_y = (self.scan_line_y + step) % height;
        self.scan_line_y
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}
