//! # Effect Layers
//!
//! The five layers that compose one frame of the VHS/VR look, applied in a
//! fixed order, each alpha-blended on top of the previous:
//!
//! 1. **Noise**: static flecks and green phosphor dots
//! 2. **ScanLines**: the moving retrace line plus the fixed interlace grid
//! 3. **ColorBands**: wobbling red/blue chromatic-aberration bands
//! 4. **CornerDistortion**: breathing stroked circles in two corners
//! 5. **StereoSplit**: tinted half-screens, divider, focus crosshairs

pub mod traits;

// Layer implementations
pub mod bands;
pub mod corners;
pub mod noise;
pub mod scanlines;
pub mod stereo;

// Re-exports for convenience
pub use bands::ColorBandLayer;
pub use corners::CornerDistortionLayer;
pub use noise::NoiseLayer;
pub use scanlines::ScanLineLayer;
pub use stereo::StereoSplitLayer;
pub use traits::Layer;

use crate::config::EffectsConfig;

/// Build the standard layer stack in compositing order
pub fn standard_stack(config: &EffectsConfig) -> Vec<Box<dyn Layer>> {
    vec![
        Box::new(NoiseLayer::new(config)),
        Box::new(ScanLineLayer::new(config)),
        Box::new(ColorBandLayer::new()),
        Box::new(CornerDistortionLayer::new()),
        Box::new(StereoSplitLayer::new(config)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_stack_order() {
        let stack = standard_stack(&EffectsConfig::default());
        let names: Vec<&str> = stack.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["noise", "scan_lines", "color_bands", "corner_distortion", "stereo_split"]);
    }
}
