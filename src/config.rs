use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for the VHS/VR viewer
///
/// Defaults reproduce the reference visuals exactly; the knobs exposed here
/// are the counts and spacings that make sense to tune, not every color and
/// alpha in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Render-loop driver settings
    pub driver: DriverConfig,

    /// Effect layer settings
    pub effects: EffectsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            driver: DriverConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string(),
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.driver.validate()?;
        self.effects.validate()?;
        Ok(())
    }
}

/// Render-loop driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Target frame interval in milliseconds (~60 Hz at 16)
    pub frame_interval_ms: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { frame_interval_ms: 16 }
    }
}

impl DriverConfig {
    fn validate(&self) -> Result<()> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "driver.frame_interval_ms".to_string(),
                value: self.frame_interval_ms.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Effect layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Number of gray static flecks per frame
    pub noise_flecks: usize,

    /// Number of green phosphor dots per frame
    pub phosphor_dots: usize,

    /// Pixels the moving scan line advances per frame
    pub scan_line_step: u32,

    /// Vertical spacing of the fixed interlace lines
    pub interlace_spacing: u32,

    /// Horizontal spacing of the faint tape-track lines
    pub track_spacing: u32,

    /// Arm length of each focus crosshair, in pixels
    pub cross_arm_length: u32,

    /// Radius of the ring around each focus crosshair
    pub cross_ring_radius: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            noise_flecks: 200,
            phosphor_dots: 50,
            scan_line_step: 5,
            interlace_spacing: 2,
            track_spacing: 4,
            cross_arm_length: 30,
            cross_ring_radius: 60,
        }
    }
}

impl EffectsConfig {
    fn validate(&self) -> Result<()> {
        if self.scan_line_step == 0 {
            return Err(ConfigError::InvalidValue {
                key: "effects.scan_line_step".to_string(),
                value: self.scan_line_step.to_string(),
            }
            .into());
        }

        if self.interlace_spacing == 0 || self.track_spacing == 0 {
            return Err(ConfigError::InvalidValue {
                key: "effects.spacing".to_string(),
                value: format!("{}/{}", self.interlace_spacing, self.track_spacing),
            }
            .into());
        }

        Ok(())
    }
}
