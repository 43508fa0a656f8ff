use thiserror::Error;

/// Main error type for the VHS/VR viewer renderer
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Surface-specific errors
///
/// A surface that cannot be locked for one tick is *not* an error on the
/// render path (the frame is skipped); these variants exist for callers that
/// construct or snapshot surfaces directly.
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Surface is not currently valid")]
    Unavailable,

    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Driver-specific errors
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Camera permission denied; rendering will not start")]
    PermissionDenied,

    #[error("Render thread panicked: {reason}")]
    ThreadPanicked { reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using RendererError
pub type Result<T> = std::result::Result<T, RendererError>;

impl RendererError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Check if this error should stop startup
    ///
    /// Nothing in the render path is fatal: a bad frame is skipped, a denied
    /// permission leaves the driver inert. Only configuration problems stop
    /// the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Driver(DriverError::PermissionDenied) => {
                "Camera permission is required. Grant it and restart.".to_string()
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
