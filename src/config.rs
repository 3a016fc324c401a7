//! Conversion configuration.
//!
//! [`ClipOptions`] carries the process-wide tunables of the pipeline: the
//! maximum output width, the sampling stride, and the accepted duration
//! window. It is threaded explicitly through the calls that need it rather
//! than living in module-level mutable state.
//!
//! # Example
//!
//! ```
//! use gifclip::ClipOptions;
//!
//! let options = ClipOptions::new()
//!     .with_max_width(1280)
//!     .with_frame_stride(5);
//! assert_eq!(options.max_width, 1280);
//! ```

/// Default maximum output width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 1920;

/// Default number of frame indices advanced between consecutive samples.
pub const DEFAULT_FRAME_STRIDE: u64 = 10;

/// Default lower bound of the accepted duration window, in seconds.
pub const DEFAULT_MIN_DURATION: f64 = 5.0;

/// Default upper bound of the accepted duration window, in seconds.
pub const DEFAULT_MAX_DURATION: f64 = 30.0;

/// Configuration for a video-to-GIF conversion.
///
/// Controls the resize threshold, sampling stride, and the duration window
/// enforced before any frame is decoded.
#[derive(Debug, Clone)]
#[must_use]
pub struct ClipOptions {
    /// Maximum output width in pixels. Sources at least this wide are
    /// downscaled to it; narrower sources are left untouched.
    pub max_width: u32,
    /// Number of frame indices advanced between consecutive samples.
    pub frame_stride: u64,
    /// Minimum accepted video duration in seconds.
    pub min_duration: f64,
    /// Maximum accepted video duration in seconds.
    pub max_duration: f64,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            frame_stride: DEFAULT_FRAME_STRIDE,
            min_duration: DEFAULT_MIN_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
        }
    }
}

impl ClipOptions {
    /// Create a new [`ClipOptions`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum output width.
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the sampling stride.
    pub fn with_frame_stride(mut self, stride: u64) -> Self {
        self.frame_stride = stride;
        self
    }

    /// Set the accepted duration window in seconds.
    pub fn with_duration_bounds(mut self, minimum: f64, maximum: f64) -> Self {
        self.min_duration = minimum;
        self.max_duration = maximum;
        self
    }
}
