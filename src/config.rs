//! Grid configuration and validation.
//!
//! [`GridConfig`] is a small `Copy` builder carrying everything the layout
//! needs besides the images and the container width. Validation happens
//! once per layout call, against the container width the host measured.
//!
//! # Example
//!
//! ```
//! use zengrid::GridConfig;
//!
//! let config = GridConfig::new().gutter(8.0).baseline_height(240.0);
//! assert!(config.validate(1200.0).is_ok());
//! assert!(config.validate(0.0).is_err());
//! ```

use core::time::Duration;

/// Default spacing between items and rows, in pixels.
pub const DEFAULT_GUTTER: f64 = 16.0;

/// Default baseline row height, in pixels.
pub const DEFAULT_BASELINE_HEIGHT: f64 = 300.0;

/// Last-row scale above which the last row gets corrected.
pub const DEFAULT_MAX_LAST_ROW_SCALE: f64 = 1.5;

/// Quiet period after the last resize notification before a refresh.
pub const DEFAULT_RESIZE_TIMEOUT: Duration = Duration::from_millis(200);

/// Layout parameters for a justified grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Spacing between adjacent items in a row and between rows.
    pub gutter: f64,
    /// Nominal row height used to derive each image's natural width.
    pub baseline_height: f64,
    /// Whether a host driver should re-layout after the container resizes.
    pub refresh_on_resize: bool,
    /// A last row stretched beyond this factor is corrected.
    pub max_last_row_scale: f64,
    /// Debounce period for resize-driven refreshes.
    pub resize_timeout: Duration,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfig {
    /// Configuration with the default gutter (16), baseline height (300),
    /// resize refresh enabled, and a 1.5 last-row threshold.
    pub const fn new() -> Self {
        Self {
            gutter: DEFAULT_GUTTER,
            baseline_height: DEFAULT_BASELINE_HEIGHT,
            refresh_on_resize: true,
            max_last_row_scale: DEFAULT_MAX_LAST_ROW_SCALE,
            resize_timeout: DEFAULT_RESIZE_TIMEOUT,
        }
    }

    /// Set the gutter in pixels.
    pub fn gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set the baseline row height in pixels.
    pub fn baseline_height(mut self, height: f64) -> Self {
        self.baseline_height = height;
        self
    }

    /// Enable or disable refreshing after container resizes.
    pub fn refresh_on_resize(mut self, refresh: bool) -> Self {
        self.refresh_on_resize = refresh;
        self
    }

    /// Set the scale threshold that triggers last-row correction.
    pub fn max_last_row_scale(mut self, scale: f64) -> Self {
        self.max_last_row_scale = scale;
        self
    }

    /// Set the resize debounce period.
    pub fn resize_timeout(mut self, timeout: Duration) -> Self {
        self.resize_timeout = timeout;
        self
    }

    /// Check this configuration against a measured container width.
    ///
    /// Rejects a non-positive container width or baseline height, a
    /// negative gutter, a non-positive last-row threshold, and any
    /// non-finite value.
    pub fn validate(&self, container_width: f64) -> Result<(), GridError> {
        if !(container_width.is_finite() && container_width > 0.0) {
            return Err(GridError::InvalidConfiguration {
                field: "container_width",
                value: container_width,
            });
        }
        if !(self.baseline_height.is_finite() && self.baseline_height > 0.0) {
            return Err(GridError::InvalidConfiguration {
                field: "baseline_height",
                value: self.baseline_height,
            });
        }
        if !(self.gutter.is_finite() && self.gutter >= 0.0) {
            return Err(GridError::InvalidConfiguration {
                field: "gutter",
                value: self.gutter,
            });
        }
        if !(self.max_last_row_scale.is_finite() && self.max_last_row_scale > 0.0) {
            return Err(GridError::InvalidConfiguration {
                field: "max_last_row_scale",
                value: self.max_last_row_scale,
            });
        }
        Ok(())
    }
}

/// Grid layout error.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    /// A layout parameter is out of range.
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// An image has a non-positive height, a negative width, or a non-finite
    /// dimension.
    #[error("invalid image descriptor at index {index}: {width}x{height}")]
    InvalidImageDescriptor {
        /// Position of the image in the input sequence.
        index: usize,
        /// Intrinsic width as given.
        width: f64,
        /// Intrinsic height as given.
        height: f64,
    },
    /// A row has no usable scale: gutters consumed the whole container, or
    /// every image in it has zero width.
    #[error("row {index} has unusable scale {scale}")]
    DegenerateRow {
        /// Zero-based row index.
        index: usize,
        /// The computed scale.
        scale: f64,
    },
}
