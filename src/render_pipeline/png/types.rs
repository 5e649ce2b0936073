//! Render configuration types

use crate::render_pipeline::enhance::Enhancement;

/// PNG compression levels
#[derive(Debug, Clone, Copy)]
pub enum PngCompression {
    /// Fastest compression (larger file)
    Fast,
    /// Balanced speed and size (default)
    Default,
    /// Best compression (slower)
    Best,
}

/// Configuration for raster to PNG rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Contrast enhancement applied to each band
    pub enhancement: Enhancement,
    /// PNG compression level
    pub compression: PngCompression,
    /// Whether to validate image dimensions before rendering
    pub validate_dimensions: bool,
    /// Upper bound on either image dimension when validation is enabled
    pub max_dimension: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enhancement: Enhancement::default(),
            compression: PngCompression::Default,
            validate_dimensions: true,
            max_dimension: Some(50_000),
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Builder for RenderConfig
#[derive(Default)]
pub struct RenderConfigBuilder {
    enhancement: Option<Enhancement>,
    compression: Option<PngCompression>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl RenderConfigBuilder {
    pub fn enhancement(mut self, enhancement: Enhancement) -> Self {
        self.enhancement = Some(enhancement);
        self
    }

    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> RenderConfig {
        let default = RenderConfig::default();
        RenderConfig {
            enhancement: self.enhancement.unwrap_or(default.enhancement),
            compression: self.compression.unwrap_or(default.compression),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
