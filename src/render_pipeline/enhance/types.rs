//! Enhancement configuration and output types

use std::str::FromStr;

use crate::render_pipeline::common::error::{RenderError, Result};

/// Contrast enhancement applied to each normalized band.
///
/// This is a closed set on purpose: the method selection is part of the
/// configuration, and an unrecognized method name is a reported error rather
/// than a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Enhancement {
    /// Linear stretch mapping the `low`/`high` percentiles of the band's
    /// distribution to 0 and 255, clamping everything outside.
    Percentile { low: f32, high: f32 },
    /// Power-law brightness transform on [0, 1]-normalized samples.
    /// Values below 1.0 brighten, above 1.0 darken, exactly 1.0 is a no-op.
    Gamma(f32),
}

impl Default for Enhancement {
    fn default() -> Self {
        Enhancement::Percentile {
            low: 2.0,
            high: 98.0,
        }
    }
}

impl Enhancement {
    /// Validates the enhancement parameters.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Enhancement::Percentile { low, high } => {
                if !low.is_finite() || !high.is_finite() || low < 0.0 || high > 100.0 || low >= high
                {
                    return Err(RenderError::InvalidParameter(format!(
                        "percentile bounds must satisfy 0 <= low < high <= 100, got low={low}, high={high}"
                    )));
                }
                Ok(())
            }
            Enhancement::Gamma(gamma) => {
                if !gamma.is_finite() || gamma <= 0.0 {
                    return Err(RenderError::InvalidParameter(format!(
                        "gamma must be a positive finite number, got {gamma}"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Enhancement {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "percentile" => Ok(Enhancement::default()),
            "gamma" => Ok(Enhancement::Gamma(1.0)),
            other => Err(RenderError::InvalidParameter(format!(
                "unknown enhancement method '{other}', expected 'percentile' or 'gamma'"
            ))),
        }
    }
}

/// Composed 8-bit RGB image data, ready for PNG encoding.
#[derive(Debug, Clone)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}
