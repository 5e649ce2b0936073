//! Raster rendering pipeline module
//!
//! This module provides a structured approach to rendering multi-band raster
//! files as displayable PNGs, with separate modules for raster reading, band
//! enhancement, PNG writing, and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod enhance;
pub mod png;
pub mod raster;

pub use common::{RenderError, Result};

pub use raster::{RasterData, RasterReader, TiffRasterReader};

pub use enhance::{Enhancement, RgbImageData, compose_rgb, normalize_band};

pub use png::{PngCompression, PngWriter, RenderConfig, RenderConfigBuilder, StandardPngWriter};

pub use conversions::RasterToPngPipeline;
