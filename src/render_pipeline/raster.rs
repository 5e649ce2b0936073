//! Raster reading module
//!
//! This module provides format-agnostic multi-band raster reading capabilities.

mod reader;
mod tiff_reader;
pub mod types;

pub use reader::RasterReader;
pub use tiff_reader::TiffRasterReader;
pub use types::RasterData;
