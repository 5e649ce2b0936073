//! Pipeline conversions module
//!
//! This module contains orchestration logic for rendering raster files to PNG.

mod tif_to_png;


pub use tif_to_png::RasterToPngPipeline;
