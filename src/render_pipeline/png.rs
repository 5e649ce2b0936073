//! PNG writing module
//!
//! This module provides PNG file writing capabilities with selectable
//! compression levels, plus the pipeline configuration types.

mod standard_png_writer;
pub mod types;
mod writer;

pub use standard_png_writer::StandardPngWriter;
pub use types::{PngCompression, RenderConfig, RenderConfigBuilder};
pub use writer::PngWriter;
