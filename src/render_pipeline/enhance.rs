//! Band enhancement module
//!
//! This module turns raw raster bands into display-ready 8-bit channels:
//! min-max normalization, contrast enhancement (percentile stretch or gamma
//! correction), pseudo-coloring for single-band rasters, and channel
//! composition.

mod colormap;
mod compose;
mod contrast;
mod normalize;
pub mod types;

pub use colormap::apply_jet;
pub use compose::compose_rgb;
pub use contrast::enhance_band;
pub use normalize::normalize_band;
pub use types::{Enhancement, RgbImageData};
