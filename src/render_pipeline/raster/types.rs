//! Raster data types

/// Decoded multi-band raster data.
///
/// Bands are stored planar (one contiguous grid per spectral channel) in
/// source order. Samples are held as `f32` regardless of the source bit depth
/// so that 8/16/32-bit integer and floating-point rasters all flow through the
/// same normalization path.
#[derive(Debug, Clone)]
pub struct RasterData {
    /// Width of the raster in pixels
    pub width: usize,
    /// Height of the raster in pixels
    pub height: usize,
    /// Per-band sample grids, each of length `width * height`
    pub bands: Vec<Vec<f32>>,
    /// Bits per sample in the source file (e.g., 8, 16, or 32)
    pub bits_per_sample: u32,
}

impl RasterData {
    /// Number of spectral bands in the raster.
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }
}
