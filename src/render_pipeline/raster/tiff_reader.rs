//! Raster reader implementation using the tiff library.
//!
//! Geospatial rasters commonly ship as multi-band TIFFs with anywhere from
//! one to a dozen spectral channels at varying bit depths. The tiff decoder
//! yields the samples interleaved; this reader splits them back into planar
//! bands and widens everything to `f32` for the downstream normalization.

use std::io::Cursor;

use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::render_pipeline::common::error::{RenderError, Result};
use crate::render_pipeline::raster::reader::RasterReader;
use crate::render_pipeline::raster::types::RasterData;

/// Raster reader that uses the tiff library for decoding.
pub struct TiffRasterReader;

impl RasterReader for TiffRasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<RasterData> {
        debug!("Decoding TIFF raster, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| RenderError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| RenderError::DecodeError(e.to_string()))?;
        let width = width as usize;
        let height = height as usize;

        debug!("Decoded raster: {}x{}", width, height);

        let image = decoder
            .read_image()
            .map_err(|e| RenderError::DecodeError(e.to_string()))?;

        // Widen every supported sample format to f32
        let (samples, bits_per_sample): (Vec<f32>, u32) = match image {
            DecodingResult::U8(v) => (v.into_iter().map(|s| s as f32).collect(), 8),
            DecodingResult::U16(v) => (v.into_iter().map(|s| s as f32).collect(), 16),
            DecodingResult::U32(v) => (v.into_iter().map(|s| s as f32).collect(), 32),
            DecodingResult::I8(v) => (v.into_iter().map(|s| s as f32).collect(), 8),
            DecodingResult::I16(v) => (v.into_iter().map(|s| s as f32).collect(), 16),
            DecodingResult::I32(v) => (v.into_iter().map(|s| s as f32).collect(), 32),
            DecodingResult::F32(v) => (v, 32),
            DecodingResult::F64(v) => (v.into_iter().map(|s| s as f32).collect(), 64),
            _ => {
                return Err(RenderError::UnsupportedFormat(
                    "unsupported TIFF sample format".to_string(),
                ));
            }
        };

        let pixels = width
            .checked_mul(height)
            .ok_or(RenderError::InvalidDimensions(width, height))?;
        let bands = split_bands(samples, pixels, width, height)?;

        debug!(
            "Split raster into {} band(s), {} bits per sample",
            bands.len(),
            bits_per_sample
        );

        Ok(RasterData {
            width,
            height,
            bands,
            bits_per_sample,
        })
    }
}

/// Deinterleaves [b0, b1, .., b0, b1, ..] samples into planar bands.
///
/// The sample count must be a nonzero multiple of the pixel count; a decode
/// that yields no samples for a nonzero-sized raster is malformed.
fn split_bands(
    samples: Vec<f32>,
    pixels: usize,
    width: usize,
    height: usize,
) -> Result<Vec<Vec<f32>>> {
    if pixels == 0 || samples.is_empty() || samples.len() % pixels != 0 {
        return Err(RenderError::UnsupportedFormat(format!(
            "sample count {} does not divide into {}x{} pixels",
            samples.len(),
            width,
            height
        )));
    }
    let band_count = samples.len() / pixels;

    let mut bands: Vec<Vec<f32>> = (0..band_count)
        .map(|_| Vec::with_capacity(pixels))
        .collect();
    for chunk in samples.chunks_exact(band_count) {
        for (band, &sample) in bands.iter_mut().zip(chunk) {
            band.push(sample);
        }
    }
    Ok(bands)
}
