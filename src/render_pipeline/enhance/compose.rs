//! Channel composition: enhanced bands into a displayable RGB image.

use tracing::debug;

use crate::render_pipeline::common::error::{RenderError, Result};
use crate::render_pipeline::enhance::colormap::apply_jet;
use crate::render_pipeline::enhance::contrast::enhance_band;
use crate::render_pipeline::enhance::normalize::normalize_band;
use crate::render_pipeline::enhance::types::{Enhancement, RgbImageData};
use crate::render_pipeline::raster::RasterData;

/// Composes a raster into an 8-bit RGB image.
///
/// Multi-band rasters use the first up to three bands in source order as the
/// R, G, and B channels, each independently normalized and enhanced. A
/// two-band raster gets a zero-filled blue channel. A single-band raster is
/// normalized, enhanced, and pseudo-colored with a jet colormap.
pub fn compose_rgb(raster: &RasterData, enhancement: Enhancement) -> Result<RgbImageData> {
    let pixels = raster.width * raster.height;

    for (index, band) in raster.bands.iter().enumerate() {
        if band.len() != pixels {
            return Err(RenderError::UnsupportedFormat(format!(
                "band {} has {} samples, expected {}",
                index,
                band.len(),
                pixels
            )));
        }
    }

    let data = match raster.band_count() {
        0 => return Err(RenderError::InvalidBandCount(0)),
        1 => {
            debug!("Single band raster, applying jet pseudo-color");
            let enhanced = enhance_band(&normalize_band(&raster.bands[0]), enhancement)?;
            apply_jet(&enhanced)
        }
        count => {
            let used = count.min(3);
            debug!("Composing {} of {} band(s) into RGB", used, count);

            let mut channels: Vec<Vec<u8>> = raster.bands[..used]
                .iter()
                .map(|band| enhance_band(&normalize_band(band), enhancement))
                .collect::<Result<_>>()?;
            // Two-band rasters get a zero-filled blue channel
            while channels.len() < 3 {
                channels.push(vec![0u8; pixels]);
            }

            let mut data = Vec::with_capacity(pixels * 3);
            for i in 0..pixels {
                data.push(channels[0][i]);
                data.push(channels[1][i]);
                data.push(channels[2][i]);
            }
            data
        }
    };

    Ok(RgbImageData {
        width: raster.width,
        height: raster.height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(width: usize, height: usize, bands: Vec<Vec<f32>>) -> RasterData {
        RasterData {
            width,
            height,
            bands,
            bits_per_sample: 16,
        }
    }

    #[test]
    fn zero_bands_is_an_error() {
        let result = compose_rgb(&raster(2, 2, vec![]), Enhancement::Gamma(1.0));
        assert!(matches!(result, Err(RenderError::InvalidBandCount(0))));
    }

    #[test]
    fn single_band_is_pseudo_colored() {
        let band: Vec<f32> = (0..16).map(|v| v as f32).collect();
        let image = compose_rgb(&raster(4, 4, vec![band]), Enhancement::Gamma(1.0)).unwrap();

        assert_eq!(image.width, 4);
        assert_eq!(image.height, 4);
        assert_eq!(image.data.len(), 4 * 4 * 3);
        // Lowest intensity pixel is blue dominant, highest is red dominant
        assert!(image.data[2] > image.data[0]);
        let last = &image.data[15 * 3..];
        assert!(last[0] > last[2]);
    }

    #[test]
    fn two_bands_pad_blue_with_zeros() {
        let band_a: Vec<f32> = (0..4).map(|v| v as f32).collect();
        let band_b: Vec<f32> = (100..104).map(|v| v as f32).collect();
        let image = compose_rgb(
            &raster(2, 2, vec![band_a, band_b]),
            Enhancement::Percentile {
                low: 0.0,
                high: 100.0,
            },
        )
        .unwrap();

        for pixel in image.data.chunks(3) {
            assert_eq!(pixel[2], 0);
        }
    }

    #[test]
    fn first_three_bands_are_used_in_source_order() {
        let bands: Vec<Vec<f32>> = (0..5)
            .map(|b| (0..4).map(|v| (b * 50 + v) as f32).collect())
            .collect();
        let image = compose_rgb(
            &raster(2, 2, bands),
            Enhancement::Percentile {
                low: 0.0,
                high: 100.0,
            },
        )
        .unwrap();

        // Each used band spans [0, 3] raw, so normalization maps 0->0, 3->255
        // for every channel; check a mid pixel keeps per-band independence.
        assert_eq!(image.data[0], 0);
        assert_eq!(image.data[1], 0);
        assert_eq!(image.data[2], 0);
        let last = &image.data[3 * 3..];
        assert_eq!(last, &[255, 255, 255]);
    }

    #[test]
    fn mismatched_band_length_is_rejected() {
        let result = compose_rgb(
            &raster(2, 2, vec![vec![0.0; 3]]),
            Enhancement::Gamma(1.0),
        );
        assert!(matches!(result, Err(RenderError::UnsupportedFormat(_))));
    }
}
