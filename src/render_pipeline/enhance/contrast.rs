//! Contrast enhancement for normalized 8-bit bands.

use tracing::debug;

use crate::render_pipeline::common::error::Result;
use crate::render_pipeline::enhance::types::Enhancement;

/// Applies the selected contrast enhancement to a normalized band.
///
/// The input is expected to already be in the 8-bit display range; the output
/// stays in that range with the values redistributed.
pub fn enhance_band(samples: &[u8], enhancement: Enhancement) -> Result<Vec<u8>> {
    enhancement.validate()?;
    match enhancement {
        Enhancement::Percentile { low, high } => Ok(percentile_stretch(samples, low, high)),
        Enhancement::Gamma(gamma) => Ok(gamma_correct(samples, gamma)),
    }
}

/// Linear stretch mapping the low/high percentile values to 0 and 255.
///
/// The percentiles are taken from a 256-bin histogram of the band, which is
/// exact for 8-bit input. When the two percentile values coincide (heavily
/// peaked histogram) there is no range to stretch and the band is passed
/// through unchanged.
fn percentile_stretch(samples: &[u8], low: f32, high: f32) -> Vec<u8> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut histogram = [0u32; 256];
    for &v in samples {
        histogram[v as usize] += 1;
    }

    let p_low = percentile_value(&histogram, samples.len(), low);
    let p_high = percentile_value(&histogram, samples.len(), high);

    debug!(
        "Percentile stretch: p{}={}, p{}={}",
        low, p_low, high, p_high
    );

    if p_high == p_low {
        return samples.to_vec();
    }

    let offset = p_low as f32;
    let scale = 255.0 / (p_high as f32 - p_low as f32);
    samples
        .iter()
        .map(|&v| ((v as f32 - offset) * scale).round().clamp(0.0, 255.0) as u8)
        .collect()
}

/// Inverts the cumulative histogram to find the sample value at percentile `p`.
fn percentile_value(histogram: &[u32; 256], total: usize, p: f32) -> u8 {
    // Rank of the percentile in the sorted band, at least 1 so p=0 hits the minimum
    let rank = ((p / 100.0) * total as f32).ceil().max(1.0) as u64;

    let mut cumulative = 0u64;
    for (value, &count) in histogram.iter().enumerate() {
        cumulative += count as u64;
        if cumulative >= rank {
            return value as u8;
        }
    }
    255
}

/// Power-law brightness transform via a 256-entry lookup table.
fn gamma_correct(samples: &[u8], gamma: f32) -> Vec<u8> {
    let mut lut = [0u8; 256];
    for (value, entry) in lut.iter_mut().enumerate() {
        let normalized = value as f32 / 255.0;
        *entry = (normalized.powf(gamma) * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    samples.iter().map(|&v| lut[v as usize]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_pipeline::common::error::RenderError;

    #[test]
    fn full_range_percentile_is_identity_on_spanning_band() {
        let band: Vec<u8> = (0..=255).collect();
        let enhanced = enhance_band(
            &band,
            Enhancement::Percentile {
                low: 0.0,
                high: 100.0,
            },
        )
        .unwrap();
        assert_eq!(enhanced, band);
    }

    #[test]
    fn percentile_stretch_expands_narrow_range() {
        let band = vec![100u8, 110, 120, 130];
        let enhanced = enhance_band(
            &band,
            Enhancement::Percentile {
                low: 0.0,
                high: 100.0,
            },
        )
        .unwrap();
        assert_eq!(enhanced[0], 0);
        assert_eq!(enhanced[3], 255);
    }

    #[test]
    fn coinciding_percentiles_pass_through() {
        // All mass on one value, so any percentile pair collapses
        let band = vec![77u8; 32];
        let enhanced = enhance_band(
            &band,
            Enhancement::Percentile {
                low: 2.0,
                high: 98.0,
            },
        )
        .unwrap();
        assert_eq!(enhanced, band);
    }

    #[test]
    fn gamma_one_is_identity() {
        let band: Vec<u8> = (0..=255).collect();
        let enhanced = enhance_band(&band, Enhancement::Gamma(1.0)).unwrap();
        assert_eq!(enhanced, band);
    }

    #[test]
    fn gamma_below_one_brightens_monotonically() {
        let band: Vec<u8> = (0..=255).collect();
        let enhanced = enhance_band(&band, Enhancement::Gamma(0.5)).unwrap();
        for (out, id) in enhanced.iter().zip(&band) {
            assert!(out >= id);
        }
    }

    #[test]
    fn gamma_above_one_darkens_monotonically() {
        let band: Vec<u8> = (0..=255).collect();
        let enhanced = enhance_band(&band, Enhancement::Gamma(2.0)).unwrap();
        for (out, id) in enhanced.iter().zip(&band) {
            assert!(out <= id);
        }
    }

    #[test]
    fn invalid_percentile_bounds_are_rejected() {
        let band = vec![0u8, 255];
        let result = enhance_band(
            &band,
            Enhancement::Percentile {
                low: 98.0,
                high: 2.0,
            },
        );
        assert!(matches!(result, Err(RenderError::InvalidParameter(_))));

        let result = enhance_band(
            &band,
            Enhancement::Percentile {
                low: -1.0,
                high: 50.0,
            },
        );
        assert!(matches!(result, Err(RenderError::InvalidParameter(_))));
    }

    #[test]
    fn non_positive_gamma_is_rejected() {
        let band = vec![0u8, 255];
        assert!(matches!(
            enhance_band(&band, Enhancement::Gamma(0.0)),
            Err(RenderError::InvalidParameter(_))
        ));
        assert!(matches!(
            enhance_band(&band, Enhancement::Gamma(-0.5)),
            Err(RenderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn unknown_method_name_fails_to_parse() {
        let result: Result<Enhancement> = "histogram".parse();
        assert!(matches!(result, Err(RenderError::InvalidParameter(_))));
    }

    #[test]
    fn known_method_names_parse_with_defaults() {
        assert_eq!(
            "percentile".parse::<Enhancement>().unwrap(),
            Enhancement::Percentile {
                low: 2.0,
                high: 98.0
            }
        );
        assert_eq!("gamma".parse::<Enhancement>().unwrap(), Enhancement::Gamma(1.0));
    }
}
