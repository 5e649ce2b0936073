//! Per-band min-max normalization.

/// Linearly rescales a band so its observed minimum maps to 0 and its
/// observed maximum maps to 255.
///
/// A constant band (max == min) has no usable dynamic range; it normalizes to
/// all zeros rather than dividing by zero. Non-finite samples are skipped when
/// scanning the range and clamp to 0 in the output.
pub fn normalize_band(samples: &[f32]) -> Vec<u8> {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in samples {
        if !v.is_finite() {
            continue;
        }
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    if !(max > min) {
        return vec![0u8; samples.len()];
    }

    let scale = 255.0 / (max - min);
    samples
        .iter()
        .map(|&v| {
            if !v.is_finite() {
                return 0;
            }
            ((v - min) * scale).round().clamp(0.0, 255.0) as u8
        })
        .collect()
}
