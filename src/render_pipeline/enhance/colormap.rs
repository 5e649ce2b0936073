//! Jet-style pseudo-color mapping for single-band rasters.

/// Applies a jet-style colormap to an 8-bit band, producing interleaved RGB.
///
/// Low intensities map to dark blue, mid intensities to green, high
/// intensities to dark red, following the classic piecewise-linear jet ramp.
pub fn apply_jet(samples: &[u8]) -> Vec<u8> {
    let lut = jet_lut();
    let mut rgb = Vec::with_capacity(samples.len() * 3);
    for &v in samples {
        rgb.extend_from_slice(&lut[v as usize]);
    }
    rgb
}

/// 256-entry jet lookup table.
///
/// Each channel is a trapezoid over the [0, 1] intensity axis:
/// blue peaks first, then green, then red, with 1.5-wide ramps clamped to
/// [0, 1] so the plateaus saturate.
fn jet_lut() -> [[u8; 3]; 256] {
    let mut lut = [[0u8; 3]; 256];
    for (value, entry) in lut.iter_mut().enumerate() {
        let t = value as f32 / 255.0;
        let r = (1.5 - (4.0 * t - 3.0).abs()).clamp(0.0, 1.0);
        let g = (1.5 - (4.0 * t - 2.0).abs()).clamp(0.0, 1.0);
        let b = (1.5 - (4.0 * t - 1.0).abs()).clamp(0.0, 1.0);
        *entry = [
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        ];
    }
    lut
}
