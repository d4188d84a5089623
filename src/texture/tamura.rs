//! Tamura texture features: coarseness, contrast and directionality.
use crate::features::FeatureVector;
use crate::image::{ImageU8, ImageView};
use crate::Result;

/// Largest window exponent tried by the coarseness measure.
pub const COARSENESS_KMAX: u32 = 5;
/// Orientation bins of the directionality histogram.
pub const DIRECTION_BINS: usize = 16;
/// Minimum edge strength counted by the directionality histogram.
pub const DIRECTION_EDGE_THRESHOLD: f64 = 12.0;

pub const TAMURA_NAMES: [&str; 3] = [
    "tamura_coarseness",
    "tamura_contrast",
    "tamura_directionality",
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TamuraFeatures {
    pub coarseness: f64,
    pub contrast: f64,
    pub directionality: f64,
}

impl TamuraFeatures {
    pub fn compute(gray: ImageU8<'_>) -> Self {
        Self {
            coarseness: coarseness(gray),
            contrast: contrast(gray),
            directionality: directionality(gray),
        }
    }
}

/// Tamura features as a three-column vector.
pub fn tamura_features(gray: ImageU8<'_>) -> Result<FeatureVector> {
    let t = TamuraFeatures::compute(gray);
    FeatureVector::from_parts(
        "TAMURA",
        TAMURA_NAMES.iter().map(|s| s.to_string()).collect(),
        vec![t.coarseness, t.contrast, t.directionality],
    )
}

/// Summed-area table with one row/column of zero padding.
struct Integral {
    stride: usize,
    sums: Vec<f64>,
}

impl Integral {
    fn new(gray: ImageU8<'_>) -> Self {
        let stride = gray.w + 1;
        let mut sums = vec![0.0; stride * (gray.h + 1)];
        for (y, row) in gray.rows().enumerate() {
            let mut acc = 0.0;
            for (x, &v) in row.iter().enumerate() {
                acc += f64::from(v);
                sums[(y + 1) * stride + x + 1] = sums[y * stride + x + 1] + acc;
            }
        }
        Self { stride, sums }
    }

    /// Sum over rows `r0..r1` and columns `c0..c1` (half-open).
    fn sum(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> f64 {
        let s = |r: usize, c: usize| self.sums[r * self.stride + c];
        s(r1, c1) - s(r0, c1) - s(r1, c0) + s(r0, c0)
    }
}

/// Average best window size.
///
/// For each scale `k` the sum over the `2^(k+1)`-wide window centred on a pixel
/// is compared with the windows `2^k` pixels away along rows and columns; the
/// scale with the largest signed difference wins and contributes `2^k`.
/// Returns 0 when the image is too small for any scale.
fn coarseness(gray: ImageU8<'_>) -> f64 {
    let (rows, cols) = (gray.h, gray.w);
    let mut kmax = COARSENESS_KMAX;
    for extent in [rows, cols] {
        if extent == 0 {
            return 0.0;
        }
        if (1usize << kmax) >= extent {
            kmax = extent.ilog2();
        }
    }
    if kmax == 0 {
        return 0.0;
    }

    let integral = Integral::new(gray);
    let n = rows * cols;
    let kmax = kmax as usize;
    // Best (scale, value) per pixel along each axis, first scale wins ties.
    let mut horizontal = vec![(0usize, f64::NEG_INFINITY); n];
    let mut vertical = vec![(0usize, f64::NEG_INFINITY); n];
    let mut average = vec![0.0f64; n];

    for k in 0..kmax {
        let window = 1usize << k;
        average.fill(0.0);
        for r in window..rows.saturating_sub(window) {
            for c in window..cols.saturating_sub(window) {
                average[r * cols + c] =
                    integral.sum(r - window, r + window, c - window, c + window);
            }
        }
        let scale = 1.0 / (1u64 << (2 * (k + 1))) as f64;
        let band_r = window..rows.saturating_sub(window + 1);
        let band_c = window..cols.saturating_sub(window + 1);
        for r in 0..rows {
            for c in 0..cols {
                let idx = r * cols + c;
                let (h, v) = if band_r.contains(&r) && band_c.contains(&c) {
                    (
                        (average[(r + window) * cols + c] - average[(r - window) * cols + c])
                            * scale,
                        (average[idx + window] - average[idx - window]) * scale,
                    )
                } else {
                    (0.0, 0.0)
                };
                if h > horizontal[idx].1 {
                    horizontal[idx] = (k, h);
                }
                if v > vertical[idx].1 {
                    vertical[idx] = (k, v);
                }
            }
        }
    }

    let total: f64 = horizontal
        .iter()
        .zip(&vertical)
        .map(|(&(hk, hv), &(vk, vv))| {
            let k = if hv > vv { hk } else { vk };
            (1u64 << k) as f64
        })
        .sum();
    total / n as f64
}

/// `σ / (μ4 / σ⁴)^(1/4)`; 0 for a flat image.
fn contrast(gray: ImageU8<'_>) -> f64 {
    let mut values = Vec::with_capacity(gray.len());
    gray.for_each_pixel(|v| values.push(f64::from(v)));
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let (mut m2, mut m4) = (0.0, 0.0);
    for v in &values {
        let d2 = (v - mean) * (v - mean);
        m2 += d2;
        m4 += d2 * d2;
    }
    m2 /= n;
    m4 /= n;
    if m2 <= 0.0 {
        return 0.0;
    }
    let kurtosis = m4 / (m2 * m2);
    m2.sqrt() / kurtosis.powf(0.25)
}

/// Edge gradients used by the directionality measure.
///
/// `ΔH` grows left to right and `ΔV` top to bottom. Interior pixels sum the
/// three-pixel differences across their 3×3 neighbourhood; border pixels,
/// corners included, take the forward difference (backward on the last
/// row/column).
fn edge_gradients(gray: ImageU8<'_>) -> (Vec<f64>, Vec<f64>) {
    let (h, w) = (gray.h, gray.w);
    let mut dh = vec![0.0f64; h * w];
    let mut dv = vec![0.0f64; h * w];
    if h < 2 || w < 2 {
        return (dh, dv);
    }
    let px = |r: usize, c: usize| f64::from(gray.get(c, r));

    for r in 0..h {
        for c in 0..w {
            let idx = r * w + c;
            if r > 0 && r + 1 < h && c > 0 && c + 1 < w {
                let mut sh = 0.0;
                let mut sv = 0.0;
                for k in 0..3 {
                    sh += px(r - 1 + k, c + 1) - px(r - 1 + k, c - 1);
                    sv += px(r + 1, c - 1 + k) - px(r - 1, c - 1 + k);
                }
                dh[idx] = sh;
                dv[idx] = sv;
            } else {
                let c0 = c.min(w - 2);
                let r0 = r.min(h - 2);
                dh[idx] = px(r, c0 + 1) - px(r, c0);
                dv[idx] = px(r0 + 1, c) - px(r0, c);
            }
        }
    }
    (dh, dv)
}

/// Sharpness of the dominant edge orientation.
///
/// Builds a histogram of `θ = atan(ΔV/ΔH) + π/2` over pixels whose edge
/// strength `(|ΔH| + |ΔV|) / 2` reaches the threshold, normalises it by its
/// mean and sums the squared bin distances to the peak weighted by the bin
/// values. 0 when no pixel passes the threshold.
fn directionality(gray: ImageU8<'_>) -> f64 {
    use std::f64::consts::{FRAC_PI_2, PI};

    let (dh, dv) = edge_gradients(gray);
    let bins = DIRECTION_BINS as f64;
    let mut hist = [0.0f64; DIRECTION_BINS];
    for (&h, &v) in dh.iter().zip(&dv) {
        let strength = (h.abs() + v.abs()) / 2.0;
        if strength < DIRECTION_EDGE_THRESHOLD {
            continue;
        }
        let theta = if h == 0.0 && v == 0.0 {
            0.0
        } else if h == 0.0 {
            PI
        } else {
            (v / h).atan() + FRAC_PI_2
        };
        for (ni, bin) in hist.iter_mut().enumerate() {
            let lo = (2.0 * ni as f64 - 1.0) * PI / (2.0 * bins);
            let hi = (2.0 * ni as f64 + 1.0) * PI / (2.0 * bins);
            if theta >= lo && theta < hi {
                *bin += 1.0;
            }
        }
    }

    let mean = hist.iter().sum::<f64>() / bins;
    if mean <= 0.0 {
        return 0.0;
    }
    let mut peak = 0usize;
    for (i, &v) in hist.iter().enumerate() {
        if v > hist[peak] {
            peak = i;
        }
    }
    hist.iter()
        .enumerate()
        .map(|(i, &v)| {
            let d = i as f64 - peak as f64;
            d * d * v / mean
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    fn stripes(w: usize, h: usize, period: usize, vertical: bool) -> GrayImageU8 {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                let t = if vertical { x } else { y };
                data.push(if (t / period) % 2 == 0 { 30 } else { 220 });
            }
        }
        GrayImageU8::from_raw(w, h, data).unwrap()
    }

    #[test]
    fn flat_image_has_zero_contrast_and_directionality() {
        let img = GrayImageU8::filled(16, 16, 90);
        let t = TamuraFeatures::compute(img.as_view());
        assert_eq!(t.contrast, 0.0);
        assert_eq!(t.directionality, 0.0);
        // Window sums outside the valid band are zero, so even a flat image
        // has responses at the band edges.
        assert!((1.0..=16.0).contains(&t.coarseness));
    }

    #[test]
    fn tiny_images_do_not_panic() {
        for (w, h) in [(0, 0), (1, 1), (2, 1), (1, 5), (2, 2)] {
            let img = GrayImageU8::filled(w, h, 7);
            let v = tamura_features(img.as_view()).unwrap();
            assert_eq!(v.len(), 3);
            assert!(v.values().iter().all(|x| x.is_finite()));
        }
    }

    #[test]
    fn binary_contrast_matches_closed_form() {
        // Half 0, half 200: σ = 100 and kurtosis 1.
        let mut data = vec![0u8; 8];
        data.extend(vec![200u8; 8]);
        let img = GrayImageU8::from_raw(4, 4, data).unwrap();
        assert!((contrast(img.as_view()) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn single_orientation_stripes_have_zero_spread() {
        // Every edge pixel lands in the same orientation bin as the peak.
        let img = stripes(24, 24, 4, true);
        let t = TamuraFeatures::compute(img.as_view());
        assert_eq!(t.directionality, 0.0);
        assert!(t.contrast > 0.0);
    }

    #[test]
    fn checkerboard_spreads_edge_orientations() {
        let mut data = Vec::with_capacity(24 * 24);
        for y in 0..24 {
            for x in 0..24 {
                data.push(if (x / 4 + y / 4) % 2 == 0 { 30 } else { 220 });
            }
        }
        let img = GrayImageU8::from_raw(24, 24, data).unwrap();
        let t = TamuraFeatures::compute(img.as_view());
        assert!(t.directionality > 0.0);
        assert!(t.directionality.is_finite());
    }

    #[test]
    fn ramp_gradients_agree_at_borders_and_corners() {
        // Rows 0, 10, 20, 30: brightness grows downwards only.
        let data = (0..4u8).flat_map(|r| [r * 10; 4]).collect();
        let img = GrayImageU8::from_raw(4, 4, data).unwrap();
        let (dh, dv) = edge_gradients(img.as_view());
        assert!(dh.iter().all(|&x| x == 0.0));
        for r in 0..4 {
            for c in 0..4 {
                let interior = (1..3).contains(&r) && (1..3).contains(&c);
                let expected = if interior { 60.0 } else { 10.0 };
                assert_eq!(dv[r * 4 + c], expected, "r={r} c={c}");
            }
        }
    }

    #[test]
    fn coarseness_stays_within_window_range() {
        for period in [2, 5, 16] {
            for vertical in [true, false] {
                let img = stripes(64, 48, period, vertical);
                let c = coarseness(img.as_view());
                assert!((1.0..=32.0).contains(&c), "period={period} c={c}");
            }
        }
        // 3 rows only allow the first scale.
        let img = stripes(40, 3, 2, true);
        assert_eq!(coarseness(img.as_view()), 1.0);
    }

    #[test]
    fn orientation_changes_with_stripe_direction() {
        let v = edge_gradients(stripes(12, 12, 3, true).as_view());
        let h = edge_gradients(stripes(12, 12, 3, false).as_view());
        let interior = |r: usize, c: usize| r * 12 + c;
        // Vertical stripes are constant down each column: no interior ΔV.
        for r in 1..11 {
            for c in 1..11 {
                assert_eq!(v.1[interior(r, c)], 0.0);
                assert_eq!(h.0[interior(r, c)], 0.0);
            }
        }
        assert!(v.0.iter().any(|&x| x != 0.0));
        assert!(h.1.iter().any(|&x| x != 0.0));
    }
}
