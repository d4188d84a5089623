//! Local binary patterns with 8 neighbours on a radius-1 circle.
//!
//! Neighbour `p` sits at offset `(-sin(2πp/8), cos(2πp/8))` (row, column),
//! rounded to five decimals and sampled bilinearly with zero outside the
//! image. Its bit is set when `neighbour - centre >= 0`.
use crate::features::FeatureVector;
use crate::image::{GrayImageU8, ImageU8};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Number of sampling points on the circle.
pub const LBP_POINTS: usize = 8;
/// Circle radius in pixels.
pub const LBP_RADIUS: f64 = 1.0;
/// Bins of the uniform-code histogram (`P + 2`).
pub const LBP_UNIFORM_BINS: usize = LBP_POINTS + 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LbpMethod {
    /// Raw 8-bit pattern `Σ bit_p · 2^p`.
    #[default]
    Default,
    /// Bit count for patterns with at most two transitions over `p = 0..7`
    /// (the sequence is not closed), `P + 1` otherwise.
    Uniform,
}

fn sampling_offsets() -> [(f64, f64); LBP_POINTS] {
    let round5 = |v: f64| (v * 1e5).round() / 1e5;
    std::array::from_fn(|p| {
        let angle = 2.0 * std::f64::consts::PI * p as f64 / LBP_POINTS as f64;
        (
            round5(-LBP_RADIUS * angle.sin()),
            round5(LBP_RADIUS * angle.cos()),
        )
    })
}

#[inline]
fn pixel_or_zero(gray: &ImageU8<'_>, r: isize, c: isize) -> f64 {
    if r < 0 || c < 0 || r as usize >= gray.h || c as usize >= gray.w {
        0.0
    } else {
        f64::from(gray.get(c as usize, r as usize))
    }
}

fn bilinear(gray: &ImageU8<'_>, r: f64, c: f64) -> f64 {
    let (minr, minc) = (r.floor(), c.floor());
    let (maxr, maxc) = (r.ceil(), c.ceil());
    let (dr, dc) = (r - minr, c - minc);
    let tl = pixel_or_zero(gray, minr as isize, minc as isize);
    let tr = pixel_or_zero(gray, minr as isize, maxc as isize);
    let bl = pixel_or_zero(gray, maxr as isize, minc as isize);
    let br = pixel_or_zero(gray, maxr as isize, maxc as isize);
    let top = (1.0 - dc) * tl + dc * tr;
    let bottom = (1.0 - dc) * bl + dc * br;
    (1.0 - dr) * top + dr * bottom
}

/// LBP code image of `gray`.
pub fn local_binary_pattern(gray: ImageU8<'_>, method: LbpMethod) -> GrayImageU8 {
    let offsets = sampling_offsets();
    let mut codes = Vec::with_capacity(gray.w * gray.h);
    let mut bits = [false; LBP_POINTS];
    for y in 0..gray.h {
        for x in 0..gray.w {
            let centre = f64::from(gray.get(x, y));
            for (bit, &(dr, dc)) in bits.iter_mut().zip(&offsets) {
                let sample = bilinear(&gray, y as f64 + dr, x as f64 + dc);
                *bit = sample - centre >= 0.0;
            }
            let code = match method {
                LbpMethod::Default => bits
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (p, &b)| acc | (u8::from(b) << p)),
                LbpMethod::Uniform => {
                    let transitions = bits.windows(2).filter(|w| w[0] != w[1]).count();
                    if transitions <= 2 {
                        bits.iter().filter(|&&b| b).count() as u8
                    } else {
                        (LBP_POINTS + 1) as u8
                    }
                }
            };
            codes.push(code);
        }
    }
    GrayImageU8::new(gray.w, gray.h, codes)
}

/// Normalised histogram of uniform LBP codes: `lbp_0 … lbp_9`.
pub fn lbp_histogram_features(gray: ImageU8<'_>) -> Result<FeatureVector> {
    let codes = local_binary_pattern(gray, LbpMethod::Uniform);
    let mut hist = [0u64; LBP_UNIFORM_BINS];
    for &code in codes.data() {
        hist[usize::from(code)] += 1;
    }
    let total: u64 = hist.iter().sum();
    let names = (0..LBP_UNIFORM_BINS).map(|i| format!("lbp_{i}")).collect();
    let values = hist
        .iter()
        .map(|&c| if total == 0 { 0.0 } else { c as f64 / total as f64 })
        .collect();
    FeatureVector::from_parts("LBP", names, values)
}
