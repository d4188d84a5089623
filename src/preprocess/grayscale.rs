//! RGB → single-channel luma.
use crate::image::{GrayImageU8, RgbImageU8};

/// ITU-R BT.601 weights for `R`, `G`, `B`.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Luma of one pixel, rounded to the nearest integer.
#[inline]
pub fn luma(px: [u8; 3]) -> u8 {
    let y = LUMA_WEIGHTS[0] * f64::from(px[0])
        + LUMA_WEIGHTS[1] * f64::from(px[1])
        + LUMA_WEIGHTS[2] * f64::from(px[2]);
    y.round().clamp(0.0, 255.0) as u8
}

/// Convert a colour image to grayscale with the fixed [`LUMA_WEIGHTS`].
pub fn rgb_to_gray(rgb: &RgbImageU8) -> GrayImageU8 {
    let data = rgb.pixels().iter().map(|&px| luma(px)).collect();
    GrayImageU8::new(rgb.width(), rgb.height(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_black_and_white_stay_uniform() {
        let black = rgb_to_gray(&RgbImageU8::filled(4, 3, [0, 0, 0]));
        assert!(black.data().iter().all(|&v| v == 0));
        assert_eq!((black.width(), black.height()), (4, 3));

        let white = rgb_to_gray(&RgbImageU8::filled(4, 3, [255, 255, 255]));
        assert!(white.data().iter().all(|&v| v == 255));
    }

    #[test]
    fn gray_input_maps_to_itself() {
        for v in [0u8, 1, 64, 128, 200, 255] {
            assert_eq!(luma([v, v, v]), v);
        }
    }

    #[test]
    fn weights_favour_green() {
        assert_eq!(luma([255, 0, 0]), 76);
        assert_eq!(luma([0, 255, 0]), 150);
        assert_eq!(luma([0, 0, 255]), 29);
    }
}
