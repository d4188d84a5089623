//! First three statistical moments of a channel.
use super::space::ColorSpace;
use crate::features::FeatureVector;
use crate::image::RgbImageU8;
use crate::Result;

/// Mean, population standard deviation and biased (Fisher) skewness.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelMoments {
    pub mean: f64,
    pub std: f64,
    pub skew: f64,
}

impl ChannelMoments {
    /// Moments of a flattened channel. An empty channel yields all zeros and a
    /// zero-variance channel has zero skewness.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let first = values[0];
        if values.iter().all(|&v| v == first) {
            return Self {
                mean: first,
                std: 0.0,
                skew: 0.0,
            };
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let (mut m2, mut m3) = (0.0f64, 0.0f64);
        for &v in values {
            let d = v - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
        }
        m2 /= n;
        m3 /= n;

        // Variance at rounding-noise level relative to the mean counts as zero.
        let zero_variance = m2 <= (f64::EPSILON * mean) * (f64::EPSILON * mean);
        let skew = if zero_variance {
            0.0
        } else {
            m3 / m2.powf(1.5)
        };
        Self {
            mean,
            std: m2.sqrt(),
            skew,
        }
    }
}

/// Nine colour-moment features of `rgb` in `space`.
///
/// Names are `mean_<c>`, `std_<c>` and `skew_<c>` for the channel suffixes of
/// the colour space, ordered `mean×3, std×3, skew×3`.
pub fn color_moments(rgb: &RgbImageU8, space: ColorSpace) -> Result<FeatureVector> {
    let planes = space.convert(rgb);
    let moments = planes.map(|plane| ChannelMoments::from_values(&plane));
    let channels = space.channel_names();

    let mut names = Vec::with_capacity(9);
    let mut values = Vec::with_capacity(9);
    let stats = [
        ("mean", moments.map(|m| m.mean)),
        ("std", moments.map(|m| m.std)),
        ("skew", moments.map(|m| m.skew)),
    ];
    for (stat, per_channel) in stats {
        for (channel, value) in channels.iter().zip(per_channel) {
            names.push(format!("{stat}_{channel}"));
            values.push(value);
        }
    }
    FeatureVector::from_parts(space.label(), names, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_channel_has_zero_skew() {
        let m = ChannelMoments::from_values(&[7.0; 16]);
        assert_eq!(m.mean, 7.0);
        assert_eq!(m.std, 0.0);
        assert_eq!(m.skew, 0.0);

        // Non-representable mean with tiny rounding residue.
        let m = ChannelMoments::from_values(&[0.1; 10]);
        assert_eq!(m.skew, 0.0);
        assert!(m.skew.is_finite());
    }

    #[test]
    fn known_distribution() {
        // Values 0, 0, 0, 3: mean 0.75, m2 = 1.6875, m3 = 2.53125.
        let m = ChannelMoments::from_values(&[0.0, 0.0, 0.0, 3.0]);
        assert!((m.mean - 0.75).abs() < 1e-12);
        assert!((m.std - 1.6875f64.sqrt()).abs() < 1e-12);
        let expected_skew = 2.53125 / 1.6875f64.powf(1.5);
        assert!((m.skew - expected_skew).abs() < 1e-12);
        assert!(m.skew > 0.0);
    }

    #[test]
    fn symmetric_distribution_is_unskewed() {
        let m = ChannelMoments::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(m.skew.abs() < 1e-12);
        assert!((m.std - 2.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn names_follow_channel_order() {
        let rgb = RgbImageU8::filled(2, 2, [10, 20, 30]);
        let v = color_moments(&rgb, ColorSpace::Rgb).unwrap();
        assert_eq!(
            v.names(),
            &[
                "mean_r", "mean_g", "mean_b", "std_r", "std_g", "std_b", "skew_r", "skew_g",
                "skew_b"
            ]
        );
        assert_eq!(&v.values()[..3], &[10.0, 20.0, 30.0]);
        assert!(v.values()[3..].iter().all(|&x| x == 0.0));

        let lab = color_moments(&rgb, ColorSpace::Lab).unwrap();
        assert_eq!(lab.names()[0], "mean_l");
        assert_eq!(lab.names()[8], "skew_b");
    }

    #[test]
    fn extraction_is_deterministic() {
        let pixels = (0..36u32)
            .map(|i| [(i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8])
            .collect();
        let rgb = RgbImageU8::from_pixels(6, 6, pixels).unwrap();
        for space in ColorSpace::ALL {
            let a = color_moments(&rgb, space).unwrap();
            let b = color_moments(&rgb, space).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.len(), 9);
            assert!(a.values().iter().all(|v| v.is_finite()));
        }
    }
}
