//! Colour-space conversions producing one `f64` plane per channel.
use crate::image::RgbImageU8;
use nalgebra::{Matrix3, Matrix3xX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB → YUV (BT.601 analogue) transform, rows are `Y`, `U`, `V`.
pub const YUV_FROM_RGB: Matrix3<f64> = Matrix3::new(
    0.299, 0.587, 0.114, //
    -0.147, -0.289, 0.436, //
    0.615, -0.515, 0.100,
);

/// Linear sRGB → CIE XYZ under D65.
pub const XYZ_FROM_RGB: Matrix3<f64> = Matrix3::new(
    0.412453, 0.357580, 0.180423, //
    0.212671, 0.715160, 0.072169, //
    0.019334, 0.119193, 0.950227,
);

/// D65 reference white, 2° observer.
pub const LAB_WHITE_D65: [f64; 3] = [0.95047, 1.0, 1.08883];

const LAB_EPSILON: f64 = 0.008856;
const LAB_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Colour spaces supported by the moment extractors, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorSpace {
    Rgb,
    Yuv,
    Lab,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 3] = [ColorSpace::Rgb, ColorSpace::Yuv, ColorSpace::Lab];

    /// Channel suffixes used in feature names.
    pub fn channel_names(self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["r", "g", "b"],
            ColorSpace::Yuv => ["y", "u", "v"],
            ColorSpace::Lab => ["l", "a", "b"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "RGB",
            ColorSpace::Yuv => "YUV",
            ColorSpace::Lab => "LAB",
        }
    }

    /// Convert every pixel and return the three channel planes.
    pub fn convert(self, rgb: &RgbImageU8) -> [Vec<f64>; 3] {
        match self {
            ColorSpace::Rgb => [rgb.channel_f64(0), rgb.channel_f64(1), rgb.channel_f64(2)],
            ColorSpace::Yuv => rgb_to_yuv(rgb),
            ColorSpace::Lab => rgb_to_lab(rgb),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pixels as the columns of a `3 × N` matrix.
fn pixel_matrix(rgb: &RgbImageU8, map: impl Fn(u8) -> f64) -> Matrix3xX<f64> {
    let n = rgb.pixels().len();
    Matrix3xX::from_iterator(n, rgb.as_interleaved().iter().map(|&v| map(v)))
}

fn split_rows(m: &Matrix3xX<f64>) -> [Vec<f64>; 3] {
    [
        m.row(0).iter().copied().collect(),
        m.row(1).iter().copied().collect(),
        m.row(2).iter().copied().collect(),
    ]
}

/// One matrix product over the whole image.
fn rgb_to_yuv(rgb: &RgbImageU8) -> [Vec<f64>; 3] {
    let pixels = pixel_matrix(rgb, f64::from);
    split_rows(&(YUV_FROM_RGB * pixels))
}

#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

/// sRGB in `[0, 1]` → CIE L*a*b* (D65).
fn rgb_to_lab(rgb: &RgbImageU8) -> [Vec<f64>; 3] {
    let linear = pixel_matrix(rgb, |v| srgb_to_linear(f64::from(v) / 255.0));
    let xyz = XYZ_FROM_RGB * linear;
    let n = xyz.ncols();
    let mut planes = [
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    ];
    for col in xyz.column_iter() {
        let fx = lab_f(col[0] / LAB_WHITE_D65[0]);
        let fy = lab_f(col[1] / LAB_WHITE_D65[1]);
        let fz = lab_f(col[2] / LAB_WHITE_D65[2]);
        planes[0].push(116.0 * fy - 16.0);
        planes[1].push(500.0 * (fx - fy));
        planes[2].push(200.0 * (fy - fz));
    }
    planes
}
