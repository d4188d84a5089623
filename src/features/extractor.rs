use crate::color::{color_moments, ColorSpace};
use crate::features::FeatureVector;
use crate::image::{ImageU8, RgbImageU8};
use crate::texture::{glrlm_features, lbp_histogram_features, tamura_features};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Texture extractors, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextureMethod {
    Lbp,
    Glrlm,
    Tamura,
}

impl TextureMethod {
    pub const ALL: [TextureMethod; 3] = [
        TextureMethod::Lbp,
        TextureMethod::Glrlm,
        TextureMethod::Tamura,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextureMethod::Lbp => "LBP",
            TextureMethod::Glrlm => "GLRLM",
            TextureMethod::Tamura => "TAMURA",
        }
    }

    /// Run the extractor on a grayscale image. `glrlm_lbp` only affects GLRLM.
    pub fn extract(self, gray: ImageU8<'_>, glrlm_lbp: bool) -> Result<FeatureVector> {
        match self {
            TextureMethod::Lbp => lbp_histogram_features(gray),
            TextureMethod::Glrlm => glrlm_features(gray, glrlm_lbp),
            TextureMethod::Tamura => tamura_features(gray),
        }
    }
}

impl fmt::Display for TextureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ColorSpace {
    /// Colour moments of `rgb` in this space.
    pub fn extract(self, rgb: &RgbImageU8) -> Result<FeatureVector> {
        color_moments(rgb, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    #[test]
    fn serde_uses_uppercase_labels() {
        let json = serde_json::to_string(&TextureMethod::ALL).unwrap();
        assert_eq!(json, r#"["LBP","GLRLM","TAMURA"]"#);
        let parsed: TextureMethod = serde_json::from_str(r#""TAMURA""#).unwrap();
        assert_eq!(parsed, TextureMethod::Tamura);
        assert!(serde_json::from_str::<TextureMethod>(r#""HOG""#).is_err());
    }

    #[test]
    fn extractors_report_their_widths() {
        let data: Vec<u8> = (0..64u32).map(|i| (i * 37 % 251) as u8).collect();
        let gray = GrayImageU8::from_raw(8, 8, data).unwrap();
        let widths: Vec<usize> = TextureMethod::ALL
            .iter()
            .map(|m| m.extract(gray.as_view(), false).unwrap().len())
            .collect();
        assert_eq!(widths, vec![10, 44, 3]);
    }
}
