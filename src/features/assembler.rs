use super::extractor::TextureMethod;
use super::vector::FeatureVector;
use crate::color::ColorSpace;
use crate::image::io::load_rgb_image;
use crate::image::RgbImageU8;
use crate::preprocess::rgb_to_gray;
use crate::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Columns equal to this value are dropped from the assembled vector.
pub const SENTINEL_VALUE: f64 = 1.0;

/// Which extractors run. Set order equals declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureSelection {
    pub color_spaces: BTreeSet<ColorSpace>,
    pub textures: BTreeSet<TextureMethod>,
}

impl Default for FeatureSelection {
    fn default() -> Self {
        Self {
            color_spaces: ColorSpace::ALL.into_iter().collect(),
            textures: TextureMethod::ALL.into_iter().collect(),
        }
    }
}

impl FeatureSelection {
    pub fn none() -> Self {
        Self {
            color_spaces: BTreeSet::new(),
            textures: BTreeSet::new(),
        }
    }

    pub fn only_color(spaces: impl IntoIterator<Item = ColorSpace>) -> Self {
        Self {
            color_spaces: spaces.into_iter().collect(),
            textures: BTreeSet::new(),
        }
    }

    pub fn only_texture(methods: impl IntoIterator<Item = TextureMethod>) -> Self {
        Self {
            color_spaces: BTreeSet::new(),
            textures: methods.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color_spaces.is_empty() && self.textures.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssemblerParams {
    #[serde(flatten)]
    pub selection: FeatureSelection,
    /// Build the GLRLM on default LBP codes instead of raw intensities.
    pub glrlm_lbp: bool,
}

/// Runs the selected extractors on one image.
#[derive(Clone, Debug, Default)]
pub struct FeatureAssembler {
    params: AssemblerParams,
}

impl FeatureAssembler {
    pub fn new(params: AssemblerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AssemblerParams {
        &self.params
    }

    /// Assemble the feature vector of `rgb`.
    ///
    /// Texture extractors see the BT.601 luma of `rgb`. Columns equal to
    /// [`SENTINEL_VALUE`] are removed after concatenation.
    pub fn assemble(&self, rgb: &RgbImageU8) -> Result<FeatureVector> {
        debug!(
            "FeatureAssembler::assemble start w={} h={} colors={} textures={}",
            rgb.width(),
            rgb.height(),
            self.params.selection.color_spaces.len(),
            self.params.selection.textures.len()
        );
        let mut all = FeatureVector::new();
        for &space in &self.params.selection.color_spaces {
            all.extend(space.label(), space.extract(rgb)?)?;
        }

        if !self.params.selection.textures.is_empty() {
            let gray = rgb_to_gray(rgb);
            for &method in &self.params.selection.textures {
                let features = method.extract(gray.as_view(), self.params.glrlm_lbp)?;
                debug!("FeatureAssembler {} -> {} columns", method, features.len());
                all.extend(method.label(), features)?;
            }
        }

        let kept = all.without_value(SENTINEL_VALUE);
        debug!(
            "FeatureAssembler::assemble done columns={} dropped={}",
            kept.len(),
            all.len() - kept.len()
        );
        Ok(kept)
    }

    /// Load a colour image from disk and assemble its features.
    pub fn assemble_path(&self, path: &Path) -> Result<FeatureVector> {
        let rgb = load_rgb_image(path)?;
        self.assemble(&rgb)
    }
}
