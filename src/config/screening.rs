use crate::features::AssemblerParams;
use crate::image::io::read_json_file;
use crate::preprocess::{SegmentationParams, MAX_CLASSES};
use crate::screener::{ArtifactPaths, ScreeningParams};
use crate::{PipelineError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// JSON configuration of the `cerviscan` tool.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningConfig {
    pub input: PathBuf,
    /// Linear model description, see [`LinearClassifier`](crate::LinearClassifier).
    pub model: PathBuf,
    #[serde(default)]
    pub segmentation: SegmentationParams,
    #[serde(default)]
    pub features: AssemblerParams,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    /// Directory receiving `gray_`, `mask_` and `segmented_` images.
    pub dir: PathBuf,
    /// Record destination. Defaults to `<dir>/record_<stem>.json`.
    pub record_json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("processed"),
            record_json: None,
        }
    }
}

impl OutputConfig {
    /// Where the artifacts of `input` are written.
    pub fn artifact_paths(&self, input: &Path) -> ArtifactPaths {
        let stem = file_stem(input);
        ArtifactPaths {
            original: input.to_path_buf(),
            gray: self.dir.join(format!("gray_{stem}.png")),
            mask: self.dir.join(format!("mask_{stem}.png")),
            segmented: self.dir.join(format!("segmented_{stem}.png")),
        }
    }

    pub fn record_path(&self, input: &Path) -> PathBuf {
        self.record_json
            .clone()
            .unwrap_or_else(|| self.dir.join(format!("record_{}.json", file_stem(input))))
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

impl ScreeningConfig {
    /// Validate the sections and produce screener parameters.
    pub fn resolve(&self) -> Result<ScreeningParams> {
        let classes = self.segmentation.classes;
        if !(2..=MAX_CLASSES).contains(&classes) {
            return Err(PipelineError::Config(format!(
                "segmentation.classes must be in 2..={MAX_CLASSES}, got {classes}"
            )));
        }
        if self.features.selection.is_empty() {
            return Err(PipelineError::Config(
                "features selects no colour space and no texture".into(),
            ));
        }
        Ok(ScreeningParams {
            segmentation: self.segmentation,
            features: self.features.clone(),
        })
    }
}

pub fn load_config(path: &Path) -> Result<ScreeningConfig> {
    read_json_file(path)
}
