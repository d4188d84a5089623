use crate::classifier::Label;
use crate::diagnostics::TimingBreakdown;
use crate::features::FeatureVector;
use crate::image::{GrayImageU8, LabelImage, RgbImageU8};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the classifier concluded and the evidence it saw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningOutcome {
    pub label: Label,
    pub features: FeatureVector,
    /// Multi-Otsu thresholds used for the mask.
    pub thresholds: Vec<u8>,
}

/// Intermediate images produced on the way to the outcome.
#[derive(Clone, Debug)]
pub struct ScreeningArtifacts {
    pub gray: GrayImageU8,
    pub labels: LabelImage,
    pub mask_preview: GrayImageU8,
    pub segmented: RgbImageU8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Result of [`Screener::process_with_diagnostics`](crate::Screener::process_with_diagnostics).
#[derive(Clone, Debug)]
pub struct ScreeningReport {
    pub input: InputDescriptor,
    pub outcome: ScreeningOutcome,
    pub artifacts: ScreeningArtifacts,
    pub timings: TimingBreakdown,
}

/// Paths of the images written for one screening.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactPaths {
    pub original: PathBuf,
    pub gray: PathBuf,
    pub mask: PathBuf,
    pub segmented: PathBuf,
}

/// Everything the storage collaborator keeps about one screening.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRecord {
    pub input: InputDescriptor,
    pub artifacts: ArtifactPaths,
    pub thresholds: Vec<u8>,
    pub features: FeatureVector,
    pub prediction: Label,
    /// Seconds since the Unix epoch when the record was created.
    pub processed_at: u64,
    pub timings: TimingBreakdown,
}

impl ScreeningRecord {
    pub fn new(report: &ScreeningReport, artifacts: ArtifactPaths, processed_at: u64) -> Self {
        Self {
            input: report.input,
            artifacts,
            thresholds: report.outcome.thresholds.clone(),
            features: report.outcome.features.clone(),
            prediction: report.outcome.label,
            processed_at,
            timings: report.timings.clone(),
        }
    }
}
