//! Classifier collaborator seam.
//!
//! The screener only needs `FeatureVector -> Label`. Any closure with that
//! shape is a [`Classifier`]; [`LinearClassifier`] is a small JSON-described
//! linear model for tools and tests.
use crate::features::FeatureVector;
use crate::image::io::read_json_file;
use crate::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Screening outcome for one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Normal,
    Abnormal,
}

impl Label {
    /// Map a predicted class index: `0` is normal, anything else abnormal.
    pub fn from_class_index(index: usize) -> Self {
        if index == 0 {
            Label::Normal
        } else {
            Label::Abnormal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Normal => "normal",
            Label::Abnormal => "abnormal",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-trained model consumed as an opaque function. Shared read-only.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Label>;
}

impl<F> Classifier for F
where
    F: Fn(&FeatureVector) -> Result<Label> + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<Label> {
        self(features)
    }
}

/// `score = bias + Σ wᵢ·xᵢ`; abnormal when `score > threshold`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearClassifier {
    /// Expected column names, in order. Empty disables the check.
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub weights: Vec<f64>,
    #[serde(default)]
    pub bias: f64,
    #[serde(default)]
    pub threshold: f64,
}

impl LinearClassifier {
    pub fn load(path: &Path) -> Result<Self> {
        let model: Self = read_json_file(path)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if !self.feature_names.is_empty() && self.feature_names.len() != self.weights.len() {
            return Err(PipelineError::Config(format!(
                "linear model lists {} feature names for {} weights",
                self.feature_names.len(),
                self.weights.len()
            )));
        }
        if self.weights.iter().any(|w| !w.is_finite()) || !self.bias.is_finite() {
            return Err(PipelineError::Config(
                "linear model contains non-finite coefficients".into(),
            ));
        }
        Ok(())
    }

    pub fn score(&self, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(PipelineError::Classifier(format!(
                "model expects {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }
        if !self.feature_names.is_empty() {
            let mismatch = self
                .feature_names
                .iter()
                .zip(features.names())
                .position(|(expected, got)| expected != got);
            if let Some(i) = mismatch {
                return Err(PipelineError::Classifier(format!(
                    "feature {i} is '{}', model expects '{}'",
                    features.names()[i],
                    self.feature_names[i]
                )));
            }
        }
        if let Some((name, _)) = features.iter().find(|(_, v)| v.is_nan()) {
            return Err(PipelineError::Classifier(format!("feature '{name}' is NaN")));
        }
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.values())
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.bias + dot)
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Label> {
        let score = self.score(features)?;
        Ok(Label::from_class_index(usize::from(score > self.threshold)))
    }
}
