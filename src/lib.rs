#![doc = include_str!("../README.md")]

// Pipeline stages
pub mod color;
pub mod features;
pub mod preprocess;
pub mod texture;

// Orchestration and collaborators
pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod screener;

// Shared infrastructure
pub mod error;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::classifier::{Classifier, Label, LinearClassifier};
pub use crate::error::{PipelineError, Result};
pub use crate::features::{FeatureAssembler, FeatureSelection, FeatureVector, TextureMethod};
pub use crate::screener::{
    ScreeningOutcome, ScreeningParams, ScreeningRecord, ScreeningReport, Screener,
};

pub use crate::color::ColorSpace;
pub use crate::diagnostics::{StageTiming, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use cerviscan::prelude::*;
/// use std::path::Path;
/// use std::sync::Arc;
///
/// # fn main() -> cerviscan::Result<()> {
/// let rgb = load_rgb_image(Path::new("scan.jpg"))?;
/// let classifier: Arc<dyn Classifier> = Arc::new(LinearClassifier::load(Path::new("model.json"))?);
/// let screener = Screener::new(ScreeningParams::default(), classifier);
///
/// let outcome = screener.process(&rgb)?;
/// println!("label={} features={}", outcome.label, outcome.features.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::load_rgb_image;
    pub use crate::image::{GrayImageU8, ImageU8, RgbImageU8};
    pub use crate::{
        Classifier, FeatureAssembler, FeatureVector, Label, LinearClassifier, ScreeningParams,
        Screener,
    };
}
