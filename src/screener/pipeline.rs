use super::params::ScreeningParams;
use super::report::{InputDescriptor, ScreeningArtifacts, ScreeningOutcome, ScreeningReport};
use crate::classifier::{Classifier, Label};
use crate::diagnostics::{elapsed_ms, TimingBreakdown};
use crate::features::FeatureAssembler;
use crate::image::RgbImageU8;
use crate::preprocess::multiotsu::labels_from_thresholds;
use crate::preprocess::{composite_highest, mask_preview, multiotsu_thresholds, rgb_to_gray};
use crate::Result;
use log::debug;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Runs grayscale conversion, multi-Otsu segmentation, masking, feature
/// assembly and classification on one colour image.
///
/// The screener holds no per-request state, so one instance can serve
/// concurrent callers.
#[derive(Clone)]
pub struct Screener {
    params: ScreeningParams,
    assembler: FeatureAssembler,
    classifier: Arc<dyn Classifier>,
}

impl fmt::Debug for Screener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screener")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Screener {
    pub fn new(params: ScreeningParams, classifier: Arc<dyn Classifier>) -> Self {
        let assembler = FeatureAssembler::new(params.features.clone());
        Self {
            params,
            assembler,
            classifier,
        }
    }

    pub fn params(&self) -> &ScreeningParams {
        &self.params
    }

    /// Screen `rgb` and return the classifier outcome only.
    pub fn process(&self, rgb: &RgbImageU8) -> Result<ScreeningOutcome> {
        self.process_with_diagnostics(rgb).map(|report| report.outcome)
    }

    /// Screen `rgb`, keeping the intermediate images and stage timings.
    pub fn process_with_diagnostics(&self, rgb: &RgbImageU8) -> Result<ScreeningReport> {
        let total_start = Instant::now();
        let (w, h) = (rgb.width(), rgb.height());
        let classes = self.params.segmentation.classes;
        debug!("Screener::process start w={} h={} classes={}", w, h, classes);

        let mut timings = TimingBreakdown::default();
        let gray = timings.time("grayscale", || rgb_to_gray(rgb));

        let start = Instant::now();
        let thresholds = multiotsu_thresholds(gray.as_view(), classes)?;
        let labels = labels_from_thresholds(gray.as_view(), &thresholds, classes);
        timings.push("segmentation", elapsed_ms(start));
        debug!(
            "Screener::process thresholds={:?} counts={:?}",
            thresholds,
            labels.class_counts()
        );

        let start = Instant::now();
        let segmented = composite_highest(rgb, &labels)?;
        let preview = mask_preview(&labels);
        timings.push("mask", elapsed_ms(start));

        let start = Instant::now();
        let features = self.assembler.assemble(&segmented)?;
        timings.push("features", elapsed_ms(start));

        let start = Instant::now();
        let label: Label = self.classifier.predict(&features)?;
        timings.push("classify", elapsed_ms(start));

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "Screener::process done label={} features={} total_ms={:.3}",
            label,
            features.len(),
            timings.total_ms
        );

        Ok(ScreeningReport {
            input: InputDescriptor {
                width: w,
                height: h,
            },
            outcome: ScreeningOutcome {
                label,
                features,
                thresholds,
            },
            artifacts: ScreeningArtifacts {
                gray,
                labels,
                mask_preview: preview,
                segmented,
            },
            timings,
        })
    }
}
