//! Error taxonomy shared by every pipeline stage.
//!
//! Failures abort the current image; nothing in the crate retries. The four
//! domain variants (`InvalidImage`, `DegenerateHistogram`, `ShapeMismatch`,
//! `FeatureCountMismatch`) come from the pipeline itself, the remaining ones
//! wrap I/O, codec, JSON and configuration problems met by the tools.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while screening an image.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Wrong channel count or a buffer that does not match its shape.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The histogram has too few distinct intensities to separate classes.
    #[error(
        "degenerate histogram: {distinct} distinct intensities cannot be split into {classes} classes"
    )]
    DegenerateHistogram {
        /// Number of distinct intensities present in the image.
        distinct: usize,
        /// Number of classes requested from the segmenter.
        classes: usize,
    },

    /// Mask and image spatial dimensions differ.
    #[error("shape mismatch: image is {image_w}x{image_h}, mask is {mask_w}x{mask_h}")]
    ShapeMismatch {
        image_w: usize,
        image_h: usize,
        mask_w: usize,
        mask_h: usize,
    },

    /// Feature names and values went out of lock-step.
    #[error("feature count mismatch in {context}: {names} names for {values} values")]
    FeatureCountMismatch {
        /// Extractor or step that detected the mismatch.
        context: String,
        names: usize,
        values: usize,
    },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode or encode {}: {source}", path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid parameters (class count, model description, ...).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The classifier collaborator rejected the feature vector.
    #[error("classifier error: {0}")]
    Classifier(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

impl PipelineError {
    /// Creates a shape mismatch error from `(width, height)` pairs.
    #[must_use]
    pub const fn shape_mismatch(image: (usize, usize), mask: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            image_w: image.0,
            image_h: image.1,
            mask_w: mask.0,
            mask_h: mask.1,
        }
    }

    /// Creates a feature count mismatch error.
    #[must_use]
    pub fn feature_count_mismatch(context: impl Into<String>, names: usize, values: usize) -> Self {
        Self::FeatureCountMismatch {
            context: context.into(),
            names,
            values,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn codec(path: &Path, source: image::ImageError) -> Self {
        Self::Codec {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}
