//! End-to-end screening of one colour image.
//!
//! Stages, each consuming only the previous stage's output:
//! 1. BT.601 grayscale conversion.
//! 2. Multi-Otsu segmentation of the grayscale image into `classes` labels.
//! 3. Masking: pixels outside the brightest class are zeroed in the colour
//!    image, giving the segmented image.
//! 4. Feature assembly on the segmented image (see [`crate::features`]).
//! 5. Classification through the shared [`Classifier`](crate::Classifier).
//!
//! Nothing is retried; the first failing stage aborts the request.

pub mod params;
mod pipeline;
pub mod report;

pub use params::ScreeningParams;
pub use pipeline::Screener;
pub use report::{
    ArtifactPaths, InputDescriptor, ScreeningArtifacts, ScreeningOutcome, ScreeningRecord,
    ScreeningReport,
};
