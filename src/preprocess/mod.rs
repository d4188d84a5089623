//! Image preparation stages that run before feature extraction.
//!
//! 1. [`rgb_to_gray`] converts the colour input to BT.601 luma.
//! 2. [`multiotsu_labels`] splits the luma histogram into classes that
//!    maximise between-class variance.
//! 3. [`composite_highest`] keeps the colour pixels of the brightest class and
//!    zeroes everything else, producing the "segmented" image.
//!
//! Every stage returns a new buffer; inputs are never modified.

pub mod grayscale;
pub mod mask;
pub mod multiotsu;

pub use grayscale::{luma, rgb_to_gray, LUMA_WEIGHTS};
pub use mask::{composite, composite_highest, mask_preview};
pub use multiotsu::{MAX_CLASSES, multiotsu_labels, multiotsu_thresholds, SegmentationParams};
