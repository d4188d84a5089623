//! Texture descriptors computed on grayscale images.
//!
//! - [`glrlm`]: gray-level run-length statistics in four directions.
//! - [`lbp`]: local binary patterns and their uniform-code histogram.
//! - [`tamura`]: coarseness, contrast and directionality.

pub mod glrlm;
pub mod lbp;
pub mod tamura;

pub use glrlm::{glrlm_features, Direction, RunLengthMatrix, RunLengthStats};
pub use lbp::{lbp_histogram_features, local_binary_pattern, LbpMethod};
pub use tamura::{tamura_features, TamuraFeatures};
