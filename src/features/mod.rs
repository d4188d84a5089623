//! Feature vector assembly.
//!
//! [`FeatureAssembler`] runs the selected colour-moment and texture extractors
//! in a fixed order (RGB, YUV, LAB, then LBP, GLRLM, TAMURA), concatenates
//! their columns and drops every column equal to [`SENTINEL_VALUE`].

pub mod assembler;
pub mod extractor;
pub mod vector;

pub use assembler::{AssemblerParams, FeatureAssembler, FeatureSelection, SENTINEL_VALUE};
pub use extractor::TextureMethod;
pub use vector::FeatureVector;
