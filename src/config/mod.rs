//! JSON configuration of the command-line tools.

pub mod screening;

pub use screening::{load_config, OutputConfig, ScreeningConfig};
