//! Diagnostics recorded alongside a screening run.
//!
//! [`TimingBreakdown`] holds one [`StageTiming`] per pipeline stage and is
//! attached to `ScreeningReport` and the persisted `ScreeningRecord`.

pub mod timing;

pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
