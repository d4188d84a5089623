use crate::features::AssemblerParams;
use crate::preprocess::SegmentationParams;
use serde::{Deserialize, Serialize};

/// Runtime parameters of a [`Screener`](crate::Screener).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreeningParams {
    pub segmentation: SegmentationParams,
    pub features: AssemblerParams,
}
