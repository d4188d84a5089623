//! Gray-Level Run-Length Matrix (GLRLM) texture features.
//!
//! For each of the four scan directions a fresh [`RunLengthMatrix`] is built
//! and reduced to the eleven [`RunLengthStats`]. The result has 44 columns in
//! direction order 0°, 45°, 90°, 135°, named `<STAT>_deg<angle>`.

mod matrix;
mod stats;

pub use matrix::{Direction, RunLengthMatrix};
pub use stats::{RunLengthStats, STAT_NAMES};

use super::lbp::{local_binary_pattern, LbpMethod};
use crate::features::FeatureVector;
use crate::image::ImageU8;
use crate::Result;
use log::debug;

/// Number of features produced by [`glrlm_features`].
pub const GLRLM_FEATURE_COUNT: usize = STAT_NAMES.len() * Direction::ALL.len();

/// Feature names in output order.
pub fn glrlm_feature_names() -> Vec<String> {
    Direction::ALL
        .iter()
        .flat_map(|dir| STAT_NAMES.iter().map(move |s| format!("{s}_{}", dir.label())))
        .collect()
}

/// GLRLM statistics of `gray`, optionally on its default LBP codes.
pub fn glrlm_features(gray: ImageU8<'_>, lbp: bool) -> Result<FeatureVector> {
    let codes;
    let source = if lbp {
        codes = local_binary_pattern(gray, LbpMethod::Default);
        codes.as_view()
    } else {
        gray
    };

    let mut values = Vec::with_capacity(GLRLM_FEATURE_COUNT);
    for dir in Direction::ALL {
        let matrix = RunLengthMatrix::compute(source, dir);
        debug!(
            "glrlm dir={} levels={} max_run={} runs={}",
            dir.label(),
            matrix.levels(),
            matrix.max_run(),
            matrix.total_runs()
        );
        values.extend(RunLengthStats::from_matrix(&matrix).to_array());
    }
    FeatureVector::from_parts("GLRLM", glrlm_feature_names(), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    #[test]
    fn names_cover_all_directions() {
        let names = glrlm_feature_names();
        assert_eq!(names.len(), 44);
        assert_eq!(names[0], "SRE_deg0");
        assert_eq!(names[10], "LRHGLE_deg0");
        assert_eq!(names[11], "SRE_deg45");
        assert_eq!(names[43], "LRHGLE_deg135");
    }

    #[test]
    fn produces_44_finite_values() {
        let data: Vec<u8> = (0..30u32).map(|i| (i % 4 * 60) as u8).collect();
        let img = GrayImageU8::from_raw(6, 5, data).unwrap();
        for lbp in [false, true] {
            let v = glrlm_features(img.as_view(), lbp).unwrap();
            assert_eq!(v.len(), GLRLM_FEATURE_COUNT);
            assert!(v.values().iter().all(|x| x.is_finite()));
        }
    }

    #[test]
    fn empty_image_gives_zeros() {
        let img = GrayImageU8::filled(0, 0, 0);
        let v = glrlm_features(img.as_view(), false).unwrap();
        assert_eq!(v.len(), 44);
        assert!(v.values().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn uniform_image_runs_span_lines() {
        // One run per row: SRE = 1/w², LRE = w², RP = 1/w.
        let img = GrayImageU8::filled(4, 3, 9);
        let v = glrlm_features(img.as_view(), false).unwrap();
        assert!((v.get("SRE_deg0").unwrap() - 1.0 / 16.0).abs() < 1e-12);
        assert!((v.get("LRE_deg0").unwrap() - 16.0).abs() < 1e-12);
        assert!((v.get("RP_deg0").unwrap() - 0.25).abs() < 1e-12);
        // Columns have length 3.
        assert!((v.get("LRE_deg90").unwrap() - 9.0).abs() < 1e-12);
        // Single gray level sits at relative index 0.
        assert_eq!(v.get("HGL_deg0"), Some(0.0));
        assert_eq!(v.get("LGLRE_deg0"), Some(0.0));
    }
}
