//! The eleven run-length statistics.
//!
//! With `p(i, j)` the run count at relative gray level `i` (0-based) and run
//! length `j` (1-based), and `S = Σ p`:
//!
//! | name   | formula              |
//! |--------|----------------------|
//! | SRE    | Σ p / j² / S         |
//! | LRE    | Σ p · j² / S         |
//! | GLN    | Σ_i (Σ_j p)² / S     |
//! | RLN    | Σ_j (Σ_i p)² / S     |
//! | RP     | S / Σ p · j          |
//! | LGLRE  | Σ p / i² / S         |
//! | HGL    | Σ p · i² / S         |
//! | SRLGLE | Σ p / (i² j²) / S    |
//! | SRHGLE | Σ p · i² / j² / S    |
//! | LRLGLE | Σ p · j² / i² / S    |
//! | LRHGLE | Σ p · i² · j² / S    |
//!
//! Terms dividing by `i² = 0` contribute nothing, and every statistic of an
//! all-zero matrix is 0.
use super::matrix::RunLengthMatrix;

/// Statistic names in output order.
pub const STAT_NAMES: [&str; 11] = [
    "SRE", "LRE", "GLN", "RLN", "RP", "LGLRE", "HGL", "SRLGLE", "SRHGLE", "LRLGLE", "LRHGLE",
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunLengthStats {
    pub short_run_emphasis: f64,
    pub long_run_emphasis: f64,
    pub gray_level_non_uniformity: f64,
    pub run_length_non_uniformity: f64,
    pub run_percentage: f64,
    pub low_gray_level_run_emphasis: f64,
    pub high_gray_level_run_emphasis: f64,
    pub short_run_low_gray_level_emphasis: f64,
    pub short_run_high_gray_level_emphasis: f64,
    pub long_run_low_gray_level_emphasis: f64,
    pub long_run_high_gray_level_emphasis: f64,
}

impl RunLengthStats {
    pub fn from_matrix(m: &RunLengthMatrix) -> Self {
        let total_runs = m.total_runs();
        if total_runs == 0 {
            return Self::default();
        }
        let s = total_runs as f64;

        let mut sre = 0.0;
        let mut lre = 0.0;
        let mut gln = 0.0;
        let mut lglre = 0.0;
        let mut hgl = 0.0;
        let mut srlgle = 0.0;
        let mut srhgle = 0.0;
        let mut lrlgle = 0.0;
        let mut lrhgle = 0.0;
        let mut weighted_pixels = 0.0;
        let mut run_marginal = vec![0.0f64; m.max_run()];

        for (i, row) in m.level_rows().enumerate() {
            let i2 = (i * i) as f64;
            let mut level_marginal = 0.0;
            for (jj, &count) in row.iter().enumerate() {
                if count == 0 {
                    continue;
                }
                let p = count as f64;
                let j = (jj + 1) as f64;
                let j2 = j * j;

                level_marginal += p;
                run_marginal[jj] += p;
                weighted_pixels += p * j;

                sre += p / j2;
                lre += p * j2;
                hgl += p * i2;
                srhgle += p * i2 / j2;
                lrhgle += p * i2 * j2;
                if i > 0 {
                    lglre += p / i2;
                    srlgle += p / (i2 * j2);
                    lrlgle += p * j2 / i2;
                }
            }
            gln += level_marginal * level_marginal;
        }
        let rln: f64 = run_marginal.iter().map(|r| r * r).sum();

        Self {
            short_run_emphasis: sre / s,
            long_run_emphasis: lre / s,
            gray_level_non_uniformity: gln / s,
            run_length_non_uniformity: rln / s,
            run_percentage: s / weighted_pixels,
            low_gray_level_run_emphasis: lglre / s,
            high_gray_level_run_emphasis: hgl / s,
            short_run_low_gray_level_emphasis: srlgle / s,
            short_run_high_gray_level_emphasis: srhgle / s,
            long_run_low_gray_level_emphasis: lrlgle / s,
            long_run_high_gray_level_emphasis: lrhgle / s,
        }
    }

    /// Values in [`STAT_NAMES`] order.
    pub fn to_array(&self) -> [f64; 11] {
        [
            self.short_run_emphasis,
            self.long_run_emphasis,
            self.gray_level_non_uniformity,
            self.run_length_non_uniformity,
            self.run_percentage,
            self.low_gray_level_run_emphasis,
            self.high_gray_level_run_emphasis,
            self.short_run_low_gray_level_emphasis,
            self.short_run_high_gray_level_emphasis,
            self.long_run_low_gray_level_emphasis,
            self.long_run_high_gray_level_emphasis,
        ]
    }
}
