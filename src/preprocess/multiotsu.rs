//! Multi-level Otsu thresholding.
//!
//! The histogram spans the image's own intensity range `[min, max]` with one
//! bin per integer value. An exhaustive search over `classes - 1` ordered bin
//! indices keeps the tuple with the largest between-class variance
//! `Σ_k S_k² / W_k`, where class `k` covers bins `(idx[k-1], idx[k]]`, `W_k`
//! is its probability mass and `S_k` its first moment. Ties keep the first
//! tuple visited, i.e. the lexicographically lowest thresholds.
//!
//! Pixels are then digitised against the thresholds: the class of a value is
//! the number of thresholds it is greater than or equal to.
use crate::image::{ImageU8, ImageView, LabelImage};
use crate::{PipelineError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Largest class count accepted from configuration files.
pub const MAX_CLASSES: usize = 5;

/// Segmenter configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationParams {
    /// Number of intensity classes (>= 2). Produces `classes - 1` thresholds.
    pub classes: usize,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self { classes: 3 }
    }
}

/// Cumulative zeroth/first moments of the normalised histogram.
struct Moments {
    zeroth: Vec<f64>,
    first: Vec<f64>,
}

impl Moments {
    fn new(hist: &[u64], offset: usize, total: u64) -> Self {
        let total = total as f64;
        let mut zeroth = Vec::with_capacity(hist.len());
        let mut first = Vec::with_capacity(hist.len());
        let (mut w, mut s) = (0.0f64, 0.0f64);
        for (i, &count) in hist.iter().enumerate() {
            let p = count as f64 / total;
            w += p;
            s += p * (offset + i) as f64;
            zeroth.push(w);
            first.push(s);
        }
        Self { zeroth, first }
    }

    /// `S² / W` for the bins `start..=end`; 0 for an empty class.
    fn class_variance(&self, start: usize, end: usize) -> f64 {
        let (w, s) = if start == 0 {
            (self.zeroth[end], self.first[end])
        } else {
            (
                self.zeroth[end] - self.zeroth[start - 1],
                self.first[end] - self.first[start - 1],
            )
        };
        if w > 0.0 {
            s * s / w
        } else {
            0.0
        }
    }

    fn between_class_variance(&self, indices: &[usize]) -> f64 {
        let nbins = self.zeroth.len();
        let mut var = self.class_variance(0, indices[0]);
        for pair in indices.windows(2) {
            var += self.class_variance(pair[0] + 1, pair[1]);
        }
        var + self.class_variance(indices[indices.len() - 1] + 1, nbins - 1)
    }
}

struct Search<'a> {
    moments: &'a Moments,
    nbins: usize,
    current: Vec<usize>,
    best: Vec<usize>,
    best_var: f64,
}

impl Search<'_> {
    fn visit(&mut self, kind: usize, start: usize) {
        let count = self.current.len();
        if kind == count {
            let var = self.moments.between_class_variance(&self.current);
            if var > self.best_var {
                self.best_var = var;
                self.best.copy_from_slice(&self.current);
            }
            return;
        }
        for idx in start..(self.nbins - count + kind) {
            self.current[kind] = idx;
            self.visit(kind + 1, idx + 1);
        }
    }
}

/// Compute `classes - 1` thresholds for a grayscale image.
///
/// Fails with `DegenerateHistogram` when the image holds fewer distinct
/// intensities than `classes` (constant and empty images included).
///
/// The search visits `C(nbins - 1, classes - 1)` tuples, so cost grows quickly
/// past [`MAX_CLASSES`] on a full 8-bit range.
pub fn multiotsu_thresholds(gray: ImageU8<'_>, classes: usize) -> Result<Vec<u8>> {
    if classes < 2 {
        return Err(PipelineError::Config(format!(
            "multi-Otsu needs at least 2 classes, got {classes}"
        )));
    }

    let mut counts = [0u64; 256];
    gray.for_each_pixel(|v| counts[usize::from(v)] += 1);
    let distinct = counts.iter().filter(|&&c| c > 0).count();
    if distinct < classes {
        return Err(PipelineError::DegenerateHistogram { distinct, classes });
    }

    // distinct >= 2 here, so both ends exist.
    let min = counts.iter().position(|&c| c > 0).unwrap_or(0);
    let max = counts.iter().rposition(|&c| c > 0).unwrap_or(255);
    let hist = &counts[min..=max];
    let total = gray.len() as u64;
    let moments = Moments::new(hist, min, total);

    let count = classes - 1;
    let mut search = Search {
        moments: &moments,
        nbins: hist.len(),
        current: vec![0; count],
        best: vec![0; count],
        best_var: f64::NEG_INFINITY,
    };
    search.visit(0, 0);

    let thresholds: Vec<u8> = search.best.iter().map(|&idx| (min + idx) as u8).collect();
    debug!(
        "multiotsu classes={} range=[{}, {}] thresholds={:?} var={:.4}",
        classes, min, max, thresholds, search.best_var
    );
    Ok(thresholds)
}

/// Digitise a value against ascending thresholds.
#[inline]
pub(crate) fn digitize(value: u8, thresholds: &[u8]) -> u8 {
    thresholds.iter().filter(|&&t| value >= t).count() as u8
}

/// Segment a grayscale image into `classes` intensity classes.
pub fn multiotsu_labels(gray: ImageU8<'_>, classes: usize) -> Result<LabelImage> {
    let thresholds = multiotsu_thresholds(gray, classes)?;
    Ok(labels_from_thresholds(gray, &thresholds, classes))
}

pub(crate) fn labels_from_thresholds(
    gray: ImageU8<'_>,
    thresholds: &[u8],
    classes: usize,
) -> LabelImage {
    let mut labels = Vec::with_capacity(gray.len());
    gray.for_each_pixel(|v| labels.push(digitize(v, thresholds)));
    LabelImage::new(gray.w, gray.h, classes as u8, labels)
}
