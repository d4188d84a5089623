//! Class-index images produced by the threshold segmenter.
use super::traits::ImageView;

/// Per-pixel class indices in `0..classes`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelImage {
    width: usize,
    height: usize,
    classes: u8,
    labels: Vec<u8>,
}

impl LabelImage {
    /// Wrap raw labels. Fails on a length mismatch or a label `>= classes`.
    pub fn from_raw(
        width: usize,
        height: usize,
        classes: u8,
        labels: Vec<u8>,
    ) -> crate::Result<Self> {
        if labels.len() != width * height {
            return Err(crate::PipelineError::InvalidImage(format!(
                "expected {} labels for {width}x{height}, got {}",
                width * height,
                labels.len()
            )));
        }
        if let Some(&bad) = labels.iter().find(|&&l| l >= classes) {
            return Err(crate::PipelineError::InvalidImage(format!(
                "label {bad} outside of {classes} classes"
            )));
        }
        Ok(Self {
            width,
            height,
            classes,
            labels,
        })
    }

    pub(crate) fn new(width: usize, height: usize, classes: u8, labels: Vec<u8>) -> Self {
        debug_assert_eq!(labels.len(), width * height);
        Self {
            width,
            height,
            classes,
            labels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of classes the labels were drawn from.
    pub fn classes(&self) -> u8 {
        self.classes
    }

    /// Index of the brightest class.
    pub fn highest_class(&self) -> u8 {
        self.classes.saturating_sub(1)
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Pixel count per class.
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; usize::from(self.classes)];
        for &l in &self.labels {
            counts[usize::from(l)] += 1;
        }
        counts
    }
}

impl ImageView for LabelImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.labels[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.labels)
    }
}
