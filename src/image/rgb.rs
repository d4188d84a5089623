//! Owned 8-bit RGB image.
//!
//! Pixels are stored as `[u8; 3]`, so a value of this type always has exactly
//! three channels. Buffers with any other layout are rejected at construction
//! with [`PipelineError::InvalidImage`](crate::PipelineError::InvalidImage).
use super::traits::ImageView;
use crate::{PipelineError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl RgbImageU8 {
    /// Build from per-pixel triplets in row-major order.
    pub fn from_pixels(width: usize, height: usize, data: Vec<[u8; 3]>) -> Result<Self> {
        if data.len() != width * height {
            return Err(PipelineError::InvalidImage(format!(
                "expected {} pixels for {width}x{height}, got {}",
                width * height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from interleaved samples with an explicit channel count.
    ///
    /// Only `channels == 3` is accepted.
    pub fn from_interleaved(
        width: usize,
        height: usize,
        channels: usize,
        samples: &[u8],
    ) -> Result<Self> {
        if channels != 3 {
            return Err(PipelineError::InvalidImage(format!(
                "expected 3 colour channels, got {channels}"
            )));
        }
        if samples.len() != width * height * 3 {
            return Err(PipelineError::InvalidImage(format!(
                "expected {} samples for {width}x{height}x3, got {}",
                width * height * 3,
                samples.len()
            )));
        }
        let data = samples
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub(crate) fn new(width: usize, height: usize, data: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Image filled with a single colour.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            data: vec![rgb; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.width + x]
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.data
    }

    /// Samples flattened as `r, g, b, r, g, b, ...`.
    pub fn as_interleaved(&self) -> &[u8] {
        self.data.as_flattened()
    }

    /// Copy one channel (0 = R, 1 = G, 2 = B) into a plane of `f64`.
    pub fn channel_f64(&self, channel: usize) -> Vec<f64> {
        self.data.iter().map(|px| f64::from(px[channel])).collect()
    }
}

impl ImageView for RgbImageU8 {
    type Pixel = [u8; 3];

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
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[[u8; 3]]> {
        Some(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_requires_three_channels() {
        let samples = vec![0u8; 2 * 2 * 4];
        let err = RgbImageU8::from_interleaved(2, 2, 4, &samples).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidImage(_)));

        let err = RgbImageU8::from_interleaved(2, 2, 1, &samples[..4]).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidImage(_)));
    }

    #[test]
    fn interleaved_round_trips_samples() {
        let samples: Vec<u8> = (0..12).collect();
        let img = RgbImageU8::from_interleaved(2, 2, 3, &samples).unwrap();
        assert_eq!(img.get(1, 0), [3, 4, 5]);
        assert_eq!(img.get(0, 1), [6, 7, 8]);
        assert_eq!(img.as_interleaved(), samples.as_slice());
        assert_eq!(img.channel_f64(2), vec![2.0, 5.0, 8.0, 11.0]);
    }
}
