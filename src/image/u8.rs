//! 8-bit single-channel images: a borrowed strided view and an owned buffer.
use super::traits::ImageView;

/// Borrowed view over 8-bit grayscale samples.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Copy the view into a tightly packed owned buffer.
    pub fn to_owned_image(&self) -> GrayImageU8 {
        let mut data = Vec::with_capacity(self.w * self.h);
        for row in self.rows() {
            data.extend_from_slice(row);
        }
        GrayImageU8 {
            width: self.w,
            height: self.h,
            data,
        }
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

/// Owned, tightly packed 8-bit grayscale buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Wrap raw row-major bytes. Fails when `data.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> crate::Result<Self> {
        if data.len() != width * height {
            return Err(crate::PipelineError::InvalidImage(format!(
                "expected {} gray samples for {width}x{height}, got {}",
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

    pub(crate) fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Image filled with a single intensity.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl ImageView for GrayImageU8 {
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
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_view_copies_only_visible_pixels() {
        // 2x2 image stored with a stride of 3 (one padding byte per row).
        let raw = [1u8, 2, 99, 3, 4, 99];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &raw,
        };
        assert!(view.as_slice().is_none());
        let owned = view.to_owned_image();
        assert_eq!(owned.data(), &[1, 2, 3, 4]);
        assert_eq!(owned.as_view().get(1, 1), 4);
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(GrayImageU8::from_raw(3, 3, vec![0; 8]).is_err());
        assert!(GrayImageU8::from_raw(3, 3, vec![0; 9]).is_ok());
    }
}
