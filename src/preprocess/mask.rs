//! Mask compositing and mask visualisation.
use crate::image::{GrayImageU8, ImageView, LabelImage, RgbImageU8};
use crate::{PipelineError, Result};

/// Keep the pixels labelled `selected`, zero the rest across all channels.
pub fn composite(rgb: &RgbImageU8, mask: &LabelImage, selected: u8) -> Result<RgbImageU8> {
    if rgb.dims() != mask.dims() {
        return Err(PipelineError::shape_mismatch(rgb.dims(), mask.dims()));
    }
    let data = rgb
        .pixels()
        .iter()
        .zip(mask.labels())
        .map(|(&px, &label)| if label == selected { px } else { [0, 0, 0] })
        .collect();
    Ok(RgbImageU8::new(rgb.width(), rgb.height(), data))
}

/// [`composite`] selecting the brightest class of the mask.
pub fn composite_highest(rgb: &RgbImageU8, mask: &LabelImage) -> Result<RgbImageU8> {
    composite(rgb, mask, mask.highest_class())
}

/// Stretch the observed label range over `[0, 255]` for display and storage.
///
/// The lowest label present maps to 0 and the highest to 255. A mask holding a
/// single label is all black.
pub fn mask_preview(mask: &LabelImage) -> GrayImageU8 {
    let lo = mask.labels().iter().copied().min().unwrap_or(0);
    let hi = mask.labels().iter().copied().max().unwrap_or(0);
    let span = u32::from(hi - lo);
    let data = mask
        .labels()
        .iter()
        .map(|&l| {
            if span == 0 {
                0
            } else {
                ((u32::from(l - lo) * 255 + span / 2) / span) as u8
            }
        })
        .collect();
    GrayImageU8::new(mask.width(), mask.height(), data)
}
