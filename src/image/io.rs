//! I/O helpers for colour/grayscale images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned RGB buffer.
//! - `save_gray_u8`: write an owned 8-bit gray buffer to disk.
//! - `save_rgb_u8`: write an owned RGB buffer to disk.
//! - `write_json_file` / `read_json_file`: pretty JSON to and from disk.
use super::{GrayImageU8, RgbImageU8};
use crate::{PipelineError, Result};
use image::{DynamicImage, GrayImage, RgbImage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as 8-bit RGB.
///
/// Images that do not decode to exactly three channels (grayscale, RGBA, ...)
/// are rejected with `InvalidImage`.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageU8> {
    let img = image::open(path).map_err(|e| PipelineError::codec(path, e))?;
    let channels = usize::from(img.color().channel_count());
    if channels != 3 {
        return Err(PipelineError::InvalidImage(format!(
            "{} has {channels} channels, expected 3",
            path.display()
        )));
    }
    let rgb = img.into_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    RgbImageU8::from_interleaved(width, height, 3, rgb.as_raw())
}

/// Save an 8-bit grayscale buffer; the format follows the file extension.
pub fn save_gray_u8(buffer: &GrayImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| PipelineError::InvalidImage("Failed to create gray image buffer".into()))?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| PipelineError::codec(path, e))
}

/// Save an RGB buffer; the format follows the file extension.
pub fn save_rgb_u8(buffer: &RgbImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image = RgbImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.as_interleaved().to_vec(),
    )
    .ok_or_else(|| PipelineError::InvalidImage("Failed to create RGB image buffer".into()))?;
    DynamicImage::ImageRgb8(image)
        .save(path)
        .map_err(|e| PipelineError::codec(path, e))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| PipelineError::json(path, e))?;
    fs::write(path, json).map_err(|e| PipelineError::io(path, e))
}

/// Read and deserialize a JSON document.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
    serde_json::from_str(&data).map_err(|e| PipelineError::json(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;
        }
    }
    Ok(())
}
