//! Image containers and I/O.
//!
//! - [`RgbImageU8`]: owned colour image, always three channels.
//! - [`GrayImageU8`] / [`ImageU8`]: owned grayscale buffer and its strided view.
//! - [`LabelImage`]: class indices emitted by the segmenter.
pub mod io;
pub mod label;
pub mod rgb;
pub mod traits;
pub mod u8;

pub use self::label::LabelImage;
pub use self::rgb::RgbImageU8;
pub use self::traits::{ImageView, Rows};
pub use self::u8::{GrayImageU8, ImageU8};
