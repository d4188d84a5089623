//! Colour-moment descriptors in the RGB, YUV and LAB colour spaces.
//!
//! Each colour space yields nine scalars: mean, population standard deviation
//! and Fisher skewness of its three channels, ordered `mean×3, std×3, skew×3`.

pub mod moments;
pub mod space;

pub use moments::{color_moments, ChannelMoments};
pub use space::{ColorSpace, LAB_WHITE_D65, XYZ_FROM_RGB, YUV_FROM_RGB};
