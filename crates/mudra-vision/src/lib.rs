//! Image handling for the mudra pipeline.
//!
//! Decodes stored images into RGB tensors and turns hand-landmark sets into
//! normalized classifier crops. All image tensors use HWC layout:
//! `[height, width, channels]`.

pub mod crop;
pub mod error;
pub mod landmarks;
pub mod region;

pub use crop::{CROP_SIZE, crop_normalized};
pub use error::VisionError;
pub use landmarks::{HAND_LANDMARK_COUNT, Landmark, LandmarkSet};
pub use region::{REGION_PADDING, hand_region};

use mudra_base::Tensor;

/// Decode an image from raw bytes into an RGB tensor.
///
/// The format is auto-detected by the `image` crate and the pixels are
/// converted to 8-bit RGB regardless of the stored color type, since the
/// classifier contract is fixed-format. The result is HWC
/// `[height, width, 3]`.
///
/// # Errors
///
/// Returns `VisionError::Decode` if the data is invalid or the format is
/// unsupported.
pub fn decode_rgb(data: &[u8]) -> Result<Tensor<u8>, VisionError> {
    let img = image::load_from_memory(data)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let shape = vec![height as usize, width as usize, 3];
    Ok(Tensor::new(shape, rgb.into_raw())?)
}
