use crate::VisionError;
use mudra_base::{Rect, Tensor};

/// Side length of the classifier input crop.
pub const CROP_SIZE: usize = 224;

/// Crop a frame to a hand region and prepare it for classification.
///
/// `frame` must be HWC `[height, width, 3]` and the region must lie inside
/// it. The crop is resized to [`CROP_SIZE`]×[`CROP_SIZE`] with
/// nearest-neighbor interpolation and channels are rescaled from [0, 255] to
/// [0.0, 1.0].
///
/// Returns `Ok(None)` when the region has zero area, which happens when the
/// landmarks collapse to a point at a frame edge after clamping. Callers
/// treat that as "skip this hand this frame", not as an error.
pub fn crop_normalized(
    frame: &Tensor<u8>,
    region: &Rect<u32>,
) -> Result<Option<Tensor<f32>>, VisionError> {
    if frame.shape.len() != 3 || frame.shape[2] != 3 {
        return Err(VisionError::Shape(format!(
            "expected HWC RGB frame, got shape {:?}",
            frame.shape
        )));
    }
    let frame_h = frame.shape[0];
    let frame_w = frame.shape[1];

    let min = region.min();
    let max = region.max();
    if max.x as usize > frame_w || max.y as usize > frame_h {
        return Err(VisionError::Shape(format!(
            "region max ({}, {}) exceeds {}x{} frame",
            max.x, max.y, frame_w, frame_h
        )));
    }

    let crop_w = (max.x - min.x) as usize;
    let crop_h = (max.y - min.y) as usize;
    if crop_w == 0 || crop_h == 0 {
        return Ok(None);
    }

    // Nearest-neighbor resize straight out of the source frame
    let scale_x = CROP_SIZE as f32 / crop_w as f32;
    let scale_y = CROP_SIZE as f32 / crop_h as f32;

    let mut data = vec![0.0f32; CROP_SIZE * CROP_SIZE * 3];
    for out_y in 0..CROP_SIZE {
        let src_y = min.y as usize + ((out_y as f32 / scale_y).floor() as usize).min(crop_h - 1);
        for out_x in 0..CROP_SIZE {
            let src_x =
                min.x as usize + ((out_x as f32 / scale_x).floor() as usize).min(crop_w - 1);

            let src_idx = (src_y * frame_w + src_x) * 3;
            let dst_idx = (out_y * CROP_SIZE + out_x) * 3;
            for ch in 0..3 {
                data[dst_idx + ch] = frame.data[src_idx + ch] as f32 / 255.0;
            }
        }
    }

    let crop = Tensor::new(vec![CROP_SIZE, CROP_SIZE, 3], data)?;
    Ok(Some(crop))
}
