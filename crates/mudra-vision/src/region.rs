use crate::LandmarkSet;
use mudra_base::{Rect, Vec2};

/// Pixels added to each side of the tight landmark bounding box, so the crop
/// keeps some hand context around the outermost joints.
pub const REGION_PADDING: u32 = 20;

/// Derive the pixel region of interest for one hand.
///
/// Each normalized landmark maps to pixel coordinates by rounding
/// (`x = round(lx * width)`, `y = round(ly * height)`). The tight bounding
/// box over all points is expanded by [`REGION_PADDING`] on every side and
/// each edge is clamped to the frame, so the result always satisfies
/// `0 <= min <= max <= (width, height)` on both axes.
///
/// An empty landmark set yields a zero-area region, which downstream crop
/// code skips.
pub fn hand_region(landmarks: &LandmarkSet, width: u32, height: u32) -> Rect<u32> {
    if landmarks.is_empty() {
        return Rect::zero();
    }

    let mut min_x = i64::MAX;
    let mut min_y = i64::MAX;
    let mut max_x = i64::MIN;
    let mut max_y = i64::MIN;

    for point in landmarks.points() {
        let px = (point.x * width as f32).round() as i64;
        let py = (point.y * height as f32).round() as i64;
        min_x = min_x.min(px);
        min_y = min_y.min(py);
        max_x = max_x.max(px);
        max_y = max_y.max(py);
    }

    let pad = REGION_PADDING as i64;
    let x_min = (min_x - pad).clamp(0, width as i64) as u32;
    let y_min = (min_y - pad).clamp(0, height as i64) as u32;
    let x_max = (max_x + pad).clamp(0, width as i64) as u32;
    let y_max = (max_y + pad).clamp(0, height as i64) as u32;

    Rect::from_min_max(Vec2::new(x_min, y_min), Vec2::new(x_max, y_max))
}
