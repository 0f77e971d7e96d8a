use crate::dispatch::Action;
use crate::error::GestureError;
use crate::gesture::GESTURE_CLASS_COUNT;
use mudra_base::Tensor;
use mudra_vision::LandmarkSet;

/// Hand-landmark detector.
///
/// One color frame in (HWC `[height, width, 3]`), zero or more landmark
/// sets out — one per tracked hand. The landmark count per hand is fixed by
/// the detector's anatomical model; the pipeline does not depend on it.
pub trait HandDetector {
    fn detect(&self, frame: &Tensor<u8>) -> Result<Vec<LandmarkSet>, GestureError>;
}

/// Trained gesture classifier.
///
/// One normalized crop in (HWC `[224, 224, 3]`, channels in [0, 1]), a
/// probability vector aligned to `GestureClass` encoding order out. Called
/// synchronously once per crop.
pub trait GestureClassifier {
    fn classify(&self, crop: &Tensor<f32>) -> Result<[f32; GESTURE_CLASS_COUNT], GestureError>;
}

/// Controller back-end executing dispatched actions (volume, cursor,
/// brightness, ...).
///
/// Confirmed gestures re-emit every frame while the gesture is held, so
/// implementations must be idempotent or rate-limit themselves.
pub trait Controller {
    fn execute(&mut self, action: Action);
}
