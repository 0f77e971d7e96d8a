use mudra_base::Tensor;
use mudra_gesture::GESTURE_CLASS_COUNT;

/// One labeled training image.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Normalized image, HWC `[224, 224, 3]`, channels in [0, 1].
    pub image: Tensor<f32>,
    /// One-hot label aligned to `GestureClass` encoding order.
    pub label: [f32; GESTURE_CLASS_COUNT],
}

/// A shuffled, split dataset ready for training.
///
/// The subsets are disjoint and their sizes sum to the number of assembled
/// samples. The partition is randomized per build and never persisted.
#[derive(Debug)]
pub struct Dataset {
    pub train: Vec<Sample>,
    pub validation: Vec<Sample>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.train.len() + self.validation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.validation.is_empty()
    }
}
