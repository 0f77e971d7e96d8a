//! Offline dataset assembly for classifier training.
//!
//! Scans a directory of labeled gesture images (one subdirectory per class),
//! normalizes every image to the classifier's input format, pairs it with a
//! one-hot label, and produces a shuffled train/validation split. Runs
//! independently of the realtime pipeline; the resulting `Dataset` feeds the
//! external classifier's training step and is discarded afterwards.

pub mod builder;
pub mod error;
pub mod sample;

pub use builder::{DatasetBuilder, TRAIN_FRACTION, split};
pub use error::DatasetError;
pub use sample::{Dataset, Sample};
