use crate::error::DatasetError;
use crate::sample::{Dataset, Sample};
use mudra_base::{Rect, Vec2};
use mudra_gesture::GestureClass;
use mudra_vision::{crop_normalized, decode_rgb};
use rand::seq::SliceRandom;
use std::fs;
use std::path::{Path, PathBuf};

/// Share of samples that lands in the training subset.
pub const TRAIN_FRACTION: f64 = 0.8;

/// Assembles labeled samples from a directory of gesture images.
///
/// Expected layout: one subdirectory per gesture class under the root,
/// named exactly like the class label (`thumbs_up`, `peace`, ...). Files
/// that fail to read or decode are logged and excluded; they never abort a
/// build. A class directory that is missing contributes zero samples.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    root: PathBuf,
}

impl DatasetBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load, label, shuffle and split every image under the root.
    ///
    /// Per-class counts go to the build log; the split is not stratified,
    /// so thin classes show up there rather than silently vanishing from
    /// the validation subset.
    ///
    /// Returns `DatasetError::InsufficientData` when no image anywhere
    /// under the root yielded a usable sample.
    pub fn build(&self) -> Result<Dataset, DatasetError> {
        let mut samples = Vec::new();

        for class in GestureClass::ALL {
            let dir = self.root.join(class.name());
            let count = load_class(&dir, class, &mut samples);
            log::info!("{}: {} samples", class.name(), count);
        }

        if samples.is_empty() {
            return Err(DatasetError::InsufficientData);
        }

        Ok(split(samples))
    }
}

/// Load every readable image in `dir` as a sample of `class`.
///
/// Returns how many samples were added.
fn load_class(dir: &Path, class: GestureClass, samples: &mut Vec<Sample>) -> usize {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            log::warn!("skipping {}: {}", dir.display(), error);
            return 0;
        }
    };

    let mut count = 0;
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(error) => {
                log::warn!("unreadable entry in {}: {}", dir.display(), error);
                continue;
            }
        };
        if path.is_dir() {
            continue;
        }
        if let Some(sample) = load_sample(&path, class) {
            samples.push(sample);
            count += 1;
        }
    }
    count
}

/// Decode and normalize one image file. Any failure excludes the file.
fn load_sample(path: &Path, class: GestureClass) -> Option<Sample> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            log::warn!("excluding {}: {}", path.display(), error);
            return None;
        }
    };

    let frame = match decode_rgb(&bytes) {
        Ok(frame) => frame,
        Err(error) => {
            log::warn!("excluding {}: {}", path.display(), error);
            return None;
        }
    };

    let full = Rect::from_min_max(
        Vec2::new(0u32, 0),
        Vec2::new(frame.shape[1] as u32, frame.shape[0] as u32),
    );
    let image = match crop_normalized(&frame, &full) {
        Ok(Some(image)) => image,
        Ok(None) => {
            log::warn!("excluding {}: empty image", path.display());
            return None;
        }
        Err(error) => {
            log::warn!("excluding {}: {}", path.display(), error);
            return None;
        }
    };

    Some(Sample {
        image,
        label: class.one_hot(),
    })
}

/// Shuffle the samples and split at `floor(TRAIN_FRACTION * N)`.
///
/// Every sample lands in exactly one subset and the subset sizes sum to the
/// input count. The permutation draws from the thread RNG, so file order
/// never leaks into the partition.
pub fn split(mut samples: Vec<Sample>) -> Dataset {
    let mut rng = rand::thread_rng();
    samples.shuffle(&mut rng);

    let train_len = (samples.len() as f64 * TRAIN_FRACTION).floor() as usize;
    let validation = samples.split_off(train_len);

    Dataset {
        train: samples,
        validation,
    }
}
