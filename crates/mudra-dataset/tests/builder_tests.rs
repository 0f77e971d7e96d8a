use mudra_base::Tensor;
use mudra_dataset::{DatasetBuilder, DatasetError, Sample, split};
use mudra_gesture::{GESTURE_CLASS_COUNT, GestureClass};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("mudra-dataset-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).unwrap();
    root
}

fn write_png(dir: &Path, name: &str, value: u8) {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([value, value, value]));
    img.save(dir.join(name)).unwrap();
}

fn populate_class(root: &Path, class: GestureClass, count: usize) {
    let dir = root.join(class.name());
    fs::create_dir_all(&dir).unwrap();
    for i in 0..count {
        write_png(&dir, &format!("{:03}.png", i), (i * 20) as u8);
    }
}

// --- Split invariants ---

#[test]
fn test_build_splits_80_20() {
    let root = fixture_root("split");
    populate_class(&root, GestureClass::ThumbsUp, 5);
    populate_class(&root, GestureClass::Peace, 5);

    let dataset = DatasetBuilder::new(&root).build().unwrap();

    assert_eq!(dataset.len(), 10);
    assert_eq!(dataset.train.len(), 8);
    assert_eq!(dataset.validation.len(), 2);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_split_sizes_for_various_counts() {
    for n in [1usize, 2, 4, 5, 10, 16, 23] {
        let samples: Vec<Sample> = (0..n)
            .map(|_| Sample {
                image: Tensor::zeros(vec![2, 2, 3]).unwrap(),
                label: GestureClass::Fist.one_hot(),
            })
            .collect();

        let dataset = split(samples);
        let expected_train = (n as f64 * 0.8).floor() as usize;

        assert_eq!(dataset.train.len(), expected_train, "n = {}", n);
        assert_eq!(dataset.validation.len(), n - expected_train, "n = {}", n);
    }
}

#[test]
fn test_every_sample_lands_in_exactly_one_subset() {
    // Tag each sample through an otherwise unused label slot so the
    // partition can be checked as a permutation
    let n = 25usize;
    let samples: Vec<Sample> = (0..n)
        .map(|i| {
            let mut label = [0.0; GESTURE_CLASS_COUNT];
            label[0] = i as f32;
            Sample {
                image: Tensor::zeros(vec![2, 2, 3]).unwrap(),
                label,
            }
        })
        .collect();

    let dataset = split(samples);

    // Seeing every tag exactly once across both subsets means no sample
    // was dropped, duplicated, or placed in both
    let mut tags: Vec<usize> = dataset
        .train
        .iter()
        .chain(dataset.validation.iter())
        .map(|s| s.label[0] as usize)
        .collect();
    tags.sort_unstable();

    assert_eq!(tags, (0..n).collect::<Vec<_>>());
}

// --- Labels ---

#[test]
fn test_labels_match_source_directory() {
    let root = fixture_root("labels");
    populate_class(&root, GestureClass::ThumbsUp, 3);
    populate_class(&root, GestureClass::OpenPalm, 2);

    let dataset = DatasetBuilder::new(&root).build().unwrap();

    let mut per_class = [0usize; GESTURE_CLASS_COUNT];
    for sample in dataset.train.iter().chain(dataset.validation.iter()) {
        let ones: Vec<usize> = sample
            .label
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(ones.len(), 1);
        assert!(sample.label.iter().all(|&v| v == 0.0 || v == 1.0));
        per_class[ones[0]] += 1;
    }

    assert_eq!(per_class[GestureClass::ThumbsUp.index()], 3);
    assert_eq!(per_class[GestureClass::OpenPalm.index()], 2);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_images_are_normalized() {
    let root = fixture_root("normalized");
    populate_class(&root, GestureClass::Fist, 1);

    let dataset = DatasetBuilder::new(&root).build().unwrap();
    let sample = dataset
        .train
        .first()
        .or(dataset.validation.first())
        .unwrap();

    assert_eq!(sample.image.shape, vec![224, 224, 3]);
    assert!(sample.image.data.iter().all(|&v| (0.0..=1.0).contains(&v)));

    fs::remove_dir_all(&root).ok();
}

// --- Failure handling ---

#[test]
fn test_unreadable_file_is_excluded_not_fatal() {
    let root = fixture_root("unreadable");
    populate_class(&root, GestureClass::Peace, 4);
    fs::write(root.join("peace").join("corrupt.png"), b"not an image").unwrap();

    let dataset = DatasetBuilder::new(&root).build().unwrap();

    assert_eq!(dataset.len(), 4);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_missing_class_directories_are_tolerated() {
    let root = fixture_root("partial");
    // Only one of the six class directories exists
    populate_class(&root, GestureClass::Pointing, 2);

    let dataset = DatasetBuilder::new(&root).build().unwrap();
    assert_eq!(dataset.len(), 2);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_empty_root_is_insufficient_data() {
    let root = fixture_root("empty");

    let err = DatasetBuilder::new(&root).build().unwrap_err();
    assert_eq!(err, DatasetError::InsufficientData);

    fs::remove_dir_all(&root).ok();
}
