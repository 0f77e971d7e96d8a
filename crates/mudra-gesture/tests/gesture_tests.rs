use mudra_gesture::{Classification, GESTURE_CLASS_COUNT, GestureClass, ModelSource};
use std::fs;

// --- Encoding order ---

#[test]
fn test_class_count() {
    assert_eq!(GestureClass::ALL.len(), GESTURE_CLASS_COUNT);
}

#[test]
fn test_fixed_encoding_order() {
    for (position, class) in GestureClass::ALL.iter().enumerate() {
        assert_eq!(class.index(), position);
    }
}

#[test]
fn test_label_names() {
    let names: Vec<&str> = GestureClass::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec![
            "thumbs_up",
            "thumbs_down",
            "peace",
            "fist",
            "open_palm",
            "pointing"
        ]
    );
}

#[test]
fn test_try_from_round_trip() {
    for class in GestureClass::ALL {
        assert_eq!(GestureClass::try_from(class.index()).unwrap(), class);
    }
    assert!(GestureClass::try_from(6).is_err());
}

#[test]
fn test_display_matches_name() {
    assert_eq!(format!("{}", GestureClass::OpenPalm), "open_palm");
}

// --- One-hot encoding ---

#[test]
fn test_one_hot_has_single_one_at_class_index() {
    for class in GestureClass::ALL {
        let label = class.one_hot();
        for (index, &value) in label.iter().enumerate() {
            if index == class.index() {
                assert_eq!(value, 1.0);
            } else {
                assert_eq!(value, 0.0);
            }
        }
        assert_eq!(label.iter().filter(|&&v| v == 1.0).count(), 1);
    }
}

// --- Probability collapse ---

#[test]
fn test_from_probabilities_picks_argmax() {
    let probabilities = [0.05, 0.1, 0.6, 0.1, 0.1, 0.05];
    let result = Classification::from_probabilities(&probabilities);
    assert_eq!(result.label, GestureClass::Peace);
    assert_eq!(result.confidence, 0.6);
}

#[test]
fn test_from_probabilities_tie_takes_earlier_class() {
    let probabilities = [0.1, 0.35, 0.1, 0.35, 0.05, 0.05];
    let result = Classification::from_probabilities(&probabilities);
    assert_eq!(result.label, GestureClass::ThumbsDown);
}

// --- Model source ---

#[test]
fn test_missing_artifact_means_fresh_model() {
    let path = std::env::temp_dir().join(format!("mudra-model-{}-missing.bin", std::process::id()));
    let _ = fs::remove_file(&path);

    let source = ModelSource::resolve(&path);
    assert!(!source.is_trained());
    assert_eq!(source.path(), path.as_path());
}

#[test]
fn test_existing_artifact_is_loaded() {
    let path = std::env::temp_dir().join(format!("mudra-model-{}-exists.bin", std::process::id()));
    fs::write(&path, b"weights").unwrap();

    let source = ModelSource::resolve(&path);
    assert!(source.is_trained());
    assert_eq!(source.path(), path.as_path());

    fs::remove_file(&path).ok();
}
