use mudra_vision::VisionError;
use std::fmt;

#[derive(Debug)]
pub enum GestureError {
    Detector(String),
    Classifier(String),
    UnknownProfile(String),
    Vision(VisionError),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::Detector(msg) => write!(f, "detector error: {msg}"),
            GestureError::Classifier(msg) => write!(f, "classifier error: {msg}"),
            GestureError::UnknownProfile(name) => write!(f, "unknown profile: {name}"),
            GestureError::Vision(err) => write!(f, "vision error: {err}"),
        }
    }
}

impl std::error::Error for GestureError {}

impl From<VisionError> for GestureError {
    fn from(err: VisionError) -> Self {
        GestureError::Vision(err)
    }
}
