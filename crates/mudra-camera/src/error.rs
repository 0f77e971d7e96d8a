use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    Open(String),
    Stream(String),
    Disconnected,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Open(msg) => write!(f, "open error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Disconnected => write!(f, "camera disconnected"),
        }
    }
}

impl std::error::Error for CameraError {}
