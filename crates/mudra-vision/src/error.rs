use mudra_base::TensorError;
use std::fmt;

#[derive(Debug)]
pub enum VisionError {
    Decode(String),
    Shape(String),
    Tensor(TensorError),
}

impl fmt::Display for VisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisionError::Decode(msg) => write!(f, "decode error: {msg}"),
            VisionError::Shape(msg) => write!(f, "shape error: {msg}"),
            VisionError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for VisionError {}

impl From<image::ImageError> for VisionError {
    fn from(err: image::ImageError) -> Self {
        VisionError::Decode(err.to_string())
    }
}

impl From<TensorError> for VisionError {
    fn from(err: TensorError) -> Self {
        VisionError::Tensor(err)
    }
}
