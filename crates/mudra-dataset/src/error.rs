use std::fmt;

#[derive(Debug, PartialEq)]
pub enum DatasetError {
    /// Assembly found no usable samples; collect data before training.
    InsufficientData,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::InsufficientData => {
                write!(f, "no usable training samples found")
            }
        }
    }
}

impl std::error::Error for DatasetError {}
