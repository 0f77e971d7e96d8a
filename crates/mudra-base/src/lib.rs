//! Foundation types for the mudra workspace.
//!
//! Provides the dense `Tensor<T>` used for frames and crops, small 2-D
//! geometry types for regions of interest, and logger implementations for
//! the `log` facade.

pub mod logging;
pub mod rect;
pub mod tensor;
pub mod vec2;

pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
pub use rect::Rect;
pub use tensor::{Tensor, TensorError};
pub use vec2::Vec2;

// Re-export log so downstream crates use the same facade version
pub use log;
