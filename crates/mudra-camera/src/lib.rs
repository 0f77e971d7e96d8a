//! Camera capture abstraction for the mudra pipeline.
//!
//! This crate provides the `Camera` trait the realtime loop consumes. A
//! backend delivers decoded RGB frames as `Tensor<u8>` in HWC layout; which
//! device API produces them is the backend's concern, not the pipeline's.

pub mod config;
pub mod error;
pub mod traits;

pub use config::CameraConfig;
pub use error::CameraError;
pub use traits::Camera;
