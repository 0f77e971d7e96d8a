use crate::CameraError;
use mudra_base::Tensor;

/// Async camera trait for frame capture.
///
/// Implementations provide a `recv` method that asynchronously returns
/// decoded frames as `Tensor<u8>` in HWC layout `[height, width, 3]` (RGB).
///
/// A `recv` error means the source has stopped producing frames. The
/// realtime loop treats it as end-of-stream and shuts down in order; it is
/// not retried.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Receive the next frame from the camera.
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError>;
}
