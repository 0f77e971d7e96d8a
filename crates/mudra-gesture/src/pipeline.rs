use crate::arbiter::select_best;
use crate::dispatch::ActionDispatcher;
use crate::error::GestureError;
use crate::stabilizer::GestureStabilizer;
use crate::traits::{Controller, GestureClassifier, HandDetector};
use crate::types::{Classification, ConfirmedGesture};
use mudra_base::Tensor;
use mudra_camera::Camera;
use mudra_vision::{VisionError, crop_normalized, hand_region};
use tokio::sync::watch;

/// The per-frame decision pipeline.
///
/// Owns the stabilizer state for its whole lifetime and drives one frame at
/// a time through detection, region extraction, classification,
/// arbitration, stabilization, and dispatch. Processing is synchronous per
/// frame: the classifier call blocks the loop, and the next frame is not
/// acquired until the current one has been fully handled.
pub struct GesturePipeline<D, C, K> {
    detector: D,
    classifier: C,
    stabilizer: GestureStabilizer,
    dispatcher: ActionDispatcher<K>,
}

impl<D, C, K> GesturePipeline<D, C, K>
where
    D: HandDetector,
    C: GestureClassifier,
    K: Controller,
{
    pub fn new(detector: D, classifier: C, dispatcher: ActionDispatcher<K>) -> Self {
        Self {
            detector,
            classifier,
            stabilizer: GestureStabilizer::new(),
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> &ActionDispatcher<K> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut ActionDispatcher<K> {
        &mut self.dispatcher
    }

    /// Process one frame end to end.
    ///
    /// Returns the confirmed gesture, if this frame produced one, so the
    /// caller can render it. Hands whose region collapses to zero area are
    /// skipped for this frame; "no hand detected" is an ordinary outcome,
    /// not an error.
    pub fn process_frame(
        &mut self,
        frame: &Tensor<u8>,
    ) -> Result<Option<ConfirmedGesture>, GestureError> {
        if frame.shape.len() != 3 || frame.shape[2] != 3 {
            return Err(GestureError::Vision(VisionError::Shape(format!(
                "expected HWC RGB frame, got shape {:?}",
                frame.shape
            ))));
        }
        let height = frame.shape[0] as u32;
        let width = frame.shape[1] as u32;

        let hands = self.detector.detect(frame)?;

        let mut classifications = Vec::with_capacity(hands.len());
        for landmarks in &hands {
            let region = hand_region(landmarks, width, height);
            let Some(crop) = crop_normalized(frame, &region)? else {
                continue;
            };
            let probabilities = self.classifier.classify(&crop)?;
            classifications.push(Classification::from_probabilities(&probabilities));
        }

        let confirmed = self.stabilizer.observe(select_best(&classifications));
        if let Some(event) = &confirmed {
            self.dispatcher.dispatch(event);
        }
        Ok(confirmed)
    }

    /// Drive the pipeline from a camera until stopped.
    ///
    /// The stop signal is checked at the top of every iteration, before the
    /// next frame is acquired; no partial frame processing resumes across
    /// the cancellation boundary. A receive error means the source has
    /// stopped producing frames and ends the loop in order rather than
    /// failing.
    pub async fn run(
        &mut self,
        camera: &mut impl Camera,
        stop: &watch::Receiver<bool>,
    ) -> Result<(), GestureError> {
        log::info!("gesture pipeline running");
        loop {
            if *stop.borrow() {
                log::info!("stop requested, shutting down pipeline");
                return Ok(());
            }

            let frame = match camera.recv().await {
                Ok(frame) => frame,
                Err(error) => {
                    log::info!("frame source ended: {}", error);
                    return Ok(());
                }
            };

            self.process_frame(&frame)?;
        }
    }
}
