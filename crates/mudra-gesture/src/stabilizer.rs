use crate::gesture::GestureClass;
use crate::types::{Classification, ConfirmedGesture};

/// Consecutive frames a label must hold before it is confirmed.
pub const STABLE_THRESHOLD: u32 = 3;

/// Debounces the per-frame label stream into confirmed gestures.
///
/// Raw per-frame classification is noisy: hand jitter and partial occlusion
/// produce single-frame misreads. Requiring the same label on
/// [`STABLE_THRESHOLD`] consecutive frames suppresses those, at the cost of
/// the same number of frames in detection latency.
#[derive(Debug)]
pub struct GestureStabilizer {
    last: Option<GestureClass>,
    count: u32,
}

impl GestureStabilizer {
    pub fn new() -> Self {
        Self {
            last: None,
            count: 0,
        }
    }

    /// Feed one frame's arbitration result, get back the confirmed gesture
    /// if the debounce window is satisfied.
    ///
    /// A changed label (including the change to "no hand") restarts the
    /// streak at 1. Once the streak reaches the threshold the event emits on
    /// every following frame the label holds, so consumers must be
    /// idempotent or rate-limit themselves.
    pub fn observe(&mut self, seen: Option<Classification>) -> Option<ConfirmedGesture> {
        let label = seen.map(|c| c.label);
        if label == self.last {
            self.count = self.count.saturating_add(1);
        } else {
            self.last = label;
            self.count = 1;
        }

        match (self.last, seen) {
            (Some(label), Some(current)) if self.count >= STABLE_THRESHOLD => {
                Some(ConfirmedGesture {
                    label,
                    confidence: current.confidence,
                })
            }
            _ => None,
        }
    }

    /// Frames the current label has held.
    pub fn streak(&self) -> u32 {
        self.count
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.count = 0;
    }
}

impl Default for GestureStabilizer {
    fn default() -> Self {
        Self::new()
    }
}
