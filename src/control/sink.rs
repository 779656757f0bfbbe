//! Output side of a control

use serde::Serialize;

use super::ControlKind;
use crate::feedback::{Direction, FeedbackEvent};

/// Receives a control's committed values and feedback signals
pub trait ControlSink {
    /// A new value was committed
    fn on_change(&mut self, value: f64);

    /// A feedback signal for the audio/haptic layer
    fn on_feedback(&mut self, _event: FeedbackEvent) {}
}

/// Anything a control sent to its sink
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Emission {
    Change {
        value: f64,
    },
    Feedback {
        direction: Direction,
        kind: ControlKind,
        time_ms: u64,
    },
}

/// A sink that keeps everything it receives, in order
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub emissions: Vec<Emission>,
}

impl Recorder {
    /// Committed values, in order
    pub fn changes(&self) -> Vec<f64> {
        self.emissions
            .iter()
            .filter_map(|e| match e {
                Emission::Change { value } => Some(*value),
                Emission::Feedback { .. } => None,
            })
            .collect()
    }

    /// Feedback events, in order
    pub fn feedback(&self) -> Vec<FeedbackEvent> {
        self.emissions
            .iter()
            .filter_map(|e| match e {
                Emission::Feedback { direction, kind, time_ms } => Some(FeedbackEvent {
                    direction: *direction,
                    kind: *kind,
                    time: std::time::Duration::from_millis(*time_ms),
                }),
                Emission::Change { .. } => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.emissions.clear();
    }
}

impl ControlSink for Recorder {
    fn on_change(&mut self, value: f64) {
        self.emissions.push(Emission::Change { value });
    }

    fn on_feedback(&mut self, event: FeedbackEvent) {
        self.emissions.push(Emission::Feedback {
            direction: event.direction,
            kind: event.kind,
            time_ms: event.time.as_millis() as u64,
        });
    }
}

impl<F: FnMut(f64)> ControlSink for F {
    fn on_change(&mut self, value: f64) {
        self(value);
    }
}
