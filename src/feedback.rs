//! Rate-limited feedback events
//!
//! Signals "the value moved up/down" to an external audio or haptic layer.
//! Each control owns its own dispatcher, so two controls dragged at once
//! never throttle each other.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::control::ControlKind;

/// Minimum spacing between two feedback events from one control
pub const FEEDBACK_WINDOW: Duration = Duration::from_millis(30);

/// Direction of a value change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `previous` to `next`
    pub fn between(previous: f64, next: f64) -> Self {
        if next > previous {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A feedback signal for the audio/haptic layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackEvent {
    pub direction: Direction,
    pub kind: ControlKind,
    /// Timestamp of the input event that caused it
    pub time: Duration,
}

/// Per-control feedback throttle
///
/// Calls within the window of the last emitted event are dropped, not
/// queued.
#[derive(Debug, Clone)]
pub struct FeedbackDispatcher {
    kind: ControlKind,
    window: Duration,
    last_emitted: Option<Duration>,
}

impl FeedbackDispatcher {
    /// Create a dispatcher with the default 30ms window
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            window: FEEDBACK_WINDOW,
            last_emitted: None,
        }
    }

    /// Set the throttle window
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Emit a feedback event at `now` unless one was emitted within the window
    pub fn maybe_emit(&mut self, direction: Direction, now: Duration) -> Option<FeedbackEvent> {
        if let Some(last) = self.last_emitted {
            // A clock running backwards counts as "too soon"
            if now.saturating_sub(last) < self.window {
                trace!(kind = self.kind.as_str(), ?direction, "feedback dropped");
                return None;
            }
        }

        self.last_emitted = Some(now);
        Some(FeedbackEvent {
            direction,
            kind: self.kind,
            time: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(1.0, 2.0), Direction::Up);
        assert_eq!(Direction::between(2.0, 1.0), Direction::Down);
    }

    #[test]
    fn test_first_event_always_emits() {
        let mut dispatcher = FeedbackDispatcher::new(ControlKind::Dial);
        let event = dispatcher.maybe_emit(Direction::Up, ms(0)).unwrap();

        assert_eq!(event.direction, Direction::Up);
        assert_eq!(event.kind, ControlKind::Dial);
    }

    #[test]
    fn test_window_drops_excess() {
        let mut dispatcher = FeedbackDispatcher::new(ControlKind::HorizontalSlider);

        assert!(dispatcher.maybe_emit(Direction::Up, ms(0)).is_some());
        assert!(dispatcher.maybe_emit(Direction::Up, ms(10)).is_none());
        assert!(dispatcher.maybe_emit(Direction::Down, ms(29)).is_none());
        assert!(dispatcher.maybe_emit(Direction::Down, ms(30)).is_some());
        assert!(dispatcher.maybe_emit(Direction::Down, ms(45)).is_none());
        assert!(dispatcher.maybe_emit(Direction::Down, ms(60)).is_some());
    }

    #[test]
    fn test_burst_is_bounded() {
        // 100 calls spread over 10ms
        let mut dispatcher = FeedbackDispatcher::new(ControlKind::Dial);
        let emitted = (0..100)
            .filter_map(|i| dispatcher.maybe_emit(Direction::Up, Duration::from_micros(i * 100)))
            .count();

        // ceil(10 / 30) + 1
        assert!(emitted <= 2, "Expected at most 2 emissions, got {}", emitted);
        assert_eq!(emitted, 1);
    }

    #[test]
    fn test_dispatchers_are_independent() {
        let mut a = FeedbackDispatcher::new(ControlKind::Dial);
        let mut b = FeedbackDispatcher::new(ControlKind::VerticalSlider);

        assert!(a.maybe_emit(Direction::Up, ms(5)).is_some());
        assert!(b.maybe_emit(Direction::Up, ms(6)).is_some());
        assert!(a.maybe_emit(Direction::Up, ms(7)).is_none());
    }

    #[test]
    fn test_custom_window() {
        let mut dispatcher = FeedbackDispatcher::new(ControlKind::Dial).with_window(ms(100));

        assert!(dispatcher.maybe_emit(Direction::Up, ms(0)).is_some());
        assert!(dispatcher.maybe_emit(Direction::Up, ms(50)).is_none());
        assert!(dispatcher.maybe_emit(Direction::Up, ms(100)).is_some());
    }

    #[test]
    fn test_clock_going_backwards_is_dropped() {
        let mut dispatcher = FeedbackDispatcher::new(ControlKind::Dial);

        assert!(dispatcher.maybe_emit(Direction::Up, ms(100)).is_some());
        assert!(dispatcher.maybe_emit(Direction::Up, ms(10)).is_none());
    }
}
