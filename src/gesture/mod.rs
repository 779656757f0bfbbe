//! Pointer gestures
//!
//! Turns screen-space pointer input into control values.

mod geometry;
mod session;

pub use geometry::{bearing, dial_angle, track_fraction, Point, Rect, DEAD_CENTER_RADIUS};
pub use session::{Anchor, DragState, GestureSession, PointerEvent, ValueChange};
