//! Tactile - interaction engine for dials, sliders and stepped adjusters
//!
//! Turns pointer gestures and typed text into bounded, step-aligned values,
//! with optional exponential response, tick snapping, advisory safe zones and
//! rate-limited feedback events. Rendering, audio and persistence stay with
//! the host.

pub mod config;
pub mod control;
pub mod edit;
pub mod feedback;
pub mod gesture;
pub mod mapping;
pub mod replay;
pub mod spec;

pub use control::{Control, ControlKind, ControlSink, EditOutcome, Interaction, Recorder};
pub use spec::{ControlSpec, SpecError};
