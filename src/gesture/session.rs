//! Drag sessions
//!
//! A `GestureSession` lives from pointer-down to pointer-up on one control.
//! It captures the control's geometry once, when the drag starts, and turns
//! every later pointer position into a quantized, clamped value.

use std::time::Duration;

use super::geometry::{dial_angle, track_fraction, Point, Rect};
use crate::feedback::Direction;
use crate::mapping::{ArcMapper, Mapper, StepGrid, TickModel, ValueMapper};
use crate::spec::{ControlSpec, Geometry, Orientation};

/// A pointer event in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u32,
    pub position: Point,
    /// Event timestamp, used for feedback throttling
    pub time: Duration,
}

impl PointerEvent {
    pub fn new(pointer_id: u32, position: Point, time: Duration) -> Self {
        Self {
            pointer_id,
            position,
            time,
        }
    }
}

/// Geometry reference captured at drag start
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Centre of a dial and its arc
    Center { center: Point, arc: ArcMapper },
    /// Bounding box of a linear track
    Track { bounds: Rect, orientation: Orientation },
}

impl Anchor {
    /// Capture the reference for a spec's geometry from the control's bounds
    pub fn capture(geometry: Geometry, bounds: Rect) -> Self {
        match geometry {
            Geometry::Rotary { arc_span } => Self::Center {
                center: bounds.center(),
                arc: ArcMapper::new(arc_span),
            },
            Geometry::Linear(orientation) => Self::Track { bounds, orientation },
        }
    }

    /// Normalized gesture position for a pointer, `None` when degenerate
    pub fn fraction(&self, position: Point) -> Option<f64> {
        match self {
            Self::Center { center, arc } => {
                dial_angle(*center, position).map(|angle| arc.fraction_for(angle))
            }
            Self::Track { bounds, orientation } => track_fraction(*bounds, position, *orientation),
        }
    }
}

/// A committed change produced by a gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChange {
    pub value: f64,
    pub direction: Direction,
}

/// Ephemeral state of one drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub pointer_id: u32,
    pub anchor: Anchor,
    /// Last value handed to the host, for change detection and direction
    pub last_value: f64,
}

/// One active drag on one control
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    state: DragState,
    mapper: ValueMapper,
    grid: StepGrid,
    ticks: Option<TickModel>,
}

impl GestureSession {
    /// Begin a drag, capturing the geometry reference from `bounds`
    ///
    /// `current` is the control's committed value, which the first emitted
    /// value is compared against.
    pub fn begin(pointer_id: u32, bounds: Rect, spec: &ControlSpec, current: f64) -> Self {
        let ticks = spec.snap_to_ticks().then(|| TickModel::generate(spec));

        Self {
            state: DragState {
                pointer_id,
                anchor: Anchor::capture(spec.geometry(), bounds),
                last_value: current,
            },
            mapper: ValueMapper::for_spec(spec),
            grid: StepGrid::for_spec(spec),
            ticks,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn pointer_id(&self) -> u32 {
        self.state.pointer_id
    }

    pub fn last_value(&self) -> f64 {
        self.state.last_value
    }

    /// Whether this session was started by the event's pointer
    pub fn owns(&self, event: &PointerEvent) -> bool {
        event.pointer_id == self.state.pointer_id
    }

    /// Quantized value for a pointer position
    ///
    /// Runs position -> normalized -> value -> snap -> step -> clamp. Returns
    /// `None` if the position has no usable geometry (e.g. a dial's centre).
    pub fn resolve(&self, position: Point) -> Option<f64> {
        let t = self.state.anchor.fraction(position)?;
        let raw = self.mapper.from_normalized(t);
        let snapped = match &self.ticks {
            Some(ticks) => ticks.snap(raw),
            None => raw,
        };
        Some(self.grid.quantize(snapped))
    }

    /// Resolve a position and record it if it differs from the last value
    pub fn track(&mut self, position: Point) -> Option<ValueChange> {
        let value = self.resolve(position)?;
        if value == self.state.last_value {
            return None;
        }

        let direction = Direction::between(self.state.last_value, value);
        self.state.last_value = value;
        Some(ValueChange { value, direction })
    }
}
