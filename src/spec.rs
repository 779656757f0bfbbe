//! Control configuration
//!
//! A `ControlSpec` is the immutable description of one control: value range,
//! step grid, response curve, ticks, safe zone and geometry. Specs are only
//! produced by `ControlSpecBuilder::build`, so every spec that reaches the
//! gesture pipeline has a non-empty range and a positive step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mapping::{SafeZone, StepGrid};

/// Default sweep of a rotary control in degrees
pub const DEFAULT_ARC_SPAN: f64 = 270.0;

/// Default exponent of the exponential response curve
pub const DEFAULT_EXPONENT: f64 = 2.5;

/// Most tick marks a control may show
pub const MAX_TICK_COUNT: usize = 1001;

/// Configuration errors, raised when a control is constructed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("bounds must be finite (min {min}, max {max})")]
    NonFiniteBounds { min: f64, max: f64 },

    #[error("min ({min}) must be less than max ({max})")]
    EmptyRange { min: f64, max: f64 },

    #[error("step must be a positive number, got {0}")]
    InvalidStep(f64),

    #[error("tick count must be at least 2, got {0}")]
    TooFewTicks(usize),

    #[error("tick count must be at most {max}, got {0}", max = MAX_TICK_COUNT)]
    TooManyTicks(usize),

    #[error("snapping to ticks requires a tick count")]
    SnapWithoutTicks,

    #[error("safe zone {min}..={max} is inverted")]
    InvertedSafeZone { min: f64, max: f64 },

    #[error("safe zone bound {0} lies outside the control range")]
    SafeZoneOutOfRange(f64),

    #[error("exponent must be greater than 1, got {0}")]
    InvalidExponent(f64),

    #[error("arc span must be within (0, 360] degrees, got {0}")]
    InvalidArcSpan(f64),

    #[error("initial value must be finite, got {0}")]
    NonFiniteValue(f64),

    #[error("initial value {value} lies outside {min}..={max}")]
    InitialValueOutOfRange { value: f64, min: f64, max: f64 },

    #[error("initial value {value} is not a multiple of step {step} from min")]
    InitialValueOffGrid { value: f64, step: f64 },
}

/// Response curve between gesture position and value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseCurve {
    /// Equal gesture distance, equal value distance
    Linear,
    /// `value = min + t^exponent * (max - min)`, fine resolution near `min`
    Exponential { exponent: f64 },
}

/// Primary axis of a linear track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left to right increases the value
    Horizontal,
    /// Bottom to top increases the value
    Vertical,
}

/// How pointer coordinates are turned into a gesture position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Linear(Orientation),
    /// Angle around the control's center, `arc_span` degrees wide with the
    /// dead zone centred at the bottom
    Rotary { arc_span: f64 },
}

/// Immutable per-control configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSpec {
    min: f64,
    max: f64,
    step: f64,
    curve: ResponseCurve,
    tick_count: Option<usize>,
    snap_to_ticks: bool,
    safe_zone: Option<SafeZone>,
    geometry: Geometry,
    initial_value: f64,
}

impl ControlSpec {
    /// Start building a spec for the range `min..=max`
    pub fn builder(min: f64, max: f64) -> ControlSpecBuilder {
        ControlSpecBuilder::new(min, max)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the value range, always positive
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn curve(&self) -> ResponseCurve {
        self.curve
    }

    pub fn tick_count(&self) -> Option<usize> {
        self.tick_count
    }

    pub fn snap_to_ticks(&self) -> bool {
        self.snap_to_ticks
    }

    pub fn safe_zone(&self) -> Option<SafeZone> {
        self.safe_zone
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Value a control starts with and returns to on reset
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }
}

/// Validating builder for `ControlSpec`
#[derive(Debug, Clone)]
pub struct ControlSpecBuilder {
    min: f64,
    max: f64,
    step: f64,
    curve: ResponseCurve,
    tick_count: Option<usize>,
    snap_to_ticks: bool,
    safe_min: Option<f64>,
    safe_max: Option<f64>,
    geometry: Geometry,
    initial_value: Option<f64>,
}

impl ControlSpecBuilder {
    /// Create a builder with a unit step, linear curve and horizontal track
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: 1.0,
            curve: ResponseCurve::Linear,
            tick_count: None,
            snap_to_ticks: false,
            safe_min: None,
            safe_max: None,
            geometry: Geometry::Linear(Orientation::Horizontal),
            initial_value: None,
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Toggle the exponential curve with the default exponent
    pub fn exponential(mut self, enabled: bool) -> Self {
        self.curve = if enabled {
            ResponseCurve::Exponential { exponent: DEFAULT_EXPONENT }
        } else {
            ResponseCurve::Linear
        };
        self
    }

    /// Use the exponential curve with a custom exponent
    pub fn exponent(mut self, exponent: f64) -> Self {
        self.curve = ResponseCurve::Exponential { exponent };
        self
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = Some(count);
        self
    }

    pub fn without_ticks(mut self) -> Self {
        self.tick_count = None;
        self.snap_to_ticks = false;
        self
    }

    pub fn snap_to_ticks(mut self, snap: bool) -> Self {
        self.snap_to_ticks = snap;
        self
    }

    /// Advisory sub-range `safe_min..=safe_max`
    pub fn safe_zone(mut self, safe_min: f64, safe_max: f64) -> Self {
        self.safe_min = Some(safe_min);
        self.safe_max = Some(safe_max);
        self
    }

    /// Lower bound of the safe zone, leaving the upper side open
    pub fn safe_min(mut self, safe_min: f64) -> Self {
        self.safe_min = Some(safe_min);
        self
    }

    /// Upper bound of the safe zone, leaving the lower side open
    pub fn safe_max(mut self, safe_max: f64) -> Self {
        self.safe_max = Some(safe_max);
        self
    }

    pub fn linear(mut self, orientation: Orientation) -> Self {
        self.geometry = Geometry::Linear(orientation);
        self
    }

    pub fn rotary(mut self, arc_span: f64) -> Self {
        self.geometry = Geometry::Rotary { arc_span };
        self
    }

    pub fn initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Validate and produce the spec
    pub fn build(self) -> Result<ControlSpec, SpecError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SpecError::NonFiniteBounds { min: self.min, max: self.max });
        }
        if self.min >= self.max {
            return Err(SpecError::EmptyRange { min: self.min, max: self.max });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SpecError::InvalidStep(self.step));
        }
        if let ResponseCurve::Exponential { exponent } = self.curve {
            if !exponent.is_finite() || exponent <= 1.0 {
                return Err(SpecError::InvalidExponent(exponent));
            }
        }
        match self.tick_count {
            Some(count) if count < 2 => return Err(SpecError::TooFewTicks(count)),
            Some(count) if count > MAX_TICK_COUNT => return Err(SpecError::TooManyTicks(count)),
            None if self.snap_to_ticks => return Err(SpecError::SnapWithoutTicks),
            _ => {}
        }
        if let Geometry::Rotary { arc_span } = self.geometry {
            if !arc_span.is_finite() || arc_span <= 0.0 || arc_span > 360.0 {
                return Err(SpecError::InvalidArcSpan(arc_span));
            }
        }

        let safe_zone = self.resolve_safe_zone()?;

        let initial_value = self.initial_value.unwrap_or(self.min);
        if !initial_value.is_finite() {
            return Err(SpecError::NonFiniteValue(initial_value));
        }
        // Reset commits this value, so it must lie on the drag grid
        if initial_value < self.min || initial_value > self.max {
            return Err(SpecError::InitialValueOutOfRange {
                value: initial_value,
                min: self.min,
                max: self.max,
            });
        }
        if !StepGrid::new(self.min, self.step, self.max).is_aligned(initial_value) {
            return Err(SpecError::InitialValueOffGrid { value: initial_value, step: self.step });
        }

        Ok(ControlSpec {
            min: self.min,
            max: self.max,
            step: self.step,
            curve: self.curve,
            tick_count: self.tick_count,
            snap_to_ticks: self.snap_to_ticks,
            safe_zone,
            geometry: self.geometry,
            initial_value,
        })
    }

    fn resolve_safe_zone(&self) -> Result<Option<SafeZone>, SpecError> {
        for bound in [self.safe_min, self.safe_max].into_iter().flatten() {
            if !bound.is_finite() || bound < self.min || bound > self.max {
                return Err(SpecError::SafeZoneOutOfRange(bound));
            }
        }

        let zone = match (self.safe_min, self.safe_max) {
            (Some(min), Some(max)) if min > max => {
                return Err(SpecError::InvertedSafeZone { min, max })
            }
            (Some(min), Some(max)) => SafeZone::new(min, max),
            (Some(min), None) => SafeZone::at_least(min),
            (None, Some(max)) => SafeZone::at_most(max),
            (None, None) => return Ok(None),
        };
        Ok(Some(zone))
    }
}
