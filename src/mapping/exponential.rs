//! Exponential mapper implementation
//!
//! Maps gesture positions with a power curve so the low end of the range
//! gets most of the travel. Use cases:
//! - Trade size and capital allocation (fine control on small amounts)
//! - Any control where you want fine adjustment at low values

use super::Mapper;
use crate::spec::DEFAULT_EXPONENT;

/// Power-curve mapper
///
/// Uses the formula for normalized position t in [0, 1]:
///   value = min + t^k * (max - min)
///
/// and its inverse t = ((value - min) / (max - min))^(1/k), where k > 1
/// controls how strongly resolution is biased towards `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialMapper {
    min: f64,
    max: f64,
    exponent: f64,
}

impl ExponentialMapper {
    /// Create a new exponential mapper with the default exponent
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            exponent: DEFAULT_EXPONENT,
        }
    }

    /// Create with a custom exponent
    ///
    /// Typical values: 2.0 (mild) to 4.0 (steep)
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent.max(1.0);
        self
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl Mapper for ExponentialMapper {
    fn name(&self) -> &str {
        "exponential"
    }

    fn to_normalized(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            return 0.0;
        }
        let linear = ((value - self.min) / range).clamp(0.0, 1.0);
        linear.powf(1.0 / self.exponent)
    }

    fn from_normalized(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.max;
        }
        self.min + t.powf(self.exponent) * (self.max - self.min)
    }
}
