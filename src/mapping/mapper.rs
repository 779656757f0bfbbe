//! Mapper trait and the per-spec mapper

use super::{ExponentialMapper, LinearMapper};
use crate::spec::{ControlSpec, ResponseCurve};

/// Conversion between a value domain and the normalized gesture domain
pub trait Mapper: Send + Sync {
    /// Get the name of this mapper
    fn name(&self) -> &str;

    /// Map a value to a gesture position in `[0, 1]`
    ///
    /// Values outside the domain clamp to the nearest end, so a typed value
    /// above `max` displays as a full control.
    fn to_normalized(&self, value: f64) -> f64;

    /// Map a gesture position back to a value (`t` is clamped to `[0, 1]`)
    fn from_normalized(&self, t: f64) -> f64;
}

/// The mapper selected by a spec's response curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueMapper {
    Linear(LinearMapper),
    Exponential(ExponentialMapper),
}

impl ValueMapper {
    /// Build the mapper for a spec
    pub fn for_spec(spec: &ControlSpec) -> Self {
        match spec.curve() {
            ResponseCurve::Linear => Self::Linear(LinearMapper::new(spec.min(), spec.max())),
            ResponseCurve::Exponential { exponent } => Self::Exponential(
                ExponentialMapper::new(spec.min(), spec.max()).with_exponent(exponent),
            ),
        }
    }
}

impl Mapper for ValueMapper {
    fn name(&self) -> &str {
        match self {
            Self::Linear(m) => m.name(),
            Self::Exponential(m) => m.name(),
        }
    }

    fn to_normalized(&self, value: f64) -> f64 {
        match self {
            Self::Linear(m) => m.to_normalized(value),
            Self::Exponential(m) => m.to_normalized(value),
        }
    }

    fn from_normalized(&self, t: f64) -> f64 {
        match self {
            Self::Linear(m) => m.from_normalized(t),
            Self::Exponential(m) => m.from_normalized(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapper_follows_curve() {
        let linear = ControlSpec::builder(0.0, 100.0).build().unwrap();
        let exp = ControlSpec::builder(0.0, 100.0).exponential(true).build().unwrap();

        assert_eq!(ValueMapper::for_spec(&linear).name(), "linear");
        assert_eq!(ValueMapper::for_spec(&exp).name(), "exponential");
    }

    #[test]
    fn test_round_trip_linear() {
        let spec = ControlSpec::builder(-20.0, 40.0).build().unwrap();
        let mapper = ValueMapper::for_spec(&spec);

        for i in 0..=600 {
            let value = -20.0 + i as f64 * 0.1;
            let back = mapper.from_normalized(mapper.to_normalized(value));
            assert!((back - value).abs() < 1e-9, "Expected {}, got {}", value, back);
        }
    }

    #[test]
    fn test_round_trip_exponential() {
        let spec = ControlSpec::builder(0.0, 1000.0).exponent(2.5).build().unwrap();
        let mapper = ValueMapper::for_spec(&spec);

        for i in 0..=1000 {
            let value = i as f64;
            let back = mapper.from_normalized(mapper.to_normalized(value));
            assert!((back - value).abs() < 1e-9, "Expected {}, got {}", value, back);
        }
    }
}
