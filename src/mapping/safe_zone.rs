//! Safe-zone classification
//!
//! A safe zone is an advisory sub-range used to colour a control and its
//! ticks. It never blocks a value.

use serde::Serialize;

use super::Tick;
use crate::spec::ControlSpec;

/// Where a value sits relative to the safe zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneState {
    /// Inside the zone, or no zone configured
    Safe,
    /// Below the zone's lower bound
    Below,
    /// Above the zone's upper bound
    Above,
}

impl ZoneState {
    pub fn is_safe(self) -> bool {
        self == Self::Safe
    }
}

/// Inclusive range `min..=max`; open sides use infinities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeZone {
    pub min: f64,
    pub max: f64,
}

impl SafeZone {
    /// Create a zone covering `min..=max`
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Zone with only a lower bound
    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Zone with only an upper bound
    pub fn at_most(max: f64) -> Self {
        Self::new(f64::NEG_INFINITY, max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn classify(&self, value: f64) -> ZoneState {
        if value < self.min {
            ZoneState::Below
        } else if value > self.max {
            ZoneState::Above
        } else {
            ZoneState::Safe
        }
    }
}

/// Classify a value against the spec's safe zone
pub fn classify(value: f64, spec: &ControlSpec) -> ZoneState {
    spec.safe_zone()
        .map_or(ZoneState::Safe, |zone| zone.classify(value))
}

/// Whether a value lies in the safe zone; always true without one
pub fn is_safe(value: f64, spec: &ControlSpec) -> bool {
    classify(value, spec).is_safe()
}

/// Whether a tick mark lies in the safe zone
pub fn tick_is_safe(tick: &Tick, spec: &ControlSpec) -> bool {
    is_safe(tick.value, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::TickModel;

    #[test]
    fn test_safe_zone_scenario() {
        let spec = ControlSpec::builder(0.0, 50.0)
            .safe_zone(5.0, 20.0)
            .build()
            .unwrap();

        assert!(!is_safe(3.0, &spec));
        assert!(is_safe(12.0, &spec));
        assert!(!is_safe(25.0, &spec));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let zone = SafeZone::new(5.0, 20.0);

        assert!(zone.contains(5.0));
        assert!(zone.contains(20.0));
        assert_eq!(zone.classify(4.999), ZoneState::Below);
        assert_eq!(zone.classify(20.001), ZoneState::Above);
    }

    #[test]
    fn test_no_zone_is_always_safe() {
        let spec = ControlSpec::builder(0.0, 50.0).build().unwrap();

        assert!(is_safe(-1000.0, &spec));
        assert!(is_safe(1000.0, &spec));
    }

    #[test]
    fn test_one_sided_zones() {
        assert!(SafeZone::at_least(10.0).contains(1e9));
        assert!(!SafeZone::at_least(10.0).contains(9.0));
        assert!(SafeZone::at_most(10.0).contains(-1e9));
        assert_eq!(SafeZone::at_most(10.0).classify(11.0), ZoneState::Above);
    }

    #[test]
    fn test_tick_coloring() {
        let spec = ControlSpec::builder(0.0, 50.0)
            .ticks(11)
            .safe_zone(5.0, 20.0)
            .build()
            .unwrap();
        let model = TickModel::generate(&spec);

        let safe: Vec<f64> = model
            .iter()
            .filter(|t| tick_is_safe(t, &spec))
            .map(|t| t.value)
            .collect();
        assert_eq!(safe, vec![5.0, 10.0, 15.0, 20.0]);
    }
}
