//! Tick marks and snap-to-tick quantization
//!
//! Ticks are evenly spaced in position space. Under an exponential curve the
//! tick values bunch up near `min`, which is what gives the low end its
//! finer control.

use serde::Serialize;

use super::{Mapper, ValueMapper};
use crate::spec::ControlSpec;

/// A single tick mark
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    /// Position along the control in percent (0..=100)
    pub position: f64,
    /// Domain value at that position
    pub value: f64,
}

/// Ordered tick marks covering `min..=max`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickModel {
    ticks: Vec<Tick>,
}

impl TickModel {
    /// Generate the ticks for a spec (empty when the spec has no tick count)
    pub fn generate(spec: &ControlSpec) -> Self {
        let Some(count) = spec.tick_count() else {
            return Self::default();
        };
        let mapper = ValueMapper::for_spec(spec);
        let last = count.saturating_sub(1).max(1) as f64;

        let ticks = (0..count)
            .map(|i| {
                let t = i as f64 / last;
                // Endpoints are exact, not whatever the curve rounds to
                let value = if i == 0 {
                    spec.min()
                } else if i + 1 == count {
                    spec.max()
                } else {
                    mapper.from_normalized(t)
                };
                Tick {
                    position: t * 100.0,
                    value,
                }
            })
            .collect();

        Self { ticks }
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter()
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// The tick whose value is nearest to `value`
    ///
    /// Distance is measured in value space. An exact midpoint resolves to
    /// the tick with the lower value.
    pub fn nearest(&self, value: f64) -> Option<&Tick> {
        let mut best: Option<&Tick> = None;
        let mut best_dist = f64::INFINITY;

        // Ticks ascend in value, so a strict comparison keeps the lower
        // tick on ties.
        for tick in &self.ticks {
            let dist = (value - tick.value).abs();
            if dist < best_dist {
                best_dist = dist;
                best = Some(tick);
            }
        }
        best
    }

    /// Snap a raw value to the nearest tick value (identity without ticks)
    pub fn snap(&self, value: f64) -> f64 {
        self.nearest(value).map_or(value, |tick| tick.value)
    }
}
