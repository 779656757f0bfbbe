//! Step quantization
//!
//! Every committed value goes through a `StepGrid`, which rounds to the
//! nearest grid point and clamps in index space. Clamping the index rather
//! than the value keeps the result on the grid even when `max` itself is not.

use crate::spec::ControlSpec;

/// Largest number of decimals used when cleaning up float noise
const MAX_DECIMALS: usize = 10;

/// A grid of values `origin + n * step` for `n` in `0..=max_index`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepGrid {
    origin: f64,
    step: f64,
    upper: f64,
}

impl StepGrid {
    /// Create a grid from `origin` with spacing `step`, bounded above by
    /// `upper` (use `f64::INFINITY` for an open grid)
    pub fn new(origin: f64, step: f64, upper: f64) -> Self {
        Self { origin, step, upper }
    }

    /// The drag grid of a spec: `min..=max` in `step` increments
    pub fn for_spec(spec: &ControlSpec) -> Self {
        Self::new(spec.min(), spec.step(), spec.max())
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Highest grid point not above `upper`
    pub fn top(&self) -> f64 {
        self.value_at(self.max_index())
    }

    /// Round to the nearest grid point within bounds
    pub fn quantize(&self, value: f64) -> f64 {
        let index = ((value - self.origin) / self.step).round();
        self.value_at(index.clamp(0.0, self.max_index()))
    }

    /// Whether `value` lies on the grid (within float tolerance)
    pub fn is_aligned(&self, value: f64) -> bool {
        let index = (value - self.origin) / self.step;
        (index - index.round()).abs() < 1e-6
    }

    fn max_index(&self) -> f64 {
        if self.upper.is_finite() {
            ((self.upper - self.origin) / self.step + 1e-9).floor().max(0.0)
        } else {
            f64::INFINITY
        }
    }

    fn value_at(&self, index: f64) -> f64 {
        let raw = self.origin + index * self.step;
        let decimals = step_decimals(self.step).max(step_decimals(self.origin));
        round_to_decimals(raw, decimals)
    }
}

/// Number of decimals needed to write `step` exactly (capped)
pub fn step_decimals(step: f64) -> usize {
    let mut scaled = step.abs();
    for decimals in 0..MAX_DECIMALS {
        if (scaled - scaled.round()).abs() < 1e-9 * scaled.max(1.0) {
            return decimals;
        }
        scaled *= 10.0;
    }
    MAX_DECIMALS
}

fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_rounds_to_step() {
        let grid = StepGrid::new(0.0, 5.0, 100.0);

        assert_eq!(grid.quantize(12.4), 10.0);
        assert_eq!(grid.quantize(12.5), 15.0);
        assert_eq!(grid.quantize(99.0), 100.0);
    }

    #[test]
    fn test_quantize_relative_to_origin() {
        let grid = StepGrid::new(40.0, 10.0, 100.0);

        assert_eq!(grid.quantize(44.0), 40.0);
        assert_eq!(grid.quantize(76.0), 80.0);
    }

    #[test]
    fn test_quantize_clamps_on_grid() {
        // max is not a grid point: 0, 3, 6, 9
        let grid = StepGrid::new(0.0, 3.0, 10.0);

        assert_eq!(grid.quantize(10.0), 9.0);
        assert_eq!(grid.quantize(500.0), 9.0);
        assert_eq!(grid.quantize(-4.0), 0.0);
        assert_eq!(grid.top(), 9.0);
    }

    #[test]
    fn test_quantize_open_top() {
        let grid = StepGrid::new(0.0, 1.0, f64::INFINITY);
        assert_eq!(grid.quantize(1234.4), 1234.0);
    }

    #[test]
    fn test_quantize_removes_float_noise() {
        let grid = StepGrid::new(0.0, 0.1, 1.0);

        assert_eq!(grid.quantize(0.3), 0.3);
        assert_eq!(grid.quantize(0.7000001), 0.7);
        assert!(grid.is_aligned(0.3));
        assert!(!grid.is_aligned(0.35));
    }

    #[test]
    fn test_step_decimals() {
        assert_eq!(step_decimals(1.0), 0);
        assert_eq!(step_decimals(10.0), 0);
        assert_eq!(step_decimals(0.5), 1);
        assert_eq!(step_decimals(0.01), 2);
        assert_eq!(step_decimals(0.25), 2);
    }
}
