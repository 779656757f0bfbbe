//! Linear mapper implementation

use super::Mapper;

/// Linear interpolation between `min..=max` and `0..=1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMapper {
    min: f64,
    max: f64,
}

impl LinearMapper {
    /// Create a new linear mapper
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Mapper for LinearMapper {
    fn name(&self) -> &str {
        "linear"
    }

    fn to_normalized(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            return 0.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }

    fn from_normalized(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.max;
        }
        self.min + t * (self.max - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_mapper_basic() {
        let mapper = LinearMapper::new(0.0, 100.0);

        assert_eq!(mapper.to_normalized(0.0), 0.0);
        assert_eq!(mapper.to_normalized(50.0), 0.5);
        assert_eq!(mapper.to_normalized(100.0), 1.0);
        assert_eq!(mapper.from_normalized(0.25), 25.0);
    }

    #[test]
    fn test_linear_mapper_offset_range() {
        // Position limit 40..100
        let mapper = LinearMapper::new(40.0, 100.0);

        assert_eq!(mapper.to_normalized(70.0), 0.5);
        assert_eq!(mapper.from_normalized(0.0), 40.0);
        assert_eq!(mapper.from_normalized(1.0), 100.0);
    }

    #[test]
    fn test_linear_mapper_clamps_display() {
        let mapper = LinearMapper::new(0.0, 100.0);

        // Manually entered values beyond the range pin the display
        assert_eq!(mapper.to_normalized(150.0), 1.0);
        assert_eq!(mapper.to_normalized(-10.0), 0.0);
        assert_eq!(mapper.from_normalized(1.5), 100.0);
        assert_eq!(mapper.from_normalized(-0.5), 0.0);
    }

    #[test]
    fn test_linear_mapper_degenerate_range() {
        let mapper = LinearMapper::new(5.0, 5.0);
        assert_eq!(mapper.to_normalized(5.0), 0.0);
        assert_eq!(mapper.from_normalized(0.7), 5.0);
    }
}
