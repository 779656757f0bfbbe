//! Rotary arc mapping
//!
//! Dial angles are measured in degrees from the bottom of the dial (6 o'clock),
//! increasing clockwise on screen. An arc of `span` degrees starts at
//! `(360 - span) / 2`, which centres the dead zone on the bottom.

/// Maps normalized positions onto a dial's arc and back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcMapper {
    span: f64,
}

impl ArcMapper {
    /// Create an arc mapper for a sweep of `span` degrees
    pub fn new(span: f64) -> Self {
        Self {
            span: span.clamp(f64::EPSILON, 360.0),
        }
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    /// Angle of the minimum value
    pub fn start_angle(&self) -> f64 {
        (360.0 - self.span) / 2.0
    }

    /// Angle of the maximum value
    pub fn end_angle(&self) -> f64 {
        self.start_angle() + self.span
    }

    /// Angle for a normalized position
    pub fn angle_for(&self, t: f64) -> f64 {
        self.start_angle() + t.clamp(0.0, 1.0) * self.span
    }

    /// Normalized position for a dial angle, after clamping it onto the arc
    pub fn fraction_for(&self, angle: f64) -> f64 {
        let angle = self.clamp_to_arc(angle);
        ((angle - self.start_angle()) / self.span).clamp(0.0, 1.0)
    }

    /// Clamp an arbitrary angle onto the arc
    ///
    /// Angles in the dead zone go to whichever end of the arc is angularly
    /// nearer; the exact middle of the dead zone goes to the start.
    pub fn clamp_to_arc(&self, angle: f64) -> f64 {
        let angle = angle.rem_euclid(360.0);
        let start = self.start_angle();
        let end = self.end_angle();

        if angle >= start && angle <= end {
            return angle;
        }

        let to_start = (start - angle).rem_euclid(360.0);
        let to_end = (angle - end).rem_euclid(360.0);
        if to_start <= to_end {
            start
        } else {
            end
        }
    }
}
