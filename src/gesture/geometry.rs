//! Screen-space geometry for pointer gestures
//!
//! Coordinates follow the screen convention: x grows to the right, y grows
//! downwards.

use serde::{Deserialize, Serialize};

use crate::spec::Orientation;

/// Pointers closer than this to a dial's centre have no usable angle
pub const DEAD_CENTER_RADIUS: f64 = 0.5;

/// A point in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Compass bearing of `point` seen from `center`, in degrees
///
/// 0 is straight up and the bearing grows clockwise, so 90 is to the right
/// and 180 straight down. Returns `None` when the point is on the centre.
pub fn bearing(center: Point, point: Point) -> Option<f64> {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    if dx.hypot(dy) < DEAD_CENTER_RADIUS {
        return None;
    }
    // Screen y points down, so "up" is -dy
    Some(dx.atan2(-dy).to_degrees().rem_euclid(360.0))
}

/// Angle of `point` in the dial frame (0 at the bottom, clockwise)
pub fn dial_angle(center: Point, point: Point) -> Option<f64> {
    bearing(center, point).map(|b| (b + 180.0).rem_euclid(360.0))
}

/// Fractional offset of `point` along a track, clamped to `[0, 1]`
///
/// Vertical tracks are inverted so that moving up increases the fraction.
/// Returns `None` for a track with no extent along its axis.
pub fn track_fraction(bounds: Rect, point: Point, orientation: Orientation) -> Option<f64> {
    let (offset, length) = match orientation {
        Orientation::Horizontal => (point.x - bounds.left(), bounds.width),
        Orientation::Vertical => (bounds.bottom() - point.y, bounds.height),
    };
    if !(length > 0.0) || !offset.is_finite() {
        return None;
    }
    Some((offset / length).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bearing_quadrants() {
        let c = Point::new(100.0, 100.0);

        assert!(close(bearing(c, Point::new(100.0, 50.0)).unwrap(), 0.0));
        assert!(close(bearing(c, Point::new(150.0, 100.0)).unwrap(), 90.0));
        assert!(close(bearing(c, Point::new(100.0, 150.0)).unwrap(), 180.0));
        assert!(close(bearing(c, Point::new(50.0, 100.0)).unwrap(), 270.0));
        assert!(close(bearing(c, Point::new(150.0, 50.0)).unwrap(), 45.0));
    }

    #[test]
    fn test_dial_angle_frame() {
        let c = Point::new(0.0, 0.0);

        // Straight down is the middle of the dead zone
        assert!(close(dial_angle(c, Point::new(0.0, 10.0)).unwrap(), 0.0));
        // Left is a quarter turn clockwise from the bottom
        assert!(close(dial_angle(c, Point::new(-10.0, 0.0)).unwrap(), 90.0));
        assert!(close(dial_angle(c, Point::new(0.0, -10.0)).unwrap(), 180.0));
        assert!(close(dial_angle(c, Point::new(10.0, 0.0)).unwrap(), 270.0));
    }

    #[test]
    fn test_dead_center_has_no_angle() {
        let c = Point::new(10.0, 10.0);
        assert!(bearing(c, Point::new(10.2, 10.1)).is_none());
        assert!(dial_angle(c, c).is_none());
    }

    #[test]
    fn test_track_fraction_horizontal() {
        let track = Rect::new(100.0, 0.0, 200.0, 20.0);

        assert_eq!(track_fraction(track, Point::new(150.0, 10.0), Orientation::Horizontal), Some(0.25));
        assert_eq!(track_fraction(track, Point::new(50.0, 10.0), Orientation::Horizontal), Some(0.0));
        assert_eq!(track_fraction(track, Point::new(400.0, 10.0), Orientation::Horizontal), Some(1.0));
    }

    #[test]
    fn test_track_fraction_vertical_is_inverted() {
        let track = Rect::new(0.0, 0.0, 20.0, 100.0);

        assert_eq!(track_fraction(track, Point::new(10.0, 100.0), Orientation::Vertical), Some(0.0));
        assert_eq!(track_fraction(track, Point::new(10.0, 25.0), Orientation::Vertical), Some(0.75));
        assert_eq!(track_fraction(track, Point::new(10.0, -50.0), Orientation::Vertical), Some(1.0));
    }

    #[test]
    fn test_track_fraction_degenerate() {
        let flat = Rect::new(0.0, 0.0, 0.0, 10.0);
        assert!(track_fraction(flat, Point::new(0.0, 0.0), Orientation::Horizontal).is_none());
    }
}
