//! Presentation helpers
//!
//! Display clamps visually; the stored value is never touched here.

use super::{Control, ControlKind, Interaction};
use crate::mapping::{self, step_decimals, ArcMapper, Mapper, TickModel, ValueMapper, ZoneState};
use crate::spec::Geometry;

impl Control {
    /// Fill fraction for the value, clamped to `[0, 1]`
    pub fn display_fraction(&self) -> f64 {
        ValueMapper::for_spec(self.spec()).to_normalized(self.value())
    }

    /// Indicator angle for dials (0 at the bottom, clockwise)
    pub fn display_angle(&self) -> Option<f64> {
        match self.spec().geometry() {
            Geometry::Rotary { arc_span } => {
                Some(ArcMapper::new(arc_span).angle_for(self.display_fraction()))
            }
            Geometry::Linear(_) => None,
        }
    }

    /// Text to show: the edit buffer while editing, else the formatted value
    pub fn display_text(&self) -> String {
        match self.interaction() {
            Interaction::Editing(buffer) => buffer.text().to_string(),
            _ if self.kind() == ControlKind::TimeAdjuster => format_minutes(self.value()),
            _ => format_value(self.value(), self.spec().step()),
        }
    }

    /// Safe-zone state of the current value
    pub fn zone(&self) -> ZoneState {
        mapping::classify(self.value(), self.spec())
    }

    /// Tick marks for the control
    pub fn ticks(&self) -> TickModel {
        TickModel::generate(self.spec())
    }
}

/// Format a value with as many decimals as its step needs
pub fn format_value(value: f64, step: f64) -> String {
    format!("{:.prec$}", value, prec = step_decimals(step))
}

/// Format a duration in minutes, e.g. `45m`, `2h`, `1h 30m`
pub fn format_minutes(minutes: f64) -> String {
    let total = minutes.round().max(0.0) as u64;
    let (hours, mins) = (total / 60, total % 60);
    match (hours, mins) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(42.0, 1.0), "42");
        assert_eq!(format_value(0.25, 0.05), "0.25");
        assert_eq!(format_value(3.0, 0.5), "3.0");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45.0), "45m");
        assert_eq!(format_minutes(120.0), "2h");
        assert_eq!(format_minutes(90.0), "1h 30m");
        assert_eq!(format_minutes(-5.0), "0m");
    }

    #[test]
    fn test_display_clamps_without_mutating() {
        let mut control = ControlKind::HorizontalSlider.builder(0.0, 100.0).build().unwrap();
        control.set_value(150.0);

        assert_eq!(control.display_fraction(), 1.0);
        assert_eq!(control.value(), 150.0);
        assert_eq!(control.display_text(), "150");
    }

    #[test]
    fn test_dial_angle() {
        let mut control = ControlKind::Dial.builder(0.0, 100.0).build().unwrap();

        assert_eq!(control.display_angle(), Some(45.0));
        control.set_value(50.0);
        assert_eq!(control.display_angle(), Some(180.0));
        control.set_value(500.0);
        assert_eq!(control.display_angle(), Some(315.0));

        let slider = ControlKind::VerticalSlider.builder(0.0, 1.0).build().unwrap();
        assert_eq!(slider.display_angle(), None);
    }

    #[test]
    fn test_display_text_while_editing() {
        let mut control = ControlKind::Dial.builder(0.0, 100.0).value(12.0).build().unwrap();
        control.start_edit();
        control.set_edit_text("9");

        assert_eq!(control.display_text(), "9");
        control.cancel_edit();
        assert_eq!(control.display_text(), "12");
    }

    #[test]
    fn test_time_adjuster_text() {
        let control = ControlKind::time_adjuster_minutes().value(90.0).build().unwrap();
        assert_eq!(control.display_text(), "1h 30m");
    }

    #[test]
    fn test_zone_follows_value() {
        let mut control = ControlKind::MetallicSlider
            .builder(0.0, 50.0)
            .safe_zone(5.0, 20.0)
            .build()
            .unwrap();

        assert_eq!(control.zone(), ZoneState::Below);
        control.set_value(12.0);
        assert_eq!(control.zone(), ZoneState::Safe);
        control.set_value(75.0);
        assert_eq!(control.zone(), ZoneState::Above);
        assert_eq!(control.ticks().len(), 5);
    }
}
