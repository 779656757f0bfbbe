//! Control surfaces
//!
//! Dials, sliders and the time adjuster share the same engine and differ only
//! in geometry and default parameters.

use serde::{Deserialize, Serialize};

use super::Control;
use crate::edit::EditOptions;
use crate::spec::{ControlSpecBuilder, Geometry, Orientation, SpecError, DEFAULT_ARC_SPAN};

/// The kind of surface a control presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Dial,
    MetallicDial,
    HorizontalSlider,
    MetallicSlider,
    VerticalSlider,
    TimeAdjuster,
}

impl ControlKind {
    pub const ALL: [ControlKind; 6] = [
        Self::Dial,
        Self::MetallicDial,
        Self::HorizontalSlider,
        Self::MetallicSlider,
        Self::VerticalSlider,
        Self::TimeAdjuster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dial => "dial",
            Self::MetallicDial => "metallic_dial",
            Self::HorizontalSlider => "horizontal_slider",
            Self::MetallicSlider => "metallic_slider",
            Self::VerticalSlider => "vertical_slider",
            Self::TimeAdjuster => "time_adjuster",
        }
    }

    pub fn is_rotary(&self) -> bool {
        matches!(self, Self::Dial | Self::MetallicDial)
    }

    /// A builder for `min..=max` carrying this surface's defaults
    pub fn builder(self, min: f64, max: f64) -> ControlBuilder {
        let spec = ControlSpecBuilder::new(min, max);
        let spec = match self {
            Self::Dial => spec.rotary(DEFAULT_ARC_SPAN),
            Self::MetallicDial => spec.rotary(DEFAULT_ARC_SPAN).ticks(11),
            Self::HorizontalSlider => spec.linear(Orientation::Horizontal),
            Self::MetallicSlider => spec.linear(Orientation::Horizontal).ticks(5),
            Self::VerticalSlider => spec.linear(Orientation::Vertical),
            Self::TimeAdjuster => spec.linear(Orientation::Horizontal).step(5.0),
        };
        let manual_entry = if self == Self::TimeAdjuster {
            ManualEntry {
                step: Some(1.0),
                unbounded_max: true,
                ..ManualEntry::default()
            }
        } else {
            ManualEntry::default()
        };

        ControlBuilder {
            name: self.as_str().to_string(),
            kind: self,
            spec,
            manual_entry,
        }
    }

    /// The stock time adjuster: 5 to 240 minutes in 5 minute steps
    pub fn time_adjuster_minutes() -> ControlBuilder {
        Self::TimeAdjuster.builder(5.0, 240.0).value(30.0)
    }
}

/// Manual-entry overrides, resolved against the spec at build time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ManualEntry {
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
    unbounded_max: bool,
}

/// Builds a `Control` for one surface
#[derive(Debug, Clone)]
pub struct ControlBuilder {
    name: String,
    kind: ControlKind,
    spec: ControlSpecBuilder,
    manual_entry: ManualEntry,
}

impl ControlBuilder {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.spec = self.spec.step(step);
        self
    }

    pub fn exponential(mut self, enabled: bool) -> Self {
        self.spec = self.spec.exponential(enabled);
        self
    }

    pub fn exponent(mut self, exponent: f64) -> Self {
        self.spec = self.spec.exponent(exponent);
        self
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.spec = self.spec.ticks(count);
        self
    }

    pub fn without_ticks(mut self) -> Self {
        self.spec = self.spec.without_ticks();
        self
    }

    pub fn snap_to_ticks(mut self, snap: bool) -> Self {
        self.spec = self.spec.snap_to_ticks(snap);
        self
    }

    pub fn safe_zone(mut self, safe_min: f64, safe_max: f64) -> Self {
        self.spec = self.spec.safe_zone(safe_min, safe_max);
        self
    }

    pub fn safe_min(mut self, safe_min: f64) -> Self {
        self.spec = self.spec.safe_min(safe_min);
        self
    }

    pub fn safe_max(mut self, safe_max: f64) -> Self {
        self.spec = self.spec.safe_max(safe_max);
        self
    }

    /// Change the sweep of a dial; sliders have no arc
    pub fn arc_span(mut self, degrees: f64) -> Self {
        if matches!(self.spec.geometry(), Geometry::Rotary { .. }) {
            self.spec = self.spec.rotary(degrees);
        }
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.spec = self.spec.initial_value(value);
        self
    }

    /// Floor for typed values (defaults to `min`)
    pub fn manual_min(mut self, min: f64) -> Self {
        self.manual_entry.min = Some(min);
        self
    }

    /// Ceiling for typed values (defaults to `max`)
    pub fn manual_max(mut self, max: f64) -> Self {
        self.manual_entry.max = Some(max);
        self.manual_entry.unbounded_max = false;
        self
    }

    /// Let typed values exceed `max`
    pub fn unbounded_manual_max(mut self) -> Self {
        self.manual_entry.unbounded_max = true;
        self.manual_entry.max = None;
        self
    }

    /// Step for typed values (defaults to `step`)
    pub fn manual_step(mut self, step: f64) -> Self {
        self.manual_entry.step = Some(step);
        self
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Validate everything and create the control
    pub fn build(self) -> Result<Control, SpecError> {
        let spec = self.spec.build()?;

        let mut edit = EditOptions::from_spec(&spec);
        if let Some(min) = self.manual_entry.min {
            edit = edit.with_min(min);
        }
        if let Some(max) = self.manual_entry.max {
            edit = edit.with_max(max);
        }
        if self.manual_entry.unbounded_max {
            edit = edit.unbounded_max();
        }
        if let Some(step) = self.manual_entry.step {
            edit = edit.with_step(step);
        }
        edit.validate()?;

        Ok(Control::new(self.name, self.kind, spec, edit))
    }
}
