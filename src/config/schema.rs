//! Panel file schema

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::control::{Control, ControlBuilder, ControlKind};
use crate::spec::SpecError;

/// A panel of controls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Control definitions
    #[serde(default)]
    pub controls: Vec<ControlConfig>,
}

impl PanelConfig {
    /// Validate the panel
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for control in &self.controls {
            if control.name.trim().is_empty() {
                bail!("Control names must not be empty");
            }
            if !seen.insert(control.name.as_str()) {
                bail!("Duplicate control name '{}'", control.name);
            }
            if control.arc_span.is_some() && !control.kind.is_rotary() {
                bail!("Control '{}': arc_span only applies to dials", control.name);
            }
            control
                .build()
                .with_context(|| format!("Control '{}' is invalid", control.name))?;
        }
        Ok(())
    }

    /// Look up a control definition by name
    pub fn control(&self, name: &str) -> Option<&ControlConfig> {
        self.controls.iter().find(|c| c.name == name)
    }

    /// Build every control in the panel
    pub fn build_controls(&self) -> Result<Vec<Control>> {
        self.controls
            .iter()
            .map(|c| {
                c.build()
                    .with_context(|| format!("Control '{}' is invalid", c.name))
            })
            .collect()
    }
}

/// One control definition
///
/// Unset optional fields keep the surface's defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Unique name within the panel
    pub name: String,

    /// Surface type
    pub kind: ControlKind,

    pub min: f64,
    pub max: f64,

    pub step: Option<f64>,

    pub safe_min: Option<f64>,
    pub safe_max: Option<f64>,

    /// Use the exponential response curve
    pub exponential: Option<bool>,

    /// Exponent of the exponential curve (implies `exponential`)
    pub exponent: Option<f64>,

    pub tick_count: Option<usize>,
    pub snap_to_ticks: Option<bool>,

    /// Sweep of a dial in degrees (default: 270)
    pub arc_span: Option<f64>,

    /// Initial value (default: min)
    pub value: Option<f64>,

    /// Bounds and step for typed values
    pub manual_entry: Option<ManualEntryConfig>,
}

/// Manual-entry overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManualEntryConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,

    /// Allow typed values above `max`
    #[serde(default)]
    pub unbounded_max: bool,
}

impl ControlConfig {
    /// Builder with this definition applied over the surface defaults
    pub fn builder(&self) -> ControlBuilder {
        let mut builder = self.kind.builder(self.min, self.max).named(&self.name);

        if let Some(step) = self.step {
            builder = builder.step(step);
        }
        if let Some(safe_min) = self.safe_min {
            builder = builder.safe_min(safe_min);
        }
        if let Some(safe_max) = self.safe_max {
            builder = builder.safe_max(safe_max);
        }
        if let Some(exponential) = self.exponential {
            builder = builder.exponential(exponential);
        }
        if let Some(exponent) = self.exponent {
            builder = builder.exponent(exponent);
        }
        if let Some(count) = self.tick_count {
            builder = builder.ticks(count);
        }
        if let Some(snap) = self.snap_to_ticks {
            builder = builder.snap_to_ticks(snap);
        }
        if let Some(arc_span) = self.arc_span {
            builder = builder.arc_span(arc_span);
        }
        if let Some(value) = self.value {
            builder = builder.value(value);
        }
        if let Some(manual) = &self.manual_entry {
            if let Some(min) = manual.min {
                builder = builder.manual_min(min);
            }
            if let Some(max) = manual.max {
                builder = builder.manual_max(max);
            }
            if manual.unbounded_max {
                builder = builder.unbounded_manual_max();
            }
            if let Some(step) = manual.step {
                builder = builder.manual_step(step);
            }
        }
        builder
    }

    /// Build the control
    pub fn build(&self) -> Result<Control, SpecError> {
        self.builder().build()
    }
}
