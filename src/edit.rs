//! Inline text editing
//!
//! Typed values bypass gesture geometry entirely: the text is parsed, clamped
//! to the manual-entry bounds and rounded to the manual-entry step. The
//! manual-entry bounds may be looser than the drag range, which is how a
//! typed value ends up above `max`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mapping::StepGrid;
use crate::spec::{ControlSpec, SpecError};

/// Keys that end an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKey {
    /// Commit the typed value
    Enter,
    /// Discard the typed value
    Escape,
}

/// Bounds and granularity for manually entered values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditOptions {
    /// Effective floor, also the origin of the step grid
    pub min: f64,
    /// Effective ceiling (`f64::INFINITY` for none)
    pub max: f64,
    /// Effective step
    pub step: f64,
}

impl EditOptions {
    /// Typed values follow the drag range and step exactly
    pub fn from_spec(spec: &ControlSpec) -> Self {
        Self {
            min: spec.min(),
            max: spec.max(),
            step: spec.step(),
        }
    }

    /// Typed values may exceed `max`, and integer-stepped controls accept
    /// any whole number
    pub fn manual_entry(spec: &ControlSpec) -> Self {
        let step = if spec.step() >= 1.0 && spec.step().fract() == 0.0 {
            1.0
        } else {
            spec.step()
        };
        Self {
            min: spec.min(),
            max: f64::INFINITY,
            step,
        }
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn unbounded_max(mut self) -> Self {
        self.max = f64::INFINITY;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Check the options describe a usable grid
    pub fn validate(&self) -> Result<(), SpecError> {
        if !self.min.is_finite() || self.max.is_nan() || self.max == f64::NEG_INFINITY {
            return Err(SpecError::NonFiniteBounds { min: self.min, max: self.max });
        }
        if self.min >= self.max {
            return Err(SpecError::EmptyRange { min: self.min, max: self.max });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SpecError::InvalidStep(self.step));
        }
        Ok(())
    }

    /// Clamp and round a parsed value
    pub fn apply(&self, value: f64) -> f64 {
        let clamped = value.max(self.min).min(self.max);
        StepGrid::new(self.min, self.step, self.max).quantize(clamped)
    }
}

/// Why a commit did not produce a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub text: String,
}

/// Text being typed into a control
///
/// Consumed by `commit` or `cancel`; a buffer is never partially applied.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    text: String,
    original: f64,
}

impl EditBuffer {
    /// Start editing, seeded with the value's canonical text
    pub fn start(current: f64) -> Self {
        Self {
            text: canonical_text(current),
            original: current,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value shown before the edit started
    pub fn original(&self) -> f64 {
        self.original
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Parse and normalize the typed text
    pub fn commit(self, options: &EditOptions) -> Result<f64, Rejected> {
        match parse_number(&self.text) {
            Some(value) => {
                let value = options.apply(value);
                debug!(text = %self.text, value, "edit committed");
                Ok(value)
            }
            None => {
                debug!(text = %self.text, "edit text rejected");
                Err(Rejected { text: self.text })
            }
        }
    }

    /// Discard the text, returning the value to show again
    pub fn cancel(self) -> f64 {
        self.original
    }
}

/// Canonical text for a value: no trailing zeros, no exponent
pub fn canonical_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.0}", value);
    }
    let text = format!("{:.10}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Parse free-form numeric text
///
/// Surrounding whitespace and thousands separators (`,` and `_`) are ignored,
/// as is anything after the leading number, so `"75%"` and `"1,200 USD"`
/// parse. Text without a leading number is rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    let len = numeric_prefix_len(&cleaned);
    if len == 0 {
        return None;
    }
    cleaned[..len].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Length of the longest prefix shaped like a decimal number
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts if digits follow it
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
