//! Scripted interactions
//!
//! A script drives one control through pointer and keyboard input and
//! records what it emitted. Scripts are YAML (or JSON, which YAML accepts).

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::control::{Control, EditOutcome, Recorder};
use crate::edit::EditKey;
use crate::feedback::Direction;
use crate::gesture::{Point, PointerEvent, Rect};

/// An interaction with one control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    /// Name of the control in the panel
    pub control: String,

    /// On-screen box of the control, captured at each pointer down
    pub bounds: Rect,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One input event; `t` is a timestamp in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        t: u64,
        #[serde(default)]
        pointer: u32,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        t: u64,
        #[serde(default)]
        pointer: u32,
    },
    Up {
        #[serde(default)]
        t: u64,
        #[serde(default)]
        pointer: u32,
    },
    Cancel {
        #[serde(default)]
        pointer: u32,
    },
    Edit,
    Type {
        text: String,
    },
    Key {
        key: EditKey,
    },
    Blur,
    Nudge {
        direction: Direction,
        #[serde(default)]
        t: u64,
    },
    Disable,
    Enable,
}

/// Load a script from a file
pub fn load_script(path: &Path) -> Result<Script> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {:?}", path))?;
    let script: Script = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse script {:?}", path))?;
    Ok(script)
}

/// Run every step against the control, returning what it emitted
pub fn run(script: &Script, control: &mut Control) -> Recorder {
    let mut recorder = Recorder::default();
    for step in &script.steps {
        apply(step, script.bounds, control, &mut recorder);
    }
    recorder
}

fn apply(step: &Step, bounds: Rect, control: &mut Control, recorder: &mut Recorder) {
    let event = |x: f64, y: f64, t: u64, pointer: u32| {
        PointerEvent::new(pointer, Point::new(x, y), Duration::from_millis(t))
    };

    match step {
        Step::Down { x, y, t, pointer } => {
            control.pointer_down(event(*x, *y, *t, *pointer), bounds, recorder);
        }
        Step::Move { x, y, t, pointer } => {
            control.pointer_move(event(*x, *y, *t, *pointer), recorder);
        }
        Step::Up { t, pointer } => {
            // Position is irrelevant on release
            control.pointer_up(event(0.0, 0.0, *t, *pointer));
        }
        Step::Cancel { pointer } => {
            control.pointer_cancel(*pointer);
        }
        Step::Edit => {
            control.start_edit();
        }
        Step::Type { text } => {
            control.set_edit_text(text.as_str());
        }
        Step::Key { key } => {
            let outcome = control.key(*key, recorder);
            log_outcome(control, outcome);
        }
        Step::Blur => {
            let outcome = control.blur(recorder);
            log_outcome(control, outcome);
        }
        Step::Nudge { direction, t } => {
            control.nudge(*direction, Duration::from_millis(*t), recorder);
        }
        Step::Disable => control.set_disabled(true),
        Step::Enable => control.set_disabled(false),
    }
}

fn log_outcome(control: &Control, outcome: Option<EditOutcome>) {
    if let Some(outcome) = outcome {
        debug!(control = control.name(), ?outcome, "edit finished");
    }
}
