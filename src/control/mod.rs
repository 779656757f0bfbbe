//! Controls
//!
//! A `Control` owns one committed value and the interaction state around it.
//! Interaction is a tagged state (`Idle`, `Dragging`, `Editing`), so a control
//! can never be dragged and edited at the same time. All transitions run
//! synchronously inside the host's event handler; results go out through a
//! `ControlSink`.

mod display;
mod sink;
mod surfaces;

pub use display::{format_minutes, format_value};
pub use sink::{ControlSink, Emission, Recorder};
pub use surfaces::{ControlBuilder, ControlKind};

use std::time::Duration;

use tracing::{debug, trace};

use crate::edit::{EditBuffer, EditKey, EditOptions};
use crate::feedback::{Direction, FeedbackDispatcher};
use crate::gesture::{GestureSession, PointerEvent, Rect, ValueChange};
use crate::mapping::StepGrid;
use crate::spec::ControlSpec;

/// What the control is doing right now
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Idle,
    Dragging(GestureSession),
    Editing(EditBuffer),
}

/// How an edit ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// The typed value was applied
    Committed(f64),
    /// The typed value equalled the current one
    Unchanged,
    /// The text did not parse; the previous value stands
    Rejected,
    /// The edit was abandoned
    Cancelled,
}

/// A single interactive control
#[derive(Debug, Clone)]
pub struct Control {
    name: String,
    kind: ControlKind,
    spec: ControlSpec,
    edit: EditOptions,
    value: f64,
    disabled: bool,
    interaction: Interaction,
    feedback: FeedbackDispatcher,
}

impl Control {
    /// Create a control starting at the spec's initial value
    pub fn new(name: impl Into<String>, kind: ControlKind, spec: ControlSpec, edit: EditOptions) -> Self {
        Self {
            name: name.into(),
            kind,
            value: spec.initial_value(),
            spec,
            edit,
            disabled: false,
            interaction: Interaction::Idle,
            feedback: FeedbackDispatcher::new(kind),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn spec(&self) -> &ControlSpec {
        &self.spec
    }

    pub fn edit_options(&self) -> &EditOptions {
        &self.edit
    }

    /// The committed value; may lie outside `min..=max` after manual entry
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.interaction, Interaction::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging(_))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.interaction, Interaction::Editing(_))
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Replace the feedback dispatcher, e.g. to change its window
    pub fn with_feedback(mut self, feedback: FeedbackDispatcher) -> Self {
        self.feedback = feedback;
        self
    }

    /// Start a drag and jump to the value under the pointer
    ///
    /// `bounds` is the control's on-screen box; it is captured here and not
    /// consulted again for the rest of the drag. Ignored while disabled,
    /// editing or already dragging. Returns whether a drag started.
    pub fn pointer_down(&mut self, event: PointerEvent, bounds: Rect, sink: &mut dyn ControlSink) -> bool {
        if self.disabled {
            trace!(control = %self.name, "pointer down ignored: disabled");
            return false;
        }
        match &self.interaction {
            Interaction::Idle => {}
            Interaction::Dragging(session) => {
                trace!(control = %self.name, active = session.pointer_id(), pointer = event.pointer_id,
                    "pointer down ignored: already dragging");
                return false;
            }
            Interaction::Editing(_) => {
                trace!(control = %self.name, "pointer down ignored: editing");
                return false;
            }
        }

        let mut session = GestureSession::begin(event.pointer_id, bounds, &self.spec, self.value);
        debug!(control = %self.name, pointer = event.pointer_id, "drag started");

        let change = session.track(event.position);
        self.interaction = Interaction::Dragging(session);
        if let Some(change) = change {
            self.commit_change(change, event.time, sink);
        }
        true
    }

    /// Follow the pointer; returns whether a new value was committed
    ///
    /// Events from other pointers, or with no drag in progress, are ignored.
    pub fn pointer_move(&mut self, event: PointerEvent, sink: &mut dyn ControlSink) -> bool {
        let Interaction::Dragging(session) = &mut self.interaction else {
            trace!(control = %self.name, "pointer move ignored: not dragging");
            return false;
        };
        if !session.owns(&event) {
            return false;
        }

        match session.track(event.position) {
            Some(change) => {
                self.commit_change(change, event.time, sink);
                true
            }
            None => false,
        }
    }

    /// Finish the drag; the last committed value stands
    pub fn pointer_up(&mut self, event: PointerEvent) -> bool {
        self.end_drag(event.pointer_id, "drag ended")
    }

    /// Abort the drag without emitting anything
    pub fn pointer_cancel(&mut self, pointer_id: u32) -> bool {
        self.end_drag(pointer_id, "drag cancelled")
    }

    fn end_drag(&mut self, pointer_id: u32, reason: &str) -> bool {
        let owned = matches!(
            &self.interaction,
            Interaction::Dragging(session) if session.pointer_id() == pointer_id
        );
        if !owned {
            return false;
        }
        debug!(control = %self.name, value = self.value, "{}", reason);
        self.interaction = Interaction::Idle;
        true
    }

    /// Enable or disable the control
    ///
    /// Disabling mid-drag drops the drag without a further value; disabling
    /// mid-edit discards the text.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled == self.disabled {
            return;
        }
        self.disabled = disabled;
        if disabled && !self.is_idle() {
            debug!(control = %self.name, "disabled, interaction dropped");
            self.interaction = Interaction::Idle;
        }
    }

    /// Enter edit mode, seeding the text with the current value
    ///
    /// A drag in progress is dropped first. Returns false when disabled or
    /// already editing.
    pub fn start_edit(&mut self) -> bool {
        if self.disabled || self.is_editing() {
            return false;
        }
        if self.is_dragging() {
            debug!(control = %self.name, "drag dropped for edit");
        }
        self.interaction = Interaction::Editing(EditBuffer::start(self.value));
        debug!(control = %self.name, "edit started");
        true
    }

    /// Current edit text, if editing
    pub fn edit_text(&self) -> Option<&str> {
        match &self.interaction {
            Interaction::Editing(buffer) => Some(buffer.text()),
            _ => None,
        }
    }

    /// Replace the edit text; false when not editing
    pub fn set_edit_text(&mut self, text: impl Into<String>) -> bool {
        match &mut self.interaction {
            Interaction::Editing(buffer) => {
                buffer.set_text(text);
                true
            }
            _ => false,
        }
    }

    /// Handle Enter/Escape; `None` when not editing
    pub fn key(&mut self, key: EditKey, sink: &mut dyn ControlSink) -> Option<EditOutcome> {
        match key {
            EditKey::Enter => self.commit_edit(sink),
            EditKey::Escape => self.cancel_edit(),
        }
    }

    /// Focus left the field: commit, same as Enter
    pub fn blur(&mut self, sink: &mut dyn ControlSink) -> Option<EditOutcome> {
        self.commit_edit(sink)
    }

    /// Parse and apply the edit text, leaving edit mode either way
    pub fn commit_edit(&mut self, sink: &mut dyn ControlSink) -> Option<EditOutcome> {
        let buffer = self.take_edit_buffer()?;

        let outcome = match buffer.commit(&self.edit) {
            Ok(value) if value == self.value => EditOutcome::Unchanged,
            Ok(value) => {
                self.value = value;
                sink.on_change(value);
                EditOutcome::Committed(value)
            }
            Err(_) => EditOutcome::Rejected,
        };
        Some(outcome)
    }

    /// Drop the edit text and show the committed value again
    pub fn cancel_edit(&mut self) -> Option<EditOutcome> {
        let buffer = self.take_edit_buffer()?;
        buffer.cancel();
        debug!(control = %self.name, "edit cancelled");
        Some(EditOutcome::Cancelled)
    }

    fn take_edit_buffer(&mut self) -> Option<EditBuffer> {
        if !self.is_editing() {
            return None;
        }
        match std::mem::replace(&mut self.interaction, Interaction::Idle) {
            Interaction::Editing(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Move one step up or down (stepper buttons, arrow keys)
    ///
    /// Only acts while idle and enabled. A step that the drag range would
    /// pull the other way is ignored, so "up" above `max` does nothing.
    /// Returns whether the value changed.
    pub fn nudge(&mut self, direction: Direction, time: Duration, sink: &mut dyn ControlSink) -> bool {
        if self.disabled || !self.is_idle() {
            return false;
        }
        let delta = match direction {
            Direction::Up => self.spec.step(),
            Direction::Down => -self.spec.step(),
        };
        let value = StepGrid::for_spec(&self.spec).quantize(self.value + delta);
        if value == self.value || Direction::between(self.value, value) != direction {
            trace!(control = %self.name, ?direction, value = self.value, "nudge ignored");
            return false;
        }
        self.commit_change(ValueChange { value, direction }, time, sink);
        true
    }

    /// Update the value from the host without notifying it
    ///
    /// Refused while dragging, where the gesture is authoritative.
    pub fn set_value(&mut self, value: f64) -> bool {
        if self.is_dragging() || !value.is_finite() {
            return false;
        }
        self.value = value;
        true
    }

    /// Return to the spec's initial value
    pub fn reset(&mut self, sink: &mut dyn ControlSink) -> bool {
        if self.disabled || !self.is_idle() {
            return false;
        }
        let initial = self.spec.initial_value();
        if initial == self.value {
            return false;
        }
        self.value = initial;
        sink.on_change(initial);
        true
    }

    fn commit_change(&mut self, change: ValueChange, time: Duration, sink: &mut dyn ControlSink) {
        trace!(control = %self.name, value = change.value, "value committed");
        self.value = change.value;
        sink.on_change(change.value);
        if let Some(event) = self.feedback.maybe_emit(change.direction, time) {
            sink.on_feedback(event);
        }
    }
}
