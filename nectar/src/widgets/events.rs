//! Widget event types.
//!
//! Widgets push events to the host via `UiContext::push_event()`; the
//! host drains the queue and dispatches its own handlers. Only the
//! Input widget emits events in this library.

/// Identifies which handler to call for a widget event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEventKind {
    /// Value changed (input text edit committed). The payload is carried
    /// by `UiContext::input_text()`.
    Change,
}

/// A widget event to be dispatched.
#[derive(Debug, Clone)]
pub struct WidgetEvent {
    /// Which kind of event
    pub kind: WidgetEventKind,
    /// Widget ID that triggered the event
    pub widget_id: String,
}

impl WidgetEvent {
    /// Create a new widget event.
    pub fn new(kind: WidgetEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
        }
    }
}

/// Result of handling an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// The interaction was ignored (e.g. an edit on a disabled control).
    Ignored,
    /// The interaction was consumed and state transitioned.
    Consumed,
}

impl EventResult {
    /// Check if the interaction was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
