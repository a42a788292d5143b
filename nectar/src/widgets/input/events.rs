//! Event handling for the Input widget.

use crate::context::UiContext;
use crate::widgets::events::{EventResult, WidgetEvent, WidgetEventKind};

use super::Input;

impl Input {
    /// Commit a native text edit.
    ///
    /// This is the value-axis transition: the raw text becomes the
    /// current value, then the registered change callback runs with it,
    /// then the outward change notification is published to the
    /// context. All three happen synchronously, in that order, with no
    /// debouncing or batching.
    ///
    /// Returns `Ignored` without transitioning when the control is
    /// disabled.
    pub fn commit_edit(&self, text: impl Into<String>, cx: &UiContext) -> EventResult {
        if self.is_disabled() {
            log::trace!("input '{}': edit rejected while disabled", self.id());
            return EventResult::Ignored;
        }

        let value = text.into();
        self.set_value(value.clone());
        self.notify_change(&value);

        cx.set_input_text(value);
        cx.push_event(WidgetEvent::new(WidgetEventKind::Change, self.id_string()));

        EventResult::Consumed
    }

    /// Report loss of focus.
    ///
    /// Invokes the registered touch callback. No value-axis transition
    /// occurs and no outward event is emitted.
    pub fn blur(&self) {
        log::trace!("input '{}': blurred", self.id());
        self.notify_touched();
    }
}
