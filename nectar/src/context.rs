//! Host-side context widgets notify when their state transitions.
//!
//! Components push events to the event queue via `UiContext::push_event()`.
//! The hosting runtime drains the queue after each interaction and
//! dispatches whatever handlers it has registered.

use std::sync::{Arc, RwLock};

use crate::widgets::events::WidgetEvent;

#[derive(Debug, Default)]
struct UiContextInner {
    /// Events pushed by widgets, waiting to be drained by the host.
    pending_events: Vec<WidgetEvent>,
    /// Text of the most recent input change (payload for `Change` events).
    input_text: Option<String>,
}

/// Shared context handle. Cloning shares the underlying queue.
#[derive(Debug, Clone, Default)]
pub struct UiContext {
    inner: Arc<RwLock<UiContextInner>>,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Widget event queue
    // -------------------------------------------------------------------------

    /// Push a widget event to the queue.
    ///
    /// Components call this to signal that an event occurred. The host
    /// drains the queue and dispatches appropriate handlers.
    pub fn push_event(&self, event: WidgetEvent) {
        if let Ok(mut inner) = self.inner.write() {
            log::trace!(
                "UiContext: event {:?} from widget '{}'",
                event.kind,
                event.widget_id
            );
            inner.pending_events.push(event);
        }
    }

    /// Drain all pending widget events.
    ///
    /// Returns the events and clears the queue.
    pub fn drain_events(&self) -> Vec<WidgetEvent> {
        self.inner
            .write()
            .ok()
            .map(|mut inner| std::mem::take(&mut inner.pending_events))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Input text (payload of the most recent change)
    // -------------------------------------------------------------------------

    /// Set the current input text (called by input widgets on edit commit).
    pub fn set_input_text(&self, text: String) {
        if let Ok(mut inner) = self.inner.write() {
            inner.input_text = Some(text);
        }
    }

    /// Get the current input text.
    pub fn input_text(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.input_text.clone())
    }

    /// Clear the input text.
    pub fn clear_input_text(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.input_text = None;
        }
    }
}
