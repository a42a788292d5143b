//! Rendering for the Input widget.

use uidom::Element;

use super::{Input, InputKind};

/// Build the element tree for an input's current state.
///
/// Pure function of the state: every region's visibility is recomputed
/// on each call, nothing is cached.
pub fn build_input(input: &Input) -> Element {
    let mut wrapper = Element::col().class("input-wrapper");

    if let Some(label) = input.label().filter(|l| !l.is_empty()) {
        let mut label_el = Element::row()
            .class("input-label")
            .child(Element::text(label));
        if input.is_required() {
            label_el = label_el.child(Element::text("*").class("required"));
        }
        wrapper = wrapper.child(label_el);
    }

    let disabled = input.is_disabled();
    let mut field = Element::text_input(input.value())
        .id(input.id_string())
        .class("input-field")
        .data("type", input.kind().as_attr())
        .focusable(!disabled)
        .disabled(disabled);

    let placeholder = input.placeholder();
    if !placeholder.is_empty() {
        field = field.placeholder(placeholder);
    }
    if input.kind() == InputKind::Password {
        field = field.masked('•');
    }
    if input.is_required() {
        field = field.data("required", "true");
    }
    if input.has_error() {
        field = field.class("input-error");
    }
    wrapper = wrapper.child(field);

    // Error text needs both the flag and a non-empty message; the hint
    // only needs non-empty text. The two regions may coexist.
    if input.has_error() {
        if let Some(msg) = input.error_message().filter(|m| !m.is_empty()) {
            wrapper = wrapper.child(Element::text(msg).class("error-text"));
        }
    }
    if let Some(hint) = input.hint().filter(|h| !h.is_empty()) {
        wrapper = wrapper.child(Element::text(hint).class("hint-text"));
    }

    wrapper
}

impl Input {
    /// Build the element tree for this input's current state.
    pub fn build(&self) -> Element {
        build_input(self)
    }
}
