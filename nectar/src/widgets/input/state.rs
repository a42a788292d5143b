use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::form::{ChangeFn, FormControl, TouchFn};
use crate::widgets::UnknownVariant;

/// Native input type forwarded to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
}

impl InputKind {
    /// The native `type` attribute value.
    pub fn as_attr(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Number => "number",
            InputKind::Tel => "tel",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

impl FromStr for InputKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(InputKind::Text),
            "email" => Ok(InputKind::Email),
            "password" => Ok(InputKind::Password),
            "number" => Ok(InputKind::Number),
            "tel" => Ok(InputKind::Tel),
            other => Err(UnknownVariant::new("input kind", other)),
        }
    }
}

/// Unique-per-instance identifier for an Input widget.
///
/// Generated identifiers draw nine characters from `[0-9a-z]` via a
/// pseudo-random source. There is no cross-instance uniqueness check;
/// a collision between concurrently mounted inputs is theoretically
/// possible and accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputId(String);

impl InputId {
    const SUFFIX_LEN: usize = 9;
    const CHARSET: &'static [u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..Self::SUFFIX_LEN)
            .map(|_| Self::CHARSET[rng.gen_range(0..Self::CHARSET.len())] as char)
            .collect();
        Self(format!("input-{suffix}"))
    }

    /// Wrap an externally supplied identifier.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Plain configuration for an input, as consumed by the catalog and
/// `Input::from_config`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub id: Option<String>,
    pub kind: InputKind,
    pub label: Option<String>,
    pub placeholder: String,
    pub hint: Option<String>,
    pub error_message: Option<String>,
    pub has_error: bool,
    pub disabled: bool,
    pub required: bool,
    pub value: String,
}

/// Internal state for an Input widget
#[derive(Debug, Default)]
struct InputInner {
    /// Current text value (last committed edit or last external write)
    value: String,
    /// Placeholder text
    placeholder: String,
    /// Label text (label region renders iff non-empty)
    label: Option<String>,
    /// Hint text (hint region renders iff non-empty)
    hint: Option<String>,
    /// Externally supplied error text; never computed internally
    error_message: Option<String>,
    /// Externally supplied error flag; never computed internally
    has_error: bool,
    /// Whether the control rejects edits
    disabled: bool,
    /// Whether the label shows a required marker
    required: bool,
    /// Native input type
    kind: InputKind,
}

/// Externally registered binding callbacks. Last registration wins.
#[derive(Default)]
struct BindingHooks {
    on_change: Option<ChangeFn>,
    on_touched: Option<TouchFn>,
}

impl fmt::Debug for BindingHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingHooks")
            .field("on_change", &self.on_change.is_some())
            .field("on_touched", &self.on_touched.is_some())
            .finish()
    }
}

/// A text input widget with reactive state.
///
/// `Input` is the only stateful control in the library. It holds the
/// current text value, renders label/required-marker/hint/error regions
/// conditionally, and implements the `FormControl` adapter so a
/// form-binding system can drive and observe it.
///
/// The value axis is last-write-wins: the value always reflects the
/// most recent committed edit or external write. The validation-display
/// axis (`has_error`, `error_message`) is purely declarative; the
/// control never validates its own content and no operation can fail.
///
/// # Example
///
/// ```
/// use nectar::widgets::Input;
/// use nectar::UiContext;
///
/// let cx = UiContext::new();
/// let input = Input::with_placeholder("Enter your name");
/// input.commit_edit("Ada", &cx);
/// assert_eq!(input.value(), "Ada");
/// ```
#[derive(Debug)]
pub struct Input {
    /// Unique identifier for this input instance
    id: InputId,
    /// Internal state
    inner: Arc<RwLock<InputInner>>,
    /// Binding callbacks registered by a form-state system
    hooks: Arc<RwLock<BindingHooks>>,
}

impl Input {
    /// Create a new empty input with a generated identifier.
    pub fn new() -> Self {
        Self {
            id: InputId::generate(),
            inner: Arc::new(RwLock::new(InputInner::default())),
            hooks: Arc::new(RwLock::new(BindingHooks::default())),
        }
    }

    /// Create an input with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = Self::new();
        input.set_value(value);
        input
    }

    /// Create an input with a placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let input = Self::new();
        input.set_placeholder(placeholder);
        input
    }

    /// Create an input from a plain configuration.
    pub fn from_config(config: InputConfig) -> Self {
        let id = config
            .id
            .map(InputId::from_name)
            .unwrap_or_else(InputId::generate);
        Self {
            id,
            inner: Arc::new(RwLock::new(InputInner {
                value: config.value,
                placeholder: config.placeholder,
                label: config.label,
                hint: config.hint,
                error_message: config.error_message,
                has_error: config.has_error,
                disabled: config.disabled,
                required: config.required,
                kind: config.kind,
            })),
            hooks: Arc::new(RwLock::new(BindingHooks::default())),
        }
    }

    /// Get the unique ID for this input
    pub fn id(&self) -> &InputId {
        &self.id
    }

    /// Get the ID as a string (for element binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Get the placeholder text
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Get the label text (if any)
    pub fn label(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or(None)
    }

    /// Get the hint text (if any)
    pub fn hint(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.hint.clone())
            .unwrap_or(None)
    }

    /// Get the externally supplied error message (if any)
    pub fn error_message(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error_message.clone())
            .unwrap_or(None)
    }

    /// Check the externally supplied error flag
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.has_error)
            .unwrap_or(false)
    }

    /// Check whether the control currently rejects edits
    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Check whether the label shows a required marker
    pub fn is_required(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.required)
            .unwrap_or(false)
    }

    /// Get the native input type
    pub fn kind(&self) -> InputKind {
        self.inner
            .read()
            .map(|guard| guard.kind)
            .unwrap_or_default()
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the length of the current value
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.value.len())
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Write methods (all silent: no callbacks, no outward events)
    // -------------------------------------------------------------------------

    /// Set the text value.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
    }

    /// Clear the input value
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
        }
    }

    /// Set the placeholder text
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
        }
    }

    /// Set the label text
    pub fn set_label(&self, label: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = Some(label.into());
        }
    }

    /// Set the hint text
    pub fn set_hint(&self, hint: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.hint = Some(hint.into());
        }
    }

    /// Set whether the label shows a required marker
    pub fn set_required(&self, required: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.required = required;
        }
    }

    /// Set the native input type
    pub fn set_kind(&self, kind: InputKind) {
        if let Ok(mut guard) = self.inner.write() {
            guard.kind = kind;
        }
    }

    // -------------------------------------------------------------------------
    // Validation display (externally driven, never computed here)
    // -------------------------------------------------------------------------

    /// Set an error message and raise the error flag.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(msg.into());
            guard.has_error = true;
        }
    }

    /// Clear the error message and flag.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = None;
            guard.has_error = false;
        }
    }

    /// Set only the error flag. The error text region renders iff the
    /// flag is raised AND the message is non-empty.
    pub fn set_has_error(&self, has_error: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.has_error = has_error;
        }
    }

    /// Set only the error message.
    pub fn set_error_message(&self, msg: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = msg;
        }
    }

    // -------------------------------------------------------------------------
    // Hook invocation (used by the event path)
    // -------------------------------------------------------------------------

    pub(crate) fn notify_change(&self, value: &str) {
        if let Ok(hooks) = self.hooks.read() {
            if let Some(callback) = &hooks.on_change {
                callback(value);
            }
        }
    }

    pub(crate) fn notify_touched(&self) {
        if let Ok(hooks) = self.hooks.read() {
            if let Some(callback) = &hooks.on_touched {
                callback();
            }
        }
    }
}

impl Clone for Input {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            inner: Arc::clone(&self.inner),
            hooks: Arc::clone(&self.hooks),
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// FormControl implementation
// -----------------------------------------------------------------------------

impl FormControl for Input {
    fn write_value(&self, value: Option<String>) {
        log::debug!("input '{}': external value write", self.id);
        self.set_value(value.unwrap_or_default());
    }

    fn register_on_change(&self, callback: ChangeFn) {
        if let Ok(mut hooks) = self.hooks.write() {
            hooks.on_change = Some(callback);
        }
    }

    fn register_on_touched(&self, callback: TouchFn) {
        if let Ok(mut hooks) = self.hooks.write() {
            hooks.on_touched = Some(callback);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        log::debug!("input '{}': disabled set to {}", self.id, disabled);
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
    }
}
