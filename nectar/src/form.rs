//! Form-binding adapter contract.
//!
//! A form-state system embeds a control by driving it through exactly
//! four operations: write the value, observe changes, observe touches,
//! and toggle the disabled flag. The trait is deliberately independent
//! of any rendering concern so a binding layer can hold controls as
//! `&dyn` or boxed trait objects.

/// Callback invoked with the new value on every edit commit.
pub type ChangeFn = Box<dyn Fn(&str) + Send + Sync>;

/// Callback invoked when the control loses focus.
pub type TouchFn = Box<dyn Fn() + Send + Sync>;

/// The four-operation interface a form-binding system relies on.
///
/// All four operations are safe to call in any order and any number of
/// times; the last call for each wins. None of them can fail.
pub trait FormControl: Send + Sync {
    /// Overwrite the control's value unconditionally.
    ///
    /// `None` is treated as empty text. The write is silent: no change
    /// callback runs and no outward notification is emitted.
    fn write_value(&self, value: Option<String>);

    /// Register the callback invoked on every committed edit.
    fn register_on_change(&self, callback: ChangeFn);

    /// Register the callback invoked when the control loses focus.
    fn register_on_touched(&self, callback: TouchFn);

    /// Overwrite the disabled flag unconditionally.
    fn set_disabled(&self, disabled: bool);
}
