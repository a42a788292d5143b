//! Button widget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uidom::Element;

use super::UnknownVariant;

/// Visual style of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    /// The class name selecting this variant's static style rules.
    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Danger => "danger",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

impl FromStr for ButtonVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ButtonVariant::Primary),
            "secondary" => Ok(ButtonVariant::Secondary),
            "danger" => Ok(ButtonVariant::Danger),
            other => Err(UnknownVariant::new("button variant", other)),
        }
    }
}

/// Size of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    /// The class name selecting this size's static style rules.
    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

impl FromStr for ButtonSize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(ButtonSize::Sm),
            "md" => Ok(ButtonSize::Md),
            "lg" => Ok(ButtonSize::Lg),
            other => Err(UnknownVariant::new("button size", other)),
        }
    }
}

/// Native button type forwarded to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonKind {
    /// The native `type` attribute value.
    pub fn as_attr(&self) -> &'static str {
        match self {
            ButtonKind::Button => "button",
            ButtonKind::Submit => "submit",
            ButtonKind::Reset => "reset",
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

impl FromStr for ButtonKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(ButtonKind::Button),
            "submit" => Ok(ButtonKind::Submit),
            "reset" => Ok(ButtonKind::Reset),
            other => Err(UnknownVariant::new("button kind", other)),
        }
    }
}

/// A button widget builder.
///
/// This is a stateless widget: the two enums map to a class string and
/// `disabled` only gates the interactivity flags. No side effects.
///
/// # Example
///
/// ```
/// use nectar::widgets::{Button, ButtonSize, ButtonVariant};
///
/// let el = Button::new()
///     .label("Delete")
///     .variant(ButtonVariant::Danger)
///     .size(ButtonSize::Sm)
///     .build();
/// assert_eq!(el.class_string(), "danger sm");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Button {
    label: Option<String>,
    id: Option<String>,
    variant: ButtonVariant,
    size: ButtonSize,
    kind: ButtonKind,
    disabled: bool,
}

impl Button {
    /// Create a new button builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the button id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the visual variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the native button type.
    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark the button as disabled.
    ///
    /// Disabled buttons are not focusable and not clickable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The class string selecting this button's static style rules:
    /// variant first, then size, separated by a single space.
    pub fn classes(&self) -> String {
        format!("{} {}", self.variant.as_class(), self.size.as_class())
    }

    /// Build the button element.
    pub fn build(self) -> Element {
        let label = self.label.unwrap_or_default();
        let id = self.id.unwrap_or_else(|| "button".into());

        Element::text(label)
            .id(id)
            .class(self.variant.as_class())
            .class(self.size.as_class())
            .data("type", self.kind.as_attr())
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
    }
}
