//! Catalog entries for the visual component browser.
//!
//! Each component exposes a static table of named example
//! configurations. Stories are purely descriptive data: a
//! human-readable name, a literal configuration value, and example
//! child content. The browser decides how to mount them.

use serde::Serialize;
use thiserror::Error;

use crate::widgets::{Button, ButtonSize, ButtonVariant, CardConfig, InputConfig, InputKind};

/// A named example configuration plus example child content.
#[derive(Clone, Debug, Serialize)]
pub struct Story<C> {
    pub name: &'static str,
    pub config: C,
    pub content: &'static str,
}

/// Errors surfaced by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown story: {0:?}")]
    UnknownStory(String),
}

/// Look up a story by name in a component's story table.
pub fn find_story<'a, C>(
    stories: &'a [Story<C>],
    name: &str,
) -> Result<&'a Story<C>, CatalogError> {
    stories
        .iter()
        .find(|story| story.name == name)
        .ok_or_else(|| CatalogError::UnknownStory(name.to_string()))
}

/// Example configurations for the Button component.
pub fn button_stories() -> Vec<Story<Button>> {
    vec![
        Story {
            name: "Primary",
            config: Button::new().variant(ButtonVariant::Primary),
            content: "Click me",
        },
        Story {
            name: "Secondary",
            config: Button::new().variant(ButtonVariant::Secondary),
            content: "Secondary",
        },
        Story {
            name: "Danger",
            config: Button::new().variant(ButtonVariant::Danger),
            content: "Delete",
        },
        Story {
            name: "Small",
            config: Button::new().size(ButtonSize::Sm),
            content: "Small",
        },
        Story {
            name: "Large",
            config: Button::new().size(ButtonSize::Lg),
            content: "Large",
        },
        Story {
            name: "Disabled",
            config: Button::new().disabled(),
            content: "Disabled",
        },
    ]
}

/// Example configurations for the Card component.
pub fn card_stories() -> Vec<Story<CardConfig>> {
    vec![
        Story {
            name: "Basic",
            config: CardConfig {
                title: Some("Card Title".into()),
                ..Default::default()
            },
            content: "This is the card content. You can place any content here.",
        },
        Story {
            name: "WithShadow",
            config: CardConfig {
                title: Some("Card with Shadow".into()),
                shadow: true,
                ..Default::default()
            },
            content: "This card has a shadow effect for better depth perception.",
        },
        Story {
            name: "WithFooter",
            config: CardConfig {
                title: Some("Card with Footer".into()),
                footer: Some("Last updated: 2 hours ago".into()),
                shadow: true,
            },
            content: "This card includes a footer section for additional information.",
        },
        Story {
            name: "NoTitle",
            config: CardConfig::default(),
            content: "Card without a title - perfect for simple content containers.",
        },
    ]
}

/// Example configurations for the Input component.
pub fn input_stories() -> Vec<Story<InputConfig>> {
    vec![
        Story {
            name: "Default",
            config: InputConfig {
                label: Some("Email".into()),
                kind: InputKind::Email,
                placeholder: "Enter your email".into(),
                ..Default::default()
            },
            content: "",
        },
        Story {
            name: "WithHint",
            config: InputConfig {
                label: Some("Password".into()),
                kind: InputKind::Password,
                placeholder: "Enter your password".into(),
                hint: Some("Must be at least 8 characters".into()),
                required: true,
                ..Default::default()
            },
            content: "",
        },
        Story {
            name: "WithError",
            config: InputConfig {
                label: Some("Username".into()),
                placeholder: "Enter username".into(),
                has_error: true,
                error_message: Some("Username is already taken".into()),
                required: true,
                ..Default::default()
            },
            content: "",
        },
        Story {
            name: "Disabled",
            config: InputConfig {
                label: Some("Disabled Input".into()),
                placeholder: "You cannot edit this".into(),
                disabled: true,
                ..Default::default()
            },
            content: "",
        },
        Story {
            name: "NumberInput",
            config: InputConfig {
                label: Some("Age".into()),
                kind: InputKind::Number,
                placeholder: "Enter your age".into(),
                required: true,
                ..Default::default()
            },
            content: "",
        },
        Story {
            name: "Required",
            config: InputConfig {
                label: Some("Full Name".into()),
                placeholder: "Enter your full name".into(),
                required: true,
                ..Default::default()
            },
            content: "",
        },
    ]
}
