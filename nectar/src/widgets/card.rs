//! Card widget - a passive container with optional header and footer.

use serde::{Deserialize, Serialize};
use uidom::Element;

/// Plain configuration for a card, as consumed by the catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub title: Option<String>,
    pub footer: Option<String>,
    pub shadow: bool,
}

/// A card container widget builder.
///
/// Cards group related content. The header region renders iff a
/// non-empty title is supplied, the footer region iff non-empty footer
/// text is supplied; visibility is recomputed from the current
/// configuration on every build, never cached. No state, no events.
///
/// # Example
///
/// ```
/// use nectar::widgets::Card;
/// use uidom::Element;
///
/// let el = Card::new()
///     .title("User Profile")
///     .shadow(true)
///     .child(Element::text("John Doe"))
///     .build();
/// assert!(el.has_class("has-shadow"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Card {
    id: Option<String>,
    title: Option<String>,
    footer: Option<String>,
    shadow: bool,
    children: Vec<Element>,
}

impl Card {
    /// Create a new card builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card builder from a plain configuration.
    pub fn from_config(config: CardConfig) -> Self {
        Self {
            id: None,
            title: config.title,
            footer: config.footer,
            shadow: config.shadow,
            children: Vec::new(),
        }
    }

    /// Set the card id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the header title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the footer text.
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Toggle the shadow class.
    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Add a single child to the card body.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the card body's children.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Build the card element.
    pub fn build(self) -> Element {
        let id = self.id.unwrap_or_else(|| "card".into());

        let mut elem = Element::col().id(id).class("card");
        if self.shadow {
            elem = elem.class("has-shadow");
        }

        if let Some(title) = self.title.filter(|t| !t.is_empty()) {
            elem = elem.child(
                Element::col()
                    .class("card-header")
                    .child(Element::text(title).class("card-title")),
            );
        }

        elem = elem.child(Element::col().class("card-body").children(self.children));

        if let Some(footer) = self.footer.filter(|f| !f.is_empty()) {
            elem = elem.child(Element::text(footer).class("card-footer"));
        }

        elem
    }
}
