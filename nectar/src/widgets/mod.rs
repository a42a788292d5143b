//! The component library: Button, Card, and the form-integrated Input.
//!
//! Each widget is a builder that produces a `uidom::Element` subtree.
//! Button and Card are stateless; Input holds reactive state and is the
//! only widget that notifies the host (see `widgets::events`).

pub mod button;
pub mod card;
pub mod events;
pub mod input;

pub use button::{Button, ButtonKind, ButtonSize, ButtonVariant};
pub use card::{Card, CardConfig};
pub use input::{Input, InputConfig, InputId, InputKind};

use thiserror::Error;

/// Error returned when parsing a widget enum from an unrecognized string.
///
/// The widgets themselves never validate at runtime (enum values are a
/// type-level concern); this is only the boundary for hosts that read
/// configuration from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what}: {value:?}")]
pub struct UnknownVariant {
    what: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}
