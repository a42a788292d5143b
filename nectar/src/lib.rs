pub mod catalog;
pub mod context;
pub mod form;
pub mod widgets;

pub use context::UiContext;

pub mod prelude {
    pub use crate::catalog::{
        button_stories, card_stories, find_story, input_stories, CatalogError, Story,
    };
    pub use crate::context::UiContext;
    pub use crate::form::FormControl;
    pub use crate::widgets::events::{EventResult, WidgetEvent, WidgetEventKind};
    pub use crate::widgets::{Button, ButtonKind, ButtonSize, ButtonVariant};
    pub use crate::widgets::{Card, CardConfig};
    pub use crate::widgets::{Input, InputConfig, InputId, InputKind};
    pub use crate::widgets::UnknownVariant;

    pub use uidom::{Content, Element};
}
