//! Input widget - a text input field with reactive state and a
//! form-binding adapter (see `crate::form::FormControl`).

mod events;
mod render;
mod state;

pub use render::build_input;
pub use state::{Input, InputConfig, InputId, InputKind};
