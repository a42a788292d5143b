pub mod element;

pub use element::{Content, Direction, Element};
