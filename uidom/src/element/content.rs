#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// An editable text field. The hosting runtime owns cursor and
    /// selection handling; the tree only carries the committed value.
    TextInput {
        value: String,
        placeholder: Option<String>,
        /// Mask character for password-style fields (displays the mask
        /// instead of each character).
        mask: Option<char>,
    },
}

impl Content {
    /// Child elements, if this content holds any.
    pub fn children(&self) -> &[super::Element] {
        match self {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Text carried directly by this content (not descendants).
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}
