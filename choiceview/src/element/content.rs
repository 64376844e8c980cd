use super::Element;

/// What an element holds: nothing, a run of text, or child elements.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

impl Content {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}
