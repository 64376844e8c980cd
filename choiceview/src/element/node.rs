use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::transitions::Transitions;
use crate::types::{Align, Direction, Edges, Justify, Size, Style, TextAlign};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// One node of the view hierarchy the builders produce.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,

    // Box model
    pub width: Size,
    pub height: Size,
    pub min_height: Option<u16>,
    pub max_height: Option<u16>,
    pub padding: Edges,
    pub margin: Edges,

    // Container behavior
    pub direction: Direction,
    pub gap: u16,
    pub justify: Justify,
    pub align: Align,

    // Text
    pub text_align: TextAlign,

    // Visual
    pub style: Style,
    /// Applied instead of `style` while this node is selected.
    pub style_selected: Option<Style>,
    pub selected: bool,
    pub transitions: Transitions,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Fill,
            height: Size::Auto,
            min_height: None,
            max_height: None,
            padding: Edges::default(),
            margin: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            justify: Justify::Start,
            align: Align::Stretch,
            text_align: TextAlign::Left,
            style: Style::default(),
            style_selected: None,
            selected: false,
            transitions: Transitions::default(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn min_height(mut self, min_height: u16) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_selected(mut self, style: Style) -> Self {
        self.style_selected = Some(style);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            // Text cannot hold children; adding one replaces the text.
            Content::Text(_) => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// The style that applies right now, honoring selection state.
    pub fn effective_style(&self) -> &Style {
        if self.selected {
            self.style_selected.as_ref().unwrap_or(&self.style)
        } else {
            &self.style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_accumulates_children() {
        let el = Element::col()
            .child(Element::box_().id("a"))
            .child(Element::box_().id("b"));
        let Content::Children(children) = &el.content else {
            panic!("expected children");
        };
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn child_replaces_text_content() {
        let el = Element::text("label").child(Element::box_().id("inner"));
        assert_eq!(el.content.text(), None);
        let Content::Children(children) = &el.content else {
            panic!("expected children");
        };
        assert_eq!(children[0].id, "inner");
    }
}
