//! The caller-owned data the choice view renders: choices, sections, and the
//! collection set wholesale on the widget.

use std::fmt;
use std::sync::Arc;

use crate::builder::{
    DefaultHeaderViewBuilder, DefaultItemViewBuilder, HeaderViewBuilder, ItemViewBuilder,
};
use crate::decor::{HeaderDecor, ItemDecor};

/// A single selectable option. Immutable once handed to the list; the list
/// keeps an `Arc` reference, never a copy.
#[derive(Clone)]
pub struct Choice {
    /// Opaque, caller-defined. Need not be globally unique, but should be
    /// stable across collection replacements.
    pub id: String,
    /// Human-readable text shown by the cell label.
    pub label: String,
    pub decor: ItemDecor,
    /// Optional per-choice cell builder; the default builder is used when
    /// absent. The one hook for heterogeneous cells in a single list.
    pub renderer: Option<Arc<dyn ItemViewBuilder>>,
}

impl Choice {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            decor: ItemDecor::default(),
            renderer: None,
        }
    }

    pub fn decor(mut self, decor: ItemDecor) -> Self {
        self.decor = decor;
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn ItemViewBuilder>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// The builder that renders this choice's cell.
    pub fn view_builder(&self) -> Arc<dyn ItemViewBuilder> {
        self.renderer
            .clone()
            .unwrap_or_else(|| Arc::new(DefaultItemViewBuilder))
    }
}

impl fmt::Debug for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choice")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("decor", &self.decor)
            .field("renderer", &self.renderer.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// A named grouping of choices, rendered with a header row.
#[derive(Clone)]
pub struct Section {
    pub id: String,
    /// Header text. An empty header still reserves the header row; a group
    /// without a section renders none.
    pub header: String,
    pub decor: HeaderDecor,
    pub renderer: Option<Arc<dyn HeaderViewBuilder>>,
}

impl Section {
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            decor: HeaderDecor::default(),
            renderer: None,
        }
    }

    pub fn decor(mut self, decor: HeaderDecor) -> Self {
        self.decor = decor;
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn HeaderViewBuilder>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn view_builder(&self) -> Arc<dyn HeaderViewBuilder> {
        self.renderer
            .clone()
            .unwrap_or_else(|| Arc::new(DefaultHeaderViewBuilder))
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("decor", &self.decor)
            .field("renderer", &self.renderer.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// One section with its choices. Insertion order is render order, exactly.
#[derive(Debug, Clone, Default)]
pub struct SectionGroup {
    pub section: Option<Arc<Section>>,
    pub items: Vec<Arc<Choice>>,
}

impl SectionGroup {
    pub fn new(section: Section) -> Self {
        Self {
            section: Some(Arc::new(section)),
            items: Vec::new(),
        }
    }

    /// A group without a header.
    pub fn ungrouped() -> Self {
        Self::default()
    }

    pub fn item(mut self, choice: Choice) -> Self {
        self.items.push(Arc::new(choice));
        self
    }

    pub fn items(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.items.extend(choices.into_iter().map(Arc::new));
        self
    }
}

/// The full ordered content of a choice list. Replaced wholesale by the
/// host; replacement triggers a full reload of the rendering surface.
pub type ChoiceCollection = Vec<SectionGroup>;
