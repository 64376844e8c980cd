//! Builders for the choice view container: an optional title label pinned to
//! the top at a fixed height, with the list filling the rest.

use crate::decor::{tokens, ViewAppearance, ViewDecor};
use crate::element::Element;
use crate::types::{Size, Style};

/// Element id of the title label in the composed tree.
pub const TITLE_ID: &str = "choice-title";
/// Element id of the list surface in the composed tree.
pub const LIST_ID: &str = "choice-list";

/// Default builder for a choice view's subview tree.
#[derive(Debug, Clone, Default)]
pub struct ChoiceViewBuilder {
    decor: Option<ViewDecor>,
}

impl ChoiceViewBuilder {
    /// A missing decorator means every field resolves to its default.
    pub fn new(decor: Option<ViewDecor>) -> Self {
        Self { decor }
    }

    pub fn decor(&self) -> Option<&ViewDecor> {
        self.decor.as_ref()
    }

    pub fn appearance(&self) -> ViewAppearance {
        self.decor.clone().unwrap_or_default().resolve()
    }

    /// The title label, built only when the resolved title is non-empty.
    pub fn title_label(&self, appearance: &ViewAppearance) -> Option<Element> {
        if !appearance.has_title() {
            return None;
        }
        Some(
            Element::text(&appearance.title)
                .id(TITLE_ID)
                .height(Size::Fixed(appearance.title_height))
                .text_align(appearance.title_align)
                .style(
                    Style::new()
                        .foreground(appearance.title_text_color.clone())
                        .text_style(appearance.title_text_style),
                ),
        )
    }

    /// Compose the container: title (when present) above the list, the list
    /// pinned to the remaining space. The gap below the title is fixed.
    pub fn build(&self, list: Element) -> Element {
        let appearance = self.appearance();
        let mut container = Element::col().id("choice-view").height(Size::Fill);

        if let Some(title) = self.title_label(&appearance) {
            container = container.gap(tokens::TITLE_GAP).child(title);
        }

        container.child(list.height(Size::Fill))
    }
}

/// Builder for the fixed-height "basic" variant, for choice sets small
/// enough to fit on screen without scrolling. The list's height must be
/// re-synced from the presenter's preferred height whenever the collection
/// changes.
#[derive(Debug, Clone)]
pub struct BasicChoiceViewBuilder {
    inner: ChoiceViewBuilder,
}

impl BasicChoiceViewBuilder {
    /// Constructing the basic variant without a style decorator is a
    /// programming error: the fixed-height layout cannot be derived without
    /// one.
    ///
    /// # Panics
    ///
    /// Panics when `decor` is `None`.
    pub fn new(decor: Option<ViewDecor>) -> Self {
        let Some(decor) = decor else {
            panic!("cannot build a basic choice view without a style decorator");
        };
        Self {
            inner: ChoiceViewBuilder::new(Some(decor)),
        }
    }

    pub fn appearance(&self) -> ViewAppearance {
        self.inner.appearance()
    }

    /// Compose with the list pinned to `list_height` rows. The container
    /// hugs its content instead of filling the host.
    pub fn build(&self, list: Element, list_height: u16) -> Element {
        let appearance = self.inner.appearance();
        let mut container = Element::col().id("choice-view").height(Size::Auto);

        if let Some(title) = self.inner.title_label(&appearance) {
            container = container.gap(tokens::TITLE_GAP).child(title);
        }

        container.child(list.height(Size::Fixed(list_height)))
    }
}
