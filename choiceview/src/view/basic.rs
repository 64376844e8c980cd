//! The non-scrolling "basic" variant: the list is pinned to the exact height
//! of its content, re-synced on every collection change. Intended for choice
//! sets small enough to fit on screen.

use std::sync::Arc;

use crate::builder::BasicChoiceViewBuilder;
use crate::decor::{ViewAppearance, ViewDecor};
use crate::element::Element;
use crate::event::SubscriberId;
use crate::model::{Choice, ChoiceCollection};

use super::container::ChoiceViewDelegate;
use super::list::{ChoiceListView, SelectionMode};

/// A fixed-height choice view that hugs its content.
pub struct BasicChoiceView {
    builder: BasicChoiceViewBuilder,
    appearance: ViewAppearance,
    list: ChoiceListView,
    delegate: Option<Arc<dyn ChoiceViewDelegate>>,
    element: Element,
}

impl BasicChoiceView {
    /// The basic variant always requires a decorator; the fixed-height
    /// layout is derived from its metrics.
    pub fn with_decor(decor: ViewDecor) -> Self {
        let builder = BasicChoiceViewBuilder::new(Some(decor));
        let appearance = builder.appearance();
        let mut list = ChoiceListView::new();
        list.set_metrics(appearance.metrics);

        let mut view = Self {
            builder,
            appearance,
            list,
            delegate: None,
            element: Element::col(),
        };
        view.compose();
        view
    }

    /// Switch the selection mode. The collection carries over; highlight
    /// state and any subscribers do not, so call this before subscribing.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        let metrics = self.appearance.metrics;
        let choices = self.list.presenter().choices().clone();
        self.list = ChoiceListView::with_mode(mode);
        self.list.set_metrics(metrics);
        self.list.set_choices(choices);
        self.compose();
        self
    }

    pub fn appearance(&self) -> &ViewAppearance {
        &self.appearance
    }

    /// Replace the collection. The list's fixed height is re-synced to the
    /// new content before the tree is recomposed.
    pub fn set_choices(&mut self, choices: ChoiceCollection) {
        self.list.set_choices(choices);
        self.compose();
        if let Some(delegate) = &self.delegate {
            delegate.preferred_height_changed(self.preferred_height());
        }
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn ChoiceViewDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn activate(&mut self, section: usize, item: usize) -> Option<Arc<Choice>> {
        let choice = self.list.on_item_activated(section, item)?;
        let selected = self.list.is_selected(section, item);
        self.compose();
        if let Some(delegate) = &self.delegate {
            delegate.choice_selected(&choice, selected);
        }
        Some(choice)
    }

    pub fn is_selected(&self, section: usize, item: usize) -> bool {
        self.list.is_selected(section, item)
    }

    pub fn on_selection(
        &mut self,
        callback: impl Fn(&Arc<Choice>) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.list.on_selection(callback)
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn list(&self) -> &ChoiceListView {
        &self.list
    }

    /// Height of the list pinned into the composed tree.
    pub fn list_height(&self) -> u16 {
        self.list.preferred_height()
    }

    /// Total content height: list plus the title block when present.
    pub fn preferred_height(&self) -> u16 {
        let list_height = self.list_height();
        if self.appearance.has_title() {
            list_height
                .saturating_add(self.appearance.title_height)
                .saturating_add(crate::decor::tokens::TITLE_GAP)
        } else {
            list_height
        }
    }

    fn compose(&mut self) {
        self.element = self
            .builder
            .build(self.list.element().clone(), self.list_height());
    }
}

impl std::fmt::Debug for BasicChoiceView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicChoiceView")
            .field("appearance", &self.appearance)
            .field("list", &self.list)
            .field("delegate", &self.delegate.as_ref().map(|_| "set"))
            .finish()
    }
}
