//! The titled choice view container: a title label pinned to the top and a
//! choice list filling the remaining space.

use std::sync::Arc;

use crate::builder::ChoiceViewBuilder;
use crate::decor::{ViewAppearance, ViewDecor};
use crate::element::Element;
use crate::event::SubscriberId;
use crate::model::{Choice, ChoiceCollection};

use super::list::{ChoiceListView, SelectionMode};

/// Host callbacks for choice view events. All methods default to no-ops so
/// a delegate only implements what it cares about.
pub trait ChoiceViewDelegate: Send + Sync {
    /// A choice was activated. `selected` is the highlight state afterward.
    fn choice_selected(&self, _choice: &Arc<Choice>, _selected: bool) {}

    /// The view's preferred content height changed, typically after the
    /// collection was replaced. Hosts that size the view to its content
    /// resize here.
    fn preferred_height_changed(&self, _height: u16) {}
}

/// A titled, sectioned list of selectable choices.
pub struct ChoiceView {
    builder: ChoiceViewBuilder,
    appearance: ViewAppearance,
    list: ChoiceListView,
    delegate: Option<Arc<dyn ChoiceViewDelegate>>,
    element: Element,
}

impl Default for ChoiceView {
    fn default() -> Self {
        Self::new(ChoiceViewBuilder::default())
    }
}

impl ChoiceView {
    pub fn new(builder: ChoiceViewBuilder) -> Self {
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

    pub fn with_decor(decor: ViewDecor) -> Self {
        Self::new(ChoiceViewBuilder::new(Some(decor)))
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

    /// Replace the collection and rebuild the whole surface synchronously.
    pub fn set_choices(&mut self, choices: ChoiceCollection) {
        self.list.set_choices(choices);
        self.compose();
        if let Some(delegate) = &self.delegate {
            delegate.preferred_height_changed(self.preferred_height());
        }
    }

    /// Swap the decorator at runtime. Metrics flow down to the list, which
    /// rebuilds its rows at the new sizes.
    pub fn set_decor(&mut self, decor: Option<ViewDecor>) {
        self.builder = ChoiceViewBuilder::new(decor);
        self.appearance = self.builder.appearance();
        self.list.set_metrics(self.appearance.metrics);
        self.compose();
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn ChoiceViewDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Activate the choice at a position. Toggles its highlight, emits on
    /// the selection stream, and informs the delegate. Out-of-range
    /// positions do nothing.
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

    /// Subscribe to the selection stream (one event per activation).
    pub fn on_selection(
        &mut self,
        callback: impl Fn(&Arc<Choice>) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.list.on_selection(callback)
    }

    pub fn unsubscribe_selection(&mut self, id: SubscriberId) -> bool {
        self.list.unsubscribe_selection(id)
    }

    /// The composed element tree: container, optional title, list.
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn list(&self) -> &ChoiceListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ChoiceListView {
        &mut self.list
    }

    /// Exact height of the list content plus the title block when present.
    pub fn preferred_height(&self) -> u16 {
        let list_height = self.list.preferred_height();
        if self.appearance.has_title() {
            list_height
                .saturating_add(self.appearance.title_height)
                .saturating_add(crate::decor::tokens::TITLE_GAP)
        } else {
            list_height
        }
    }

    fn compose(&mut self) {
        self.element = self.builder.build(self.list.element().clone());
    }
}

impl std::fmt::Debug for ChoiceView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChoiceView")
            .field("appearance", &self.appearance)
            .field("list", &self.list)
            .field("delegate", &self.delegate.as_ref().map(|_| "set"))
            .finish()
    }
}
