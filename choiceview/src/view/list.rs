//! The choice list: a presenter binding a [`ChoiceCollection`] to a rendered
//! element surface, plus selection/highlight behavior.
//!
//! There is no incremental update path. Replacing the collection performs a
//! full reload; after `set_choices` returns, the surface reflects exactly the
//! new collection and nothing from the old one remains rendered.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::builder::LIST_ID;
use crate::decor::ListMetrics;
use crate::element::Element;
use crate::event::{SubscriberId, Subscribers};
use crate::model::{Choice, ChoiceCollection};
use crate::transitions::{Easing, Transitions};
use crate::types::{Size, Style};

/// How long the highlight recolor runs on activation.
const HIGHLIGHT_DURATION: Duration = Duration::from_millis(150);

/// Selection mode for the list. Single is the default: highlighting one
/// position clears any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    Single,
    Multi,
}

/// Highlighted positions, tracked as (section index, item index).
#[derive(Debug, Clone, Default)]
pub struct Selection {
    mode: SelectionMode,
    positions: HashSet<(usize, usize)>,
}

impl Selection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            positions: HashSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Toggle a position's highlight. Returns whether it is selected now.
    pub fn toggle(&mut self, position: (usize, usize)) -> bool {
        if self.positions.contains(&position) {
            self.positions.remove(&position);
            false
        } else {
            if self.mode == SelectionMode::Single {
                self.positions.clear();
            }
            self.positions.insert(position);
            true
        }
    }

    pub fn is_selected(&self, position: (usize, usize)) -> bool {
        self.positions.contains(&position)
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A surface that can be told to fully re-render itself. Cell recycling and
/// pooling are the surface's concern, not the presenter's.
pub trait RenderSurface {
    fn reload(&mut self);
}

/// Mediates between the host-owned collection and the rendering surface.
#[derive(Debug, Default)]
pub struct ChoiceListPresenter {
    choices: ChoiceCollection,
    selection: Selection,
    metrics: ListMetrics,
    changed: Subscribers<ChoiceCollection>,
    activated: Subscribers<Arc<Choice>>,
}

impl ChoiceListPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            selection: Selection::new(mode),
            ..Self::default()
        }
    }

    /// Replace the collection wholesale. Clears all highlight state and
    /// notifies change observers in registration order before returning.
    pub fn set_choices(&mut self, choices: ChoiceCollection) {
        log::debug!(
            "choice list: replacing collection ({} sections, {} items)",
            choices.len(),
            choices.iter().map(|g| g.items.len()).sum::<usize>()
        );
        self.choices = choices;
        self.selection.clear();
        self.changed.emit(&self.choices);
    }

    pub fn choices(&self) -> &ChoiceCollection {
        &self.choices
    }

    pub fn section_count(&self) -> usize {
        self.choices.len()
    }

    /// Item count for a section, 0 when the index is out of bounds. Invalid
    /// indices are never an error on this surface.
    pub fn item_count(&self, section: usize) -> usize {
        self.choices.get(section).map_or(0, |g| g.items.len())
    }

    pub fn total_item_count(&self) -> usize {
        self.choices.iter().map(|g| g.items.len()).sum()
    }

    pub fn choice_at(&self, section: usize, item: usize) -> Option<&Arc<Choice>> {
        self.choices.get(section)?.items.get(item)
    }

    /// Toggle the highlight at a position and emit the choice on the
    /// selection stream. Out-of-range positions are ignored silently.
    /// Returns the choice and whether it is highlighted now.
    pub fn activate(&mut self, section: usize, item: usize) -> Option<(Arc<Choice>, bool)> {
        let Some(choice) = self.choice_at(section, item).cloned() else {
            log::debug!("choice list: ignoring activation at ({section}, {item})");
            return None;
        };
        let selected = self.selection.toggle((section, item));
        log::debug!(
            "choice list: activated {:?} at ({section}, {item}), selected={selected}",
            choice.id
        );
        self.activated.emit(&choice);
        Some((choice, selected))
    }

    pub fn is_selected(&self, section: usize, item: usize) -> bool {
        self.selection.is_selected((section, item))
    }

    /// Exact content height for the current collection, floored at zero.
    pub fn preferred_height(&self) -> u16 {
        self.metrics
            .preferred_height(self.total_item_count(), self.section_count())
    }

    pub fn metrics(&self) -> ListMetrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: ListMetrics) {
        self.metrics = metrics;
    }

    /// Observe collection replacement. Callbacks run synchronously inside
    /// `set_choices`.
    pub fn on_change(
        &mut self,
        callback: impl Fn(&ChoiceCollection) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.changed.subscribe(callback)
    }

    pub fn unsubscribe_change(&mut self, id: SubscriberId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Subscribe to the selection stream: one event per activation,
    /// regardless of the resulting highlight state.
    pub fn on_selection(
        &mut self,
        callback: impl Fn(&Arc<Choice>) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.activated.subscribe(callback)
    }

    pub fn unsubscribe_selection(&mut self, id: SubscriberId) -> bool {
        self.activated.unsubscribe(id)
    }
}

/// The rendered choice list. Owns its presenter and a cached element tree
/// that is rebuilt from scratch on every reload.
#[derive(Debug)]
pub struct ChoiceListView {
    presenter: ChoiceListPresenter,
    element: Element,
    reload_count: u64,
}

impl Default for ChoiceListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceListView {
    pub fn new() -> Self {
        let mut view = Self {
            presenter: ChoiceListPresenter::new(),
            element: Element::col().id(LIST_ID),
            reload_count: 0,
        };
        view.rebuild();
        view
    }

    pub fn with_mode(mode: SelectionMode) -> Self {
        let mut view = Self {
            presenter: ChoiceListPresenter::with_mode(mode),
            element: Element::col().id(LIST_ID),
            reload_count: 0,
        };
        view.rebuild();
        view
    }

    pub fn presenter(&self) -> &ChoiceListPresenter {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut ChoiceListPresenter {
        &mut self.presenter
    }

    /// Replace the collection and synchronously reload the surface.
    pub fn set_choices(&mut self, choices: ChoiceCollection) {
        self.presenter.set_choices(choices);
        self.reload();
    }

    pub fn set_metrics(&mut self, metrics: ListMetrics) {
        self.presenter.set_metrics(metrics);
        self.rebuild();
    }

    /// The current surface tree. Rebuilt wholesale on reload; stale cells
    /// never survive a collection replacement.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// How many full reloads have run. One per `set_choices` call.
    pub fn reload_count(&self) -> u64 {
        self.reload_count
    }

    pub fn preferred_height(&self) -> u16 {
        self.presenter.preferred_height()
    }

    pub fn is_selected(&self, section: usize, item: usize) -> bool {
        self.presenter.is_selected(section, item)
    }

    /// Activate a position: toggle its highlight (animated recolor) and
    /// emit the choice on the selection stream. Out-of-range activations do
    /// nothing.
    pub fn on_item_activated(&mut self, section: usize, item: usize) -> Option<Arc<Choice>> {
        let (choice, _) = self.presenter.activate(section, item)?;
        self.rebuild();
        Some(choice)
    }

    /// Build one cell. Out-of-range positions yield an empty zero-height
    /// placeholder instead of an error.
    pub fn render_cell(&self, section: usize, item: usize) -> Element {
        let Some(choice) = self.presenter.choice_at(section, item) else {
            return Element::box_()
                .id(format!("choice-placeholder-{section}-{item}"))
                .height(Size::Fixed(0));
        };

        let metrics = self.presenter.metrics();
        let appearance = choice.decor.resolve();
        let selected = self.presenter.is_selected(section, item);
        let highlight = Transitions::new().colors(HIGHLIGHT_DURATION, Easing::EaseOut);

        let mut content = choice.view_builder().build(choice, &appearance);
        if selected {
            content.style.foreground = Some(appearance.highlight_text_color.clone());
        }
        content.transitions = highlight;

        Element::row()
            .id(format!("choice-cell-{section}-{item}"))
            .height(Size::Fixed(metrics.item_height))
            .style(Style::new().background(appearance.background.clone()))
            .style_selected(
                Style::new().background(appearance.highlight_background.clone()),
            )
            .selected(selected)
            .transitions(highlight)
            .child(content)
    }

    /// Build one section header, sized to the configured section height. A
    /// group without a section (or an out-of-range index) yields a
    /// zero-height placeholder.
    pub fn render_header(&self, section: usize) -> Element {
        let group = self.presenter.choices().get(section);
        let Some(section_model) = group.and_then(|g| g.section.as_ref()) else {
            return Element::box_()
                .id(format!("choice-header-placeholder-{section}"))
                .height(Size::Fixed(0));
        };

        let metrics = self.presenter.metrics();
        let appearance = section_model.decor.resolve();
        let content = section_model
            .view_builder()
            .build(section_model, &appearance);

        Element::row()
            .id(format!("choice-header-{section}"))
            .height(Size::Fixed(metrics.section_height))
            .margin(crate::types::Edges::vertical(metrics.section_spacing))
            .style(Style::new().background(appearance.background.clone()))
            .child(content)
    }

    /// Observe collection replacement (see [`ChoiceListPresenter::on_change`]).
    pub fn on_change(
        &mut self,
        callback: impl Fn(&ChoiceCollection) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.presenter.on_change(callback)
    }

    /// Subscribe to the selection stream.
    pub fn on_selection(
        &mut self,
        callback: impl Fn(&Arc<Choice>) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.presenter.on_selection(callback)
    }

    pub fn unsubscribe_selection(&mut self, id: SubscriberId) -> bool {
        self.presenter.unsubscribe_selection(id)
    }

    fn rebuild(&mut self) {
        let metrics = self.presenter.metrics();
        let mut children = Vec::new();

        for section in 0..self.presenter.section_count() {
            let has_header = self
                .presenter
                .choices()
                .get(section)
                .is_some_and(|g| g.section.is_some());
            if has_header {
                children.push(self.render_header(section));
            }
            for item in 0..self.presenter.item_count(section) {
                children.push(self.render_cell(section, item));
            }
        }

        self.element = Element::col()
            .id(LIST_ID)
            .gap(metrics.item_spacing)
            .children(children);
    }
}

impl RenderSurface for ChoiceListView {
    /// Full reload: every cell is rebuilt from the presenter's collection.
    fn reload(&mut self) {
        self.rebuild();
        self.reload_count += 1;
        log::debug!("choice list: reload #{}", self.reload_count);
    }
}
