//! A titled, sectioned, selectable choice list for terminal UIs.
//!
//! The host hands the widget a [`model::ChoiceCollection`] and a set of
//! optional style decorators; the widget builds an [`element::Element`] tree
//! through its builders, tracks highlight state, and reports activations
//! back through a synchronous selection stream and an optional delegate.
//!
//! Rendering runs through the usual pipeline: [`layout::layout`] resolves
//! rectangles, [`render::render_to_buffer`] paints cells, and
//! [`terminal::Terminal`] diffs and flushes them to the screen with animated
//! highlight recolors driven by [`animation::AnimationState`].

pub mod animation;
pub mod buffer;
pub mod builder;
pub mod decor;
pub mod element;
pub mod event;
pub mod layout;
pub mod model;
pub mod render;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;
pub mod view;

pub use animation::AnimationState;
pub use buffer::{Buffer, Cell};
pub use builder::{
    BasicChoiceViewBuilder, ChoiceViewBuilder, DefaultHeaderViewBuilder, DefaultItemViewBuilder,
    HeaderViewBuilder, ItemViewBuilder, LIST_ID, TITLE_ID,
};
pub use decor::{
    HeaderAppearance, HeaderDecor, ItemAppearance, ItemDecor, ListMetrics, ViewAppearance,
    ViewDecor,
};
pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{SubscriberId, Subscribers};
pub use layout::{layout, LayoutResult, Rect};
pub use model::{Choice, ChoiceCollection, Section, SectionGroup};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::{
    Align, Border, Color, ColorOp, Direction, Edges, Justify, Rgb, Size, Style, TextAlign,
    TextStyle,
};
pub use view::{
    BasicChoiceView, ChoiceListPresenter, ChoiceListView, ChoiceView, ChoiceViewDelegate,
    RenderSurface, Selection, SelectionMode,
};
