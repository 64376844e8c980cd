mod basic;
mod container;
mod list;

pub use basic::BasicChoiceView;
pub use container::{ChoiceView, ChoiceViewDelegate};
pub use list::{ChoiceListPresenter, ChoiceListView, RenderSurface, Selection, SelectionMode};
