mod item;
mod view;

pub use item::{
    DefaultHeaderViewBuilder, DefaultItemViewBuilder, HeaderViewBuilder, ItemViewBuilder,
};
pub use view::{BasicChoiceViewBuilder, ChoiceViewBuilder, LIST_ID, TITLE_ID};
