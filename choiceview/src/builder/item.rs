//! Cell content builders. Every choice renders through an [`ItemViewBuilder`];
//! a choice may carry its own, otherwise the default label builder is used.

use crate::decor::{HeaderAppearance, ItemAppearance};
use crate::element::Element;
use crate::model::{Choice, Section};
use crate::types::{Edges, Size, Style};

/// Builds the visible content of one choice cell.
pub trait ItemViewBuilder: Send + Sync {
    fn build(&self, choice: &Choice, appearance: &ItemAppearance) -> Element;
}

/// Default cell content: a single label bound to the choice's display text,
/// styled from the resolved item appearance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultItemViewBuilder;

impl ItemViewBuilder for DefaultItemViewBuilder {
    fn build(&self, choice: &Choice, appearance: &ItemAppearance) -> Element {
        Element::text(&choice.label)
            .id(format!("choice-label-{}", choice.id))
            .height(Size::Fill)
            .padding(Edges::left(1))
            .style(
                Style::new()
                    .foreground(appearance.text_color.clone())
                    .text_style(appearance.text_style),
            )
    }
}

/// Builds the visible content of one section header.
pub trait HeaderViewBuilder: Send + Sync {
    fn build(&self, section: &Section, appearance: &HeaderAppearance) -> Element;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHeaderViewBuilder;

impl HeaderViewBuilder for DefaultHeaderViewBuilder {
    fn build(&self, section: &Section, appearance: &HeaderAppearance) -> Element {
        Element::text(&section.header)
            .id(format!("section-label-{}", section.id))
            .height(Size::Fill)
            .padding(Edges::left(1))
            .style(
                Style::new()
                    .background(appearance.background.clone())
                    .foreground(appearance.text_color.clone())
                    .text_style(appearance.text_style),
            )
    }
}
