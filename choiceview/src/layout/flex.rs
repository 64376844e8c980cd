use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out an element tree into the available rect. Every element's resolved
/// rect is keyed by its id.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = resolve_size(element.width, after_margin.width, element, true);
    let height = resolve_size(element.height, after_margin.height, element, false);
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let border = if element.effective_style().border == Border::None {
        0
    } else {
        1
    };
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    // First pass: fixed space and flex count.
    let mut fixed_total = 0u16;
    let mut flex_count = 0u16;
    for child in children {
        let margin_main = if is_row {
            child.margin.horizontal_total()
        } else {
            child.margin.vertical_total()
        };
        let main = if is_row { child.width } else { child.height };
        match main {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n + margin_main),
            Size::Auto => {
                fixed_total =
                    fixed_total.saturating_add(estimate_size(child, is_row) + margin_main);
            }
            Size::Fill => flex_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let flex_size = if flex_count > 0 {
        remaining / flex_count
    } else {
        0
    };

    // Second pass: sizes per child.
    let mut sizes: Vec<(u16, u16, u16)> = Vec::with_capacity(children.len());
    let mut total = 0u16;
    for child in children {
        let (before, after) = if is_row {
            (child.margin.left, child.margin.right)
        } else {
            (child.margin.top, child.margin.bottom)
        };
        let main = match if is_row { child.width } else { child.height } {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => flex_size,
        };
        let main = if !is_row {
            clamp_height(main, child.min_height, child.max_height)
        } else {
            main
        };
        sizes.push((main, before, after));
        total = total.saturating_add(main + before + after);
    }

    let extra = main_size.saturating_sub(total + gap_total);
    let start_offset = match element.justify {
        Justify::Start => 0,
        Justify::Center => extra / 2,
        Justify::End => extra,
    };

    // Third pass: assign rects.
    let mut offset = start_offset;
    for (i, child) in children.iter().enumerate() {
        let (main, before, after) = sizes[i];

        let (cross_before, cross_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };
        let available_cross = cross_size.saturating_sub(cross_before + cross_after);

        let cross = match if is_row { child.height } else { child.width } {
            Size::Fixed(n) => n,
            Size::Fill => available_cross,
            Size::Auto => {
                if element.align == Align::Stretch {
                    available_cross
                } else {
                    estimate_size(child, !is_row).min(available_cross)
                }
            }
        };
        let cross = if is_row {
            clamp_height(cross, child.min_height, child.max_height)
        } else {
            cross
        };
        let cross = cross.min(available_cross);

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => cross_before,
            Align::Center => cross_before + available_cross.saturating_sub(cross) / 2,
            Align::End => cross_before + available_cross.saturating_sub(cross),
        };

        let main = main.min(main_size.saturating_sub(offset.saturating_add(before)));

        let child_rect = if is_row {
            Rect::new(inner.x + offset + before, inner.y + cross_offset, main, cross)
        } else {
            Rect::new(inner.x + cross_offset, inner.y + offset + before, cross, main)
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += before + main + after + element.gap;
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    };
    if is_width {
        base
    } else {
        clamp_height(base, element.min_height, element.max_height).min(available)
    }
}

fn clamp_height(value: u16, min: Option<u16>, max: Option<u16>) -> u16 {
    let value = min.map_or(value, |m| value.max(m));
    max.map_or(value, |m| value.min(m))
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let border = if element.effective_style().border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content = match &element.content {
        Content::Text(text) => {
            if is_width {
                display_width(text) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| child_extent(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                children
                    .iter()
                    .map(|c| child_extent(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content + padding + border
}

fn child_extent(child: &Element, is_width: bool) -> u16 {
    let own = match if is_width { child.width } else { child.height } {
        Size::Fixed(n) => n,
        _ => estimate_size(child, is_width),
    };
    let margin = if is_width {
        child.margin.horizontal_total()
    } else {
        child.margin.vertical_total()
    };
    own + margin
}
