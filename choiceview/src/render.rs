use crate::animation::AnimationState;
use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Rgb};

/// Draw an element tree into the buffer using a previously computed layout.
/// Colors mid-transition are taken from the animation state.
pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    anim: &AnimationState,
) {
    render_element(element, layout, buf, anim);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer, anim: &AnimationState) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let style = element.effective_style();

    let background = anim
        .background(&element.id)
        .or_else(|| style.background.to_rgb());
    if let Some(bg) = background {
        fill_rect(buf, *rect, bg);
    }

    render_border(element, *rect, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, *rect, buf, anim),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, anim);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer, anim: &AnimationState) {
    let style = element.effective_style();
    let fg = anim
        .foreground(&element.id)
        .or_else(|| style.foreground.as_ref().and_then(|c| c.to_rgb()))
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = anim
        .background(&element.id)
        .or_else(|| style.background.to_rgb());

    let border = if style.border == Border::None { 0 } else { 1 };
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    if inner.is_empty() {
        return;
    }

    let line = truncate_to_width(text, inner.width as usize);
    let offset = align_offset(display_width(&line), inner.width as usize, element.text_align);
    let mut x = inner.x + offset as u16;
    let y = inner.y;

    for ch in line.chars() {
        if x >= inner.right() {
            break;
        }
        // Preserve what is underneath when the element has no background.
        let bg = explicit_bg
            .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0)));
        buf.set(
            x,
            y,
            Cell::new(ch)
                .with_fg(fg)
                .with_bg(bg)
                .with_style(style.text_style),
        );

        let width = char_width(ch).max(1) as u16;
        // A double-width glyph also occupies the column to its right; mark
        // it so the flush never writes over the glyph's second half.
        if width == 2 {
            buf.set(
                x + 1,
                y,
                Cell::new(' ')
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(style.text_style)
                    .continuation(),
            );
        }
        x += width;
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer) {
    let style = element.effective_style();
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = style
        .foreground
        .as_ref()
        .and_then(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
    }
}
