use choiceview::{
    decor::tokens, layout, render_to_buffer, AnimationState, Buffer, Choice, ChoiceCollection,
    ChoiceView, ChoiceViewBuilder, Color, ItemDecor, Rect, Rgb, Section, SectionGroup, ViewDecor,
};

fn groceries() -> ChoiceCollection {
    vec![
        SectionGroup::new(Section::new("fruit", "Fruit"))
            .item(Choice::new("apple", "Apple"))
            .item(Choice::new("pear", "Pear")),
        SectionGroup::new(Section::new("veg", "Vegetables"))
            .item(Choice::new("leek", "Leek")),
    ]
}

fn draw(view: &ChoiceView, width: u16, height: u16) -> Buffer {
    let result = layout(view.element(), Rect::new(0, 0, width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(view.element(), &result, &mut buf, &AnimationState::new());
    buf
}

#[test]
fn labels_render_one_row_each() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(groceries());

    let buf = draw(&view, 20, 10);
    assert_eq!(buf.row_text(0), " Fruit");
    assert_eq!(buf.row_text(1), " Apple");
    assert_eq!(buf.row_text(2), " Pear");
    assert_eq!(buf.row_text(3), " Vegetables");
    assert_eq!(buf.row_text(4), " Leek");
    assert_eq!(buf.row_text(5), "");
}

#[test]
fn title_renders_above_the_list() {
    let mut view = ChoiceView::with_decor(ViewDecor::new().title("Pick one"));
    view.set_choices(groceries());

    let buf = draw(&view, 20, 10);
    assert!(buf.row_text(0).contains("Pick one"));
    // One-row gap, then the list.
    assert_eq!(buf.row_text(1), "");
    assert_eq!(buf.row_text(2), " Fruit");
}

#[test]
fn empty_collection_renders_nothing() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(Vec::new());

    let buf = draw(&view, 20, 10);
    for y in 0..10 {
        assert_eq!(buf.row_text(y), "");
    }
}

#[test]
fn repeating_set_choices_renders_identically() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(groceries());
    let once = draw(&view, 20, 10);

    view.set_choices(groceries());
    let twice = draw(&view, 20, 10);

    for y in 0..10 {
        for x in 0..20 {
            assert_eq!(once.get(x, y), twice.get(x, y), "cell ({x}, {y}) differs");
        }
    }
    assert_eq!(view.list().reload_count(), 2);
}

#[test]
fn activation_fills_the_cell_with_the_highlight_color() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(groceries());
    view.activate(0, 0);

    let buf = draw(&view, 20, 10);
    let highlight = tokens::HIGHLIGHT_BG.to_rgb().unwrap();

    // Apple's whole row is recolored, including past the label text.
    assert_eq!(buf.get(1, 1).unwrap().bg, highlight);
    assert_eq!(buf.get(15, 1).unwrap().bg, highlight);
    // Pear's row keeps the default background.
    assert_ne!(buf.get(1, 2).unwrap().bg, highlight);
}

#[test]
fn selected_label_uses_the_highlight_text_color() {
    let marker = Color::rgb(10, 200, 30);
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(vec![SectionGroup::ungrouped().item(
        Choice::new("apple", "Apple").decor(ItemDecor::new().highlight_text_color(marker)),
    )]);

    let buf = draw(&view, 20, 10);
    assert_eq!(buf.get(1, 0).unwrap().fg, Rgb::new(170, 170, 170));

    view.activate(0, 0);
    let buf = draw(&view, 20, 10);
    assert_eq!(buf.get(1, 0).unwrap().fg, Rgb::new(10, 200, 30));
}

#[test]
fn wide_glyphs_mark_their_continuation_cells() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(vec![
        SectionGroup::ungrouped().item(Choice::new("jp", "日本"))
    ]);
    view.activate(0, 0);

    let buf = draw(&view, 20, 10);
    let highlight = tokens::HIGHLIGHT_BG.to_rgb().unwrap();

    let glyph = buf.get(1, 0).unwrap();
    assert_eq!(glyph.char, '日');
    assert!(!glyph.wide_continuation);

    // The column to the right of each wide glyph is reserved for its second
    // half; a recolor must not make the flush write a space over it.
    let half = buf.get(2, 0).unwrap();
    assert!(half.wide_continuation);
    assert_eq!(half.bg, highlight);

    assert_eq!(buf.get(3, 0).unwrap().char, '本');
    assert!(buf.get(4, 0).unwrap().wide_continuation);

    assert_eq!(buf.row_text(0), " 日本");
}

#[test]
fn deselection_restores_the_default_colors() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(groceries());

    let before = draw(&view, 20, 10);
    view.activate(0, 0);
    view.activate(0, 0);
    let after = draw(&view, 20, 10);

    assert_eq!(
        before.get(1, 1).unwrap().bg,
        after.get(1, 1).unwrap().bg
    );
    assert_eq!(
        before.get(1, 1).unwrap().fg,
        after.get(1, 1).unwrap().fg
    );
}
