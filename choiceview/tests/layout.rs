use choiceview::{layout, Align, Edges, Element, Justify, Rect, Size};

#[test]
fn column_splits_space_between_fill_children() {
    let root = Element::col()
        .id("root")
        .height(Size::Fill)
        .child(Element::box_().id("a").height(Size::Fill))
        .child(Element::box_().id("b").height(Size::Fill));

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(*result.get("a").unwrap(), Rect::new(0, 0, 10, 5));
    assert_eq!(*result.get("b").unwrap(), Rect::new(0, 5, 10, 5));
}

#[test]
fn fixed_child_keeps_its_height() {
    let root = Element::col()
        .id("root")
        .height(Size::Fill)
        .child(Element::box_().id("top").height(Size::Fixed(3)))
        .child(Element::box_().id("rest").height(Size::Fill));

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(result.get("top").unwrap().height, 3);
    assert_eq!(result.get("rest").unwrap().y, 3);
    assert_eq!(result.get("rest").unwrap().height, 7);
}

#[test]
fn gap_spaces_children_apart() {
    let root = Element::col()
        .id("root")
        .height(Size::Fill)
        .gap(2)
        .child(Element::box_().id("a").height(Size::Fixed(1)))
        .child(Element::box_().id("b").height(Size::Fixed(1)))
        .child(Element::box_().id("c").height(Size::Fixed(1)));

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(result.get("a").unwrap().y, 0);
    assert_eq!(result.get("b").unwrap().y, 3);
    assert_eq!(result.get("c").unwrap().y, 6);
}

#[test]
fn margin_insets_the_child() {
    let root = Element::col()
        .id("root")
        .height(Size::Fill)
        .child(
            Element::box_()
                .id("inner")
                .height(Size::Fixed(2))
                .margin(Edges::vertical(1)),
        );

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(*result.get("inner").unwrap(), Rect::new(0, 1, 10, 2));
}

#[test]
fn padding_shrinks_the_content_area() {
    let root = Element::col()
        .id("root")
        .height(Size::Fill)
        .padding(Edges::all(1))
        .child(Element::box_().id("inner").height(Size::Fill));

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(*result.get("inner").unwrap(), Rect::new(1, 1, 8, 8));
}

#[test]
fn row_lays_children_left_to_right() {
    let root = Element::row()
        .id("root")
        .height(Size::Fixed(1))
        .child(Element::box_().id("left").width(Size::Fixed(4)))
        .child(Element::box_().id("right"));

    let result = layout(&root, Rect::new(0, 0, 10, 1));
    assert_eq!(*result.get("left").unwrap(), Rect::new(0, 0, 4, 1));
    assert_eq!(*result.get("right").unwrap(), Rect::new(4, 0, 6, 1));
}

#[test]
fn justify_end_pushes_children_down() {
    let root = Element::col()
        .id("root")
        .height(Size::Fill)
        .justify(Justify::End)
        .child(Element::box_().id("a").height(Size::Fixed(2)));

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(result.get("a").unwrap().y, 8);
}

#[test]
fn align_center_centers_the_cross_axis() {
    let root = Element::col()
        .id("root")
        .height(Size::Fill)
        .align(Align::Center)
        .child(
            Element::box_()
                .id("a")
                .width(Size::Fixed(4))
                .height(Size::Fixed(1)),
        );

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(result.get("a").unwrap().x, 3);
}

#[test]
fn auto_height_hugs_text_content() {
    let root = Element::col()
        .id("root")
        .height(Size::Fill)
        .child(Element::text("hello").id("label").height(Size::Auto))
        .child(Element::box_().id("rest").height(Size::Fill));

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(result.get("label").unwrap().height, 1);
    assert_eq!(result.get("rest").unwrap().height, 9);
}
