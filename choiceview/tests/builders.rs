use std::sync::Arc;

use choiceview::{
    find_element, layout, BasicChoiceView, BasicChoiceViewBuilder, Choice, ChoiceCollection,
    ChoiceView, ChoiceViewBuilder, Element, ItemAppearance, ItemViewBuilder, Rect, Section,
    SectionGroup, Size, TextAlign, ViewDecor, LIST_ID, TITLE_ID,
};

fn flavors() -> ChoiceCollection {
    vec![SectionGroup::new(Section::new("flavors", "Flavors"))
        .item(Choice::new("mint", "Mint"))
        .item(Choice::new("lemon", "Lemon"))
        .item(Choice::new("anise", "Anise"))]
}

#[test]
fn untitled_view_builds_no_title_label() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(flavors());

    assert!(find_element(view.element(), TITLE_ID).is_none());
    assert!(find_element(view.element(), LIST_ID).is_some());
}

#[test]
fn empty_title_counts_as_untitled() {
    let view = ChoiceView::with_decor(ViewDecor::new().title(""));
    assert!(find_element(view.element(), TITLE_ID).is_none());
}

#[test]
fn title_is_pinned_to_the_top_at_fixed_height() {
    let mut view = ChoiceView::with_decor(
        ViewDecor::new()
            .title("Pick one")
            .title_height(2)
            .title_align(TextAlign::Left),
    );
    view.set_choices(flavors());

    let result = layout(view.element(), Rect::new(0, 0, 40, 20));
    let title = result.get(TITLE_ID).unwrap();
    let list = result.get(LIST_ID).unwrap();

    assert_eq!(title.y, 0);
    assert_eq!(title.height, 2);
    // Title, a one-row gap, then the list filling the rest.
    assert_eq!(list.y, 3);
    assert_eq!(list.height, 17);
}

#[test]
fn list_fills_the_container_when_untitled() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(flavors());

    let result = layout(view.element(), Rect::new(0, 0, 40, 20));
    let list = result.get(LIST_ID).unwrap();
    assert_eq!(list.y, 0);
    assert_eq!(list.height, 20);
}

#[test]
fn title_label_carries_decorated_styling() {
    let builder = ChoiceViewBuilder::new(Some(ViewDecor::new().title("Pick one")));
    let appearance = builder.appearance();
    let title = builder.title_label(&appearance).unwrap();

    assert_eq!(title.content.text(), Some("Pick one"));
    assert_eq!(title.text_align, TextAlign::Center);
    assert!(title.style.text_style.bold);
}

#[test]
fn basic_list_height_tracks_its_content() {
    let mut view = BasicChoiceView::with_decor(ViewDecor::new().item_height(2));
    view.set_choices(flavors());

    // 3 rows of 2, plus the header row.
    assert_eq!(view.list_height(), 7);

    let result = layout(view.element(), Rect::new(0, 0, 40, 30));
    assert_eq!(result.get(LIST_ID).unwrap().height, 7);

    view.set_choices(vec![
        SectionGroup::ungrouped().item(Choice::new("only", "Only"))
    ]);
    assert_eq!(view.list_height(), 3);
    let result = layout(view.element(), Rect::new(0, 0, 40, 30));
    assert_eq!(result.get(LIST_ID).unwrap().height, 3);
}

#[test]
#[should_panic(expected = "without a style decorator")]
fn basic_builder_requires_a_decorator() {
    let _ = BasicChoiceViewBuilder::new(None);
}

#[test]
fn switching_selection_mode_keeps_the_collection() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(flavors());

    let mut view = view.with_mode(choiceview::SelectionMode::Multi);
    assert_eq!(view.list().presenter().total_item_count(), 3);
    assert!(find_element(view.element(), "choice-label-mint").is_some());

    view.activate(0, 0);
    view.activate(0, 2);
    assert!(view.is_selected(0, 0));
    assert!(view.is_selected(0, 2));
}

struct Starred;

impl ItemViewBuilder for Starred {
    fn build(&self, choice: &Choice, _appearance: &ItemAppearance) -> Element {
        Element::text(format!("* {}", choice.label))
            .id(format!("starred-{}", choice.id))
            .height(Size::Fill)
    }
}

#[test]
fn per_choice_renderer_replaces_the_default_cell() {
    let mut view = ChoiceView::new(ChoiceViewBuilder::default());
    view.set_choices(vec![SectionGroup::ungrouped()
        .item(Choice::new("plain", "Plain"))
        .item(Choice::new("fancy", "Fancy").renderer(Arc::new(Starred)))]);

    let root = view.element();
    let plain = find_element(root, "choice-label-plain").unwrap();
    assert_eq!(plain.content.text(), Some("Plain"));

    let fancy = find_element(root, "starred-fancy").unwrap();
    assert_eq!(fancy.content.text(), Some("* Fancy"));
    assert!(find_element(root, "choice-label-fancy").is_none());
}
