use std::sync::{Arc, Mutex};

use choiceview::{
    find_element, Choice, ChoiceCollection, ChoiceListView, Content, ListMetrics, Section,
    SectionGroup, SelectionMode, Size,
};

fn groceries() -> ChoiceCollection {
    vec![
        SectionGroup::new(Section::new("fruit", "Fruit"))
            .item(Choice::new("apple", "Apple"))
            .item(Choice::new("pear", "Pear"))
            .item(Choice::new("plum", "Plum")),
        SectionGroup::new(Section::new("veg", "Vegetables"))
            .item(Choice::new("leek", "Leek"))
            .item(Choice::new("kale", "Kale")),
    ]
}

#[test]
fn counts_follow_the_collection() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());

    let presenter = view.presenter();
    assert_eq!(presenter.section_count(), 2);
    assert_eq!(presenter.item_count(0), 3);
    assert_eq!(presenter.item_count(1), 2);
    assert_eq!(presenter.total_item_count(), 5);
}

#[test]
fn out_of_range_section_counts_zero_items() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());
    assert_eq!(view.presenter().item_count(7), 0);
}

#[test]
fn cell_label_binds_to_choice_text() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());

    let cell = view.render_cell(0, 1);
    let label = find_element(&cell, "choice-label-pear").unwrap();
    assert_eq!(label.content.text(), Some("Pear"));
}

#[test]
fn out_of_range_cell_is_an_empty_placeholder() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());

    let cell = view.render_cell(9, 9);
    assert_eq!(cell.height, Size::Fixed(0));
    assert!(cell.content.is_none());
}

#[test]
fn header_renders_only_for_grouped_sections() {
    let mut view = ChoiceListView::new();
    view.set_choices(vec![
        SectionGroup::ungrouped().item(Choice::new("solo", "Solo")),
        SectionGroup::new(Section::new("named", "Named")).item(Choice::new("a", "A")),
    ]);

    let bare = view.render_header(0);
    assert_eq!(bare.height, Size::Fixed(0));
    assert!(bare.content.is_none());

    let named = view.render_header(1);
    assert!(find_element(&named, "section-label-named").is_some());
}

#[test]
fn out_of_range_header_is_an_empty_placeholder() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());

    let header = view.render_header(9);
    assert_eq!(header.height, Size::Fixed(0));
    assert!(header.content.is_none());
}

#[test]
fn preferred_height_matches_row_metrics() {
    let mut view = ChoiceListView::new();
    view.set_metrics(ListMetrics {
        item_height: 40,
        item_spacing: 8,
        section_spacing: 4,
        section_height: 20,
    });
    view.set_choices(groceries());

    // 5 rows, 4 inner gaps, 2 headers with spacing above and below.
    assert_eq!(view.preferred_height(), 288);
}

#[test]
fn preferred_height_grows_with_content() {
    let mut view = ChoiceListView::new();
    assert_eq!(view.preferred_height(), 0);

    let mut previous = 0;
    for n in 1..=4 {
        let items = (0..n).map(|i| Choice::new(format!("c{i}"), format!("Choice {i}")));
        view.set_choices(vec![SectionGroup::ungrouped().items(items)]);
        let height = view.preferred_height();
        assert!(height > previous);
        previous = height;
    }
}

#[test]
fn reload_count_tracks_replacements() {
    let mut view = ChoiceListView::new();
    assert_eq!(view.reload_count(), 0);

    view.set_choices(groceries());
    view.set_choices(groceries());
    view.set_choices(Vec::new());
    assert_eq!(view.reload_count(), 3);
}

#[test]
fn change_subscribers_run_inside_set_choices() {
    let mut view = ChoiceListView::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen2 = Arc::clone(&seen);
    view.on_change(move |collection| {
        seen2.lock().unwrap().push(collection.len());
    });

    view.set_choices(groceries());
    view.set_choices(Vec::new());
    assert_eq!(*seen.lock().unwrap(), vec![2, 0]);
}

#[test]
fn activation_toggles_highlight_and_emits_each_time() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());

    let emitted = Arc::new(Mutex::new(Vec::new()));
    let emitted2 = Arc::clone(&emitted);
    view.on_selection(move |choice| {
        emitted2.lock().unwrap().push(choice.id.clone());
    });

    let choice = view.on_item_activated(0, 1).unwrap();
    assert_eq!(choice.id, "pear");
    assert!(view.is_selected(0, 1));

    view.on_item_activated(0, 1).unwrap();
    assert!(!view.is_selected(0, 1));

    // One event per activation, selecting or deselecting alike.
    assert_eq!(*emitted.lock().unwrap(), vec!["pear", "pear"]);
}

#[test]
fn out_of_range_activation_is_ignored() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());

    let emitted = Arc::new(Mutex::new(0u32));
    let emitted2 = Arc::clone(&emitted);
    view.on_selection(move |_| *emitted2.lock().unwrap() += 1);

    assert!(view.on_item_activated(5, 0).is_none());
    assert!(view.on_item_activated(0, 99).is_none());
    assert_eq!(*emitted.lock().unwrap(), 0);
    assert_eq!(view.reload_count(), 1);
}

#[test]
fn replacing_the_collection_clears_selection() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());
    view.on_item_activated(0, 1);
    assert!(view.is_selected(0, 1));

    view.set_choices(groceries());
    assert!(!view.is_selected(0, 1));
}

#[test]
fn single_mode_keeps_one_highlight() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());

    view.on_item_activated(0, 0);
    view.on_item_activated(1, 1);
    assert!(!view.is_selected(0, 0));
    assert!(view.is_selected(1, 1));
}

#[test]
fn multi_mode_accumulates_highlights() {
    let mut view = ChoiceListView::with_mode(SelectionMode::Multi);
    view.set_choices(groceries());

    view.on_item_activated(0, 0);
    view.on_item_activated(1, 1);
    assert!(view.is_selected(0, 0));
    assert!(view.is_selected(1, 1));
}

#[test]
fn rebuilt_surface_carries_one_cell_per_choice() {
    let mut view = ChoiceListView::new();
    view.set_choices(groceries());

    let root = view.element();
    for section in 0..2 {
        let items = view.presenter().item_count(section);
        for item in 0..items {
            let id = format!("choice-cell-{section}-{item}");
            assert!(find_element(root, &id).is_some(), "missing {id}");
        }
    }
    assert!(find_element(root, "choice-cell-1-2").is_none());

    view.set_choices(vec![SectionGroup::ungrouped().item(Choice::new("x", "X"))]);
    let root = view.element();
    assert!(find_element(root, "choice-cell-0-0").is_some());
    assert!(find_element(root, "choice-cell-0-1").is_none());
    assert!(find_element(root, "choice-cell-1-0").is_none());
}

#[test]
fn cell_content_is_absent_only_for_placeholders() {
    let view = ChoiceListView::new();
    let cell = view.render_cell(0, 0);
    assert!(matches!(cell.content, Content::None));
}
