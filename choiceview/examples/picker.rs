//! Interactive picker demo. Arrow keys move the cursor, Enter toggles the
//! highlight, `q` or Esc quits. Run with `cargo run --example picker`.

use std::fs::File;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};

use choiceview::{
    find_element_mut, Choice, ChoiceCollection, ChoiceView, ChoiceViewBuilder, Color, Section,
    SectionGroup, Style, Terminal, ViewDecor,
};

fn menu() -> ChoiceCollection {
    vec![
        SectionGroup::new(Section::new("hot", "Hot drinks"))
            .item(Choice::new("espresso", "Espresso"))
            .item(Choice::new("cappuccino", "Cappuccino"))
            .item(Choice::new("tea", "Tea")),
        SectionGroup::new(Section::new("cold", "Cold drinks"))
            .item(Choice::new("lemonade", "Lemonade"))
            .item(Choice::new("cola", "Cola")),
    ]
}

fn positions(collection: &ChoiceCollection) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (s, group) in collection.iter().enumerate() {
        for i in 0..group.items.len() {
            out.push((s, i));
        }
    }
    out
}

fn main() -> std::io::Result<()> {
    if let Ok(file) = File::create("picker.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let collection = menu();
    let positions = positions(&collection);

    let mut view = ChoiceView::new(ChoiceViewBuilder::new(Some(
        ViewDecor::new().title("What are you having?"),
    )));
    view.set_choices(collection);
    view.on_selection(|choice| log::debug!("picked {}", choice.id));

    let mut terminal = Terminal::new()?;
    let mut cursor = 0usize;

    loop {
        // Mark the cursor row on a copy of the tree; selection highlights
        // stay owned by the view itself.
        let mut root = view.element().clone();
        if let Some((s, i)) = positions.get(cursor) {
            let id = format!("choice-cell-{s}-{i}");
            if let Some(cell) = find_element_mut(&mut root, &id) {
                if !cell.selected {
                    cell.style = Style::new().background(Color::rgb(60, 60, 60));
                }
            }
        }
        terminal.render(&root)?;

        let timeout = if terminal.is_animating() {
            Some(Duration::from_millis(16))
        } else {
            Some(Duration::from_millis(250))
        };

        for event in terminal.poll(timeout)? {
            let Event::Key(key) = event else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => cursor = cursor.saturating_sub(1),
                KeyCode::Down => {
                    cursor = (cursor + 1).min(positions.len().saturating_sub(1));
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(&(s, i)) = positions.get(cursor) {
                        view.activate(s, i);
                    }
                }
                _ => {}
            }
        }
    }
}
