//! Integration tests for the peoplepick picker
//!
//! These tests drive the terminal host the way a user would: events go through
//! `ui::handle_event`, frames are drawn into ratatui's `TestBackend`, and the
//! results are read back from the buffer and the hit map.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use peoplepick::people::{Dataset, Person};
use peoplepick::ui::{self, AppState, ElementId, EventResult, Theme};
use peoplepick::ui::widgets::{HelpBar, NO_MATCHES, PLACEHOLDER};
use peoplepick::widget::{NO_SELECTION, SearchWidget, WidgetConfig};
use ratatui::{Terminal, backend::TestBackend};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const DELAY: Duration = Duration::from_millis(300);

fn alice_and_bob() -> Dataset {
    Dataset::new(vec![
        Person::new("Alice", 1900, 1980, "alice"),
        Person::new("Bob", 1920, 1990, "bob"),
    ])
}

fn make_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(60, 20)).unwrap()
}

fn render(terminal: &mut Terminal<TestBackend>, state: &mut AppState) {
    let theme = Theme::default();
    let hints = HelpBar::default_hints();
    terminal
        .draw(|frame| ui::draw(frame, state, &theme, &hints))
        .unwrap();
}

/// Whole screen as text, one line per row
fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn type_text(state: &mut AppState, text: &str, now: Instant) {
    for c in text.chars() {
        ui::handle_event(
            state,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            now,
        );
    }
}

fn click(state: &mut AppState, id: ElementId, now: Instant) -> EventResult {
    let region = state.hit_map.find(id).unwrap().area;
    ui::handle_event(
        state,
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: region.x,
            row: region.y,
            modifiers: KeyModifiers::NONE,
        }),
        now,
    )
}

#[test]
fn test_initial_frame_has_every_fixed_element() {
    let mut terminal = make_terminal();
    let mut state = AppState::new(SearchWidget::new(alice_and_bob(), WidgetConfig::default()));

    render(&mut terminal, &mut state);

    assert!(state.hit_map.contains(ElementId::Title));
    assert!(state.hit_map.contains(ElementId::SearchInput));
    assert!(state.hit_map.contains(ElementId::SuggestionsList));
    assert_eq!(state.hit_map.find_all(ElementId::SuggestionItem).count(), 2);
    assert!(!state.hit_map.contains(ElementId::NoSuggestionsMessage));

    let text = screen(&terminal);
    assert!(text.contains(NO_SELECTION));
    assert!(text.contains(PLACEHOLDER));
    assert!(text.contains("Alice"));
    assert!(text.contains("Bob"));
}

#[test]
fn test_suggestion_items_carry_person_slugs() {
    let mut terminal = make_terminal();
    let mut state = AppState::new(SearchWidget::new(alice_and_bob(), WidgetConfig::default()));

    render(&mut terminal, &mut state);

    let keys: Vec<_> = state
        .hit_map
        .find_all(ElementId::SuggestionItem)
        .map(|region| (region.row, region.key.clone()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (Some(0), Some("alice".to_string())),
            (Some(1), Some("bob".to_string())),
        ]
    );
}

#[test]
fn test_typing_filters_after_debounce() {
    let mut terminal = make_terminal();
    let mut state = AppState::new(SearchWidget::new(alice_and_bob(), WidgetConfig::default()));
    let start = Instant::now();

    type_text(&mut state, "ali", start);
    assert!(state.widget.is_focused());
    assert_eq!(state.widget.query(), "ali");

    // Focused with a query: the list still shows the stale filtered list
    state.widget.tick(start + DELAY / 2);
    render(&mut terminal, &mut state);
    assert_eq!(state.hit_map.find_all(ElementId::SuggestionItem).count(), 2);

    state.widget.tick(start + DELAY);
    render(&mut terminal, &mut state);
    let items: Vec<_> = state
        .hit_map
        .find_all(ElementId::SuggestionItem)
        .filter_map(|region| region.key.clone())
        .collect();
    assert_eq!(items, vec!["alice".to_string()]);
}

#[test]
fn test_walkthrough_through_terminal_events() {
    let mut terminal = make_terminal();
    let mut state = AppState::new(SearchWidget::new(alice_and_bob(), WidgetConfig::default()));
    let start = Instant::now();

    type_text(&mut state, "ali", start);
    state.widget.tick(start + DELAY);
    render(&mut terminal, &mut state);

    let result = click(&mut state, ElementId::SuggestionItem, start + DELAY);
    assert_eq!(result, EventResult::Selected);
    render(&mut terminal, &mut state);
    assert!(screen(&terminal).contains("Alice (1900 - 1980)"));

    let later = start + DELAY * 2;
    type_text(&mut state, "x", later);
    assert_eq!(state.widget.query(), "alix");
    render(&mut terminal, &mut state);
    assert!(screen(&terminal).contains(NO_SELECTION));
    assert!(!state.hit_map.contains(ElementId::NoSuggestionsMessage));

    state.widget.tick(later + DELAY);
    // Typing keeps focus, so blur to see the filtered list
    ui::handle_event(
        &mut state,
        Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        later + DELAY,
    );
    render(&mut terminal, &mut state);

    assert!(state.hit_map.contains(ElementId::NoSuggestionsMessage));
    assert_eq!(state.hit_map.find_all(ElementId::SuggestionItem).count(), 0);
    assert!(screen(&terminal).contains(NO_MATCHES));
}

#[test]
fn test_focusing_empty_input_reveals_whole_dataset() {
    let mut terminal = make_terminal();
    let mut state = AppState::new(SearchWidget::new(alice_and_bob(), WidgetConfig::default()));
    let start = Instant::now();

    type_text(&mut state, "bob", start);
    state.widget.tick(start + DELAY);
    ui::handle_event(
        &mut state,
        Event::Key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        start + DELAY,
    );
    assert_eq!(state.widget.query(), "");

    // Blurred: the stale "bob" list is still what the widget shows
    ui::handle_event(
        &mut state,
        Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        start + DELAY,
    );
    render(&mut terminal, &mut state);
    assert_eq!(state.hit_map.find_all(ElementId::SuggestionItem).count(), 1);

    click(&mut state, ElementId::SearchInput, start + DELAY);
    assert!(state.widget.is_focused());
    render(&mut terminal, &mut state);
    assert_eq!(state.hit_map.find_all(ElementId::SuggestionItem).count(), 2);
}

#[test]
fn test_keyboard_selection_and_exit_on_select() {
    let mut terminal = make_terminal();
    let widget = SearchWidget::new(alice_and_bob(), WidgetConfig::from_millis(0));
    let mut state = AppState::new(widget).with_exit_on_select(true);
    let now = Instant::now();

    render(&mut terminal, &mut state);
    ui::handle_event(
        &mut state,
        Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
        now,
    );
    let result = ui::handle_event(
        &mut state,
        Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        now,
    );

    assert_eq!(result, EventResult::Selected);
    assert!(state.should_exit);

    let selected = state.into_widget().teardown();
    assert_eq!(selected.map(|person| person.slug), Some("bob".to_string()));
}

#[test]
fn test_clicking_outside_blurs_input() {
    let mut terminal = make_terminal();
    let mut state = AppState::new(SearchWidget::new(alice_and_bob(), WidgetConfig::default()));
    let now = Instant::now();

    render(&mut terminal, &mut state);
    click(&mut state, ElementId::SearchInput, now);
    assert!(state.widget.is_focused());

    click(&mut state, ElementId::Title, now);
    assert!(!state.widget.is_focused());
}

#[test]
fn test_csv_dataset_drives_the_picker() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(
        &path,
        "name,born,died,slug\nAda Lovelace,1815,1852,ada\nCharles Babbage,1791,1871,charles\n",
    )
    .unwrap();

    let dataset = Dataset::load(Some(path.as_path())).unwrap();
    let mut terminal = make_terminal();
    let mut state = AppState::new(SearchWidget::new(dataset, WidgetConfig::from_millis(0)));
    let now = Instant::now();

    type_text(&mut state, "LOVE", now);
    state.widget.tick(now);
    ui::handle_event(
        &mut state,
        Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        now,
    );
    render(&mut terminal, &mut state);

    let result = click(&mut state, ElementId::SuggestionItem, now);
    assert_eq!(result, EventResult::Selected);
    assert_eq!(
        state.widget.selected_person().map(Person::label),
        Some("Ada Lovelace (1815 - 1852)".to_string())
    );
}

#[test]
fn test_builtin_dataset_loads_when_no_path_given() {
    let dataset = Dataset::load(None).unwrap();
    assert!(!dataset.is_empty());
    assert!(
        dataset
            .iter()
            .all(|person| !person.name.to_lowercase().contains('z'))
    );
    assert!(dataset.search("z").is_empty());
}
