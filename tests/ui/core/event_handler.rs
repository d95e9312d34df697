use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use todolist::ui::core::{EventHandler, EventType};

fn key_with_kind(kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn test_classify_key_press() {
    let key = key_with_kind(KeyEventKind::Press);
    assert_eq!(EventHandler::classify(Event::Key(key)), EventType::Key(key));
}

#[test]
fn test_classify_ignores_release_and_repeat() {
    assert_eq!(
        EventHandler::classify(Event::Key(key_with_kind(KeyEventKind::Release))),
        EventType::Other
    );
    assert_eq!(
        EventHandler::classify(Event::Key(key_with_kind(KeyEventKind::Repeat))),
        EventType::Other
    );
}

#[test]
fn test_classify_resize() {
    assert_eq!(EventHandler::classify(Event::Resize(120, 40)), EventType::Resize(120, 40));
}

#[test]
fn test_classify_other_events() {
    assert_eq!(EventHandler::classify(Event::FocusGained), EventType::Other);
}
