use crate::support::key;
use crossterm::event::KeyCode;
use todolist::config::DisplayConfig;
use todolist::icons::{IconService, IconTheme};
use todolist::ui::components::TaskCard;
use todolist::ui::core::Action;
use todolist::{Task, TaskId};

fn card() -> TaskCard {
    let task = Task::new(TaskId(9), "Buy milk".to_string(), "2:05 PM, 16/10/2026".to_string());
    TaskCard::new(task, IconService::new(IconTheme::Ascii))
}

#[test]
fn test_card_key_intents() {
    let card = card();
    assert_eq!(card.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleComplete(TaskId(9)));
    assert_eq!(card.handle_key_events(key(KeyCode::Char('x'))), Action::ToggleComplete(TaskId(9)));
    assert_eq!(card.handle_key_events(key(KeyCode::Char('e'))), Action::OpenEditDialog(TaskId(9)));
    assert_eq!(card.handle_key_events(key(KeyCode::Char('d'))), Action::OpenDeleteDialog(TaskId(9)));
    assert_eq!(card.handle_key_events(key(KeyCode::Delete)), Action::OpenDeleteDialog(TaskId(9)));
    assert_eq!(card.handle_key_events(key(KeyCode::Char('z'))), Action::None);
}

#[test]
fn test_card_height_follows_timestamp_setting() {
    let card = card();

    let with_timestamp = card.render(false, &DisplayConfig::default());
    assert_eq!(with_timestamp.height(), 2);

    let display = DisplayConfig {
        show_timestamps: false,
        ..DisplayConfig::default()
    };
    assert_eq!(card.render(false, &display).height(), 1);
}
