use crate::support::key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todolist::ui::components::DialogComponent;
use todolist::ui::core::{Action, Component, ModalState};
use todolist::TaskId;

fn editing(id: u64, title: &str) -> ModalState {
    ModalState::EditingTask {
        id: TaskId(id),
        current_title: title.to_string(),
    }
}

fn type_into(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char(c))), Action::None);
    }
}

#[test]
fn test_dialog_hidden_by_default() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_add_dialog_submit() {
    let mut dialog = DialogComponent::new();
    dialog.set_modal(&ModalState::AddingTask);
    assert!(dialog.is_visible());
    assert_eq!(dialog.title(), "Add New Task");

    type_into(&mut dialog, "  Buy milk ");
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::CreateTask {
            title: "Buy milk".to_string(),
        }
    );
}

#[test]
fn test_empty_submit_is_ignored() {
    let mut dialog = DialogComponent::new();
    dialog.set_modal(&ModalState::AddingTask);
    type_into(&mut dialog, "   ");

    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(dialog.is_visible());
}

#[test]
fn test_escape_hides() {
    let mut dialog = DialogComponent::new();
    dialog.set_modal(&ModalState::AddingTask);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);
}

#[test]
fn test_edit_dialog_prefills_and_submits() {
    let mut dialog = DialogComponent::new();
    dialog.set_modal(&editing(7, "Buy milk"));

    assert_eq!(dialog.title(), "Edit Task");
    assert_eq!(dialog.input_buffer, "Buy milk");
    assert_eq!(dialog.cursor_position, 8);

    type_into(&mut dialog, "!");
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::EditTask {
            id: TaskId(7),
            title: "Buy milk!".to_string(),
        }
    );
}

#[test]
fn test_field_resets_when_modal_changes() {
    let mut dialog = DialogComponent::new();
    dialog.set_modal(&editing(1, "First"));
    type_into(&mut dialog, " edited");

    // Same modal again keeps what was typed
    dialog.set_modal(&editing(1, "First"));
    assert_eq!(dialog.input_buffer, "First edited");

    // A different target resets the field
    dialog.set_modal(&editing(2, "Second"));
    assert_eq!(dialog.input_buffer, "Second");

    dialog.set_modal(&ModalState::Closed);
    dialog.set_modal(&ModalState::AddingTask);
    assert_eq!(dialog.input_buffer, "");
    assert_eq!(dialog.cursor_position, 0);
}

#[test]
fn test_cursor_editing() {
    let mut dialog = DialogComponent::new();
    dialog.set_modal(&ModalState::AddingTask);
    type_into(&mut dialog, "abd");

    dialog.handle_key_events(key(KeyCode::Left));
    type_into(&mut dialog, "c");
    assert_eq!(dialog.input_buffer, "abcd");

    dialog.handle_key_events(key(KeyCode::Home));
    dialog.handle_key_events(key(KeyCode::Delete));
    assert_eq!(dialog.input_buffer, "bcd");

    dialog.handle_key_events(key(KeyCode::End));
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "bc");

    // Backspace at the start does nothing
    dialog.handle_key_events(key(KeyCode::Home));
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "bc");
    assert_eq!(dialog.cursor_position, 0);
}

#[test]
fn test_multibyte_input() {
    let mut dialog = DialogComponent::new();
    dialog.set_modal(&ModalState::AddingTask);
    type_into(&mut dialog, "café");

    dialog.handle_key_events(key(KeyCode::Left));
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "caé");

    dialog.handle_key_events(key(KeyCode::End));
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "ca");
}

#[test]
fn test_control_chars_are_not_inserted() {
    let mut dialog = DialogComponent::new();
    dialog.set_modal(&ModalState::AddingTask);

    dialog.handle_key_events(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(dialog.input_buffer, "");

    dialog.handle_key_events(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
    assert_eq!(dialog.input_buffer, "A");
}

#[test]
fn test_delete_confirmation_keys() {
    let mut dialog = DialogComponent::new();
    dialog.set_modal(&ModalState::ConfirmingDelete { id: TaskId(3) });

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::DeleteTask(TaskId(3)));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::DeleteTask(TaskId(3)));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::HideDialog);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);

    // Typing does nothing in confirmation mode
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('a'))), Action::None);
    assert_eq!(dialog.input_buffer, "");
}
