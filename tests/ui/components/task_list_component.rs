use crate::support::key;
use crossterm::event::KeyCode;
use todolist::icons::IconService;
use todolist::ui::components::TaskListComponent;
use todolist::ui::core::{Action, Component};
use todolist::{Task, TaskFilter, TaskId};

fn tasks(count: u64) -> Vec<Task> {
    (1..=count)
        .map(|id| Task::new(TaskId(id), format!("Task {}", id), String::new()))
        .collect()
}

fn list_with(count: u64) -> TaskListComponent {
    let mut list = TaskListComponent::new();
    list.update_data(tasks(count), TaskFilter::All, IconService::default());
    list
}

fn navigate(list: &mut TaskListComponent, code: KeyCode) {
    let action = list.handle_key_events(key(code));
    assert_eq!(list.update(action), Action::None);
}

#[test]
fn test_empty_list() {
    let mut list = TaskListComponent::new();
    assert!(list.is_empty());
    assert!(list.get_selected_card().is_none());
    assert_eq!(list.handle_key_events(key(KeyCode::Char(' '))), Action::None);
    assert_eq!(list.list_state.selected(), None);
}

#[test]
fn test_navigation_wraps() {
    let mut list = list_with(3);
    assert_eq!(list.selected_index, 0);

    navigate(&mut list, KeyCode::Char('k'));
    assert_eq!(list.selected_index, 2);

    navigate(&mut list, KeyCode::Down);
    assert_eq!(list.selected_index, 0);

    navigate(&mut list, KeyCode::Char('j'));
    assert_eq!(list.selected_index, 1);
    assert_eq!(list.list_state.selected(), Some(1));
}

#[test]
fn test_selected_card_receives_keys() {
    let mut list = list_with(3);
    navigate(&mut list, KeyCode::Char('j'));

    assert_eq!(list.handle_key_events(key(KeyCode::Char('e'))), Action::OpenEditDialog(TaskId(2)));
}

#[test]
fn test_selection_clamped_when_list_shrinks() {
    let mut list = list_with(3);
    navigate(&mut list, KeyCode::Char('k'));
    assert_eq!(list.selected_index, 2);

    list.update_data(tasks(1), TaskFilter::All, IconService::default());
    assert_eq!(list.selected_index, 0);
    assert_eq!(list.get_selected_card().map(|card| card.task.id), Some(TaskId(1)));

    list.update_data(Vec::new(), TaskFilter::Completed, IconService::default());
    assert!(list.is_empty());
    assert_eq!(list.filter, TaskFilter::Completed);
    assert_eq!(list.list_state.selected(), None);
}

#[test]
fn test_other_actions_pass_through() {
    let mut list = list_with(1);
    assert_eq!(list.update(Action::Quit), Action::Quit);
}
