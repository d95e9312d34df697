//! Modal dialog component shared by the add, edit and delete flows.
//!
//! The component is driven by the [`ModalState`] the app hands it. It owns only
//! the text field being typed into and never touches the task collection: a
//! save is reported back as an [`Action`] for the app to apply.

use crate::constants::{DIALOG_TITLE_ADD, DIALOG_TITLE_EDIT};
use crate::icons::IconService;
use crate::ui::components::dialogs::task_dialogs;
use crate::ui::core::{
    actions::{Action, ModalState},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Reusable task dialog.
///
/// # Modes
/// - **Add** (`ModalState::AddingTask`) - empty title field, "Add New Task"
/// - **Edit** (`ModalState::EditingTask`) - field pre-filled with the current title
/// - **Delete** (`ModalState::ConfirmingDelete`) - confirmation prompt, no field
///
/// Whenever the modal state changes the field resets to the new initial title.
pub struct DialogComponent {
    pub modal: ModalState,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub icons: IconService,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            modal: ModalState::Closed,
            input_buffer: String::new(),
            cursor_position: 0,
            icons: IconService::default(),
        }
    }

    /// Receive the modal state from the app, resetting the field if it changed
    pub fn set_modal(&mut self, modal: &ModalState) {
        if self.modal == *modal {
            return;
        }

        self.modal = modal.clone();
        self.input_buffer = modal.initial_title().to_string();
        self.cursor_position = self.input_buffer.chars().count();
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_visible(&self) -> bool {
        self.modal.is_open()
    }

    /// Title shown on the dialog frame
    pub fn title(&self) -> &'static str {
        match self.modal {
            ModalState::EditingTask { .. } => DIALOG_TITLE_EDIT,
            _ => DIALOG_TITLE_ADD,
        }
    }

    fn handle_submit(&self) -> Action {
        let title = self.input_buffer.trim();
        match &self.modal {
            ModalState::AddingTask if !title.is_empty() => Action::CreateTask {
                title: title.to_string(),
            },
            ModalState::EditingTask { id, .. } if !title.is_empty() => Action::EditTask {
                id: *id,
                title: title.to_string(),
            },
            ModalState::ConfirmingDelete { id } => Action::DeleteTask(*id),
            _ => {
                log::debug!("Dialog: ignoring save with empty title");
                Action::None
            }
        }
    }

    fn byte_position(&self) -> usize {
        self.input_buffer
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_position();
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    fn backspace(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let byte_pos = self.byte_position();
        self.input_buffer.remove(byte_pos);
    }

    fn delete_forward(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            let byte_pos = self.byte_position();
            self.input_buffer.remove(byte_pos);
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.backspace();
                Action::None
            }
            KeyCode::Delete => {
                self.delete_forward();
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.modal {
            ModalState::Closed => Action::None,
            ModalState::ConfirmingDelete { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => self.handle_submit(),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Action::HideDialog,
                _ => Action::None,
            },
            ModalState::AddingTask | ModalState::EditingTask { .. } => self.handle_text_key(key),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.modal {
            ModalState::Closed => {}
            ModalState::AddingTask => task_dialogs::render_task_input_dialog(
                f,
                rect,
                self.icons.add(),
                self.title(),
                &self.input_buffer,
                self.cursor_position,
            ),
            ModalState::EditingTask { .. } => task_dialogs::render_task_input_dialog(
                f,
                rect,
                self.icons.edit(),
                self.title(),
                &self.input_buffer,
                self.cursor_position,
            ),
            ModalState::ConfirmingDelete { .. } => {
                task_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons);
            }
        }
    }
}
