use super::common::{self, shortcuts};
use crate::constants::{
    CONFIRM_DIALOG_HEIGHT, DIALOG_DELETE_MESSAGE, DIALOG_TITLE_DELETE, DIALOG_WIDTH_PERCENT, INPUT_DIALOG_HEIGHT,
    INPUT_FIELD_TITLE, INPUT_PLACEHOLDER,
};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Render the add/edit dialog with its title field and place the terminal cursor.
pub fn render_task_input_dialog(
    f: &mut Frame,
    area: Rect,
    icon: &str,
    title: &str,
    input_buffer: &str,
    cursor_position: usize,
) {
    let dialog_area = LayoutManager::centered_rect_lines(DIALOG_WIDTH_PERCENT, INPUT_DIALOG_HEIGHT, area);
    f.render_widget(Clear, dialog_area);

    let main_block = common::create_dialog_block(format!("{} {}", icon, title), Color::Cyan);
    let inner_area = main_block.inner(dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title input field (borders + content)
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let (scroll, cursor_column) = input_viewport(input_buffer, cursor_position, chunks[0].width.saturating_sub(2));
    let input_paragraph =
        common::create_input_paragraph(input_buffer, INPUT_FIELD_TITLE, INPUT_PLACEHOLDER).scroll((0, scroll));
    let instructions = common::create_instructions_paragraph(&[
        shortcuts::ENTER_SAVE,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(input_paragraph, chunks[0]);
    f.render_widget(instructions, chunks[2]);

    f.set_cursor_position((chunks[0].x + 1 + cursor_column, chunks[0].y + 1));
}

/// Horizontal scroll and cursor column for a single-line field `width` cells wide.
///
/// Columns are measured in display cells, so wide characters count twice. The
/// field scrolls just enough to keep the cell after the cursor visible.
pub fn input_viewport(input: &str, cursor_position: usize, width: u16) -> (u16, u16) {
    let cursor_cells: usize = input
        .chars()
        .take(cursor_position)
        .map(|ch| ch.width().unwrap_or(0))
        .sum();

    let width = usize::from(width.max(1));
    let scroll = (cursor_cells + 1).saturating_sub(width);
    let column = cursor_cells - scroll;

    (
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(column).unwrap_or(u16::MAX),
    )
}

/// Render the delete confirmation variant of the task dialog.
pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService) {
    let dialog_area = LayoutManager::centered_rect_lines(DIALOG_WIDTH_PERCENT, CONFIRM_DIALOG_HEIGHT, area);
    f.render_widget(Clear, dialog_area);

    let main_block = common::create_dialog_block(format!("{} {}", icons.warning(), DIALOG_TITLE_DELETE), Color::Red);
    let inner_area = main_block.inner(dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let message = Paragraph::new(DIALOG_DELETE_MESSAGE)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    let instructions = common::create_instructions_paragraph(&[
        shortcuts::ENTER_DELETE,
        shortcuts::SEPARATOR,
        shortcuts::N_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(message, chunks[0]);
    f.render_widget(instructions, chunks[2]);
}
