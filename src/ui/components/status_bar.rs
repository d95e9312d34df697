//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for the given collection counts
    pub fn status_text(total: usize, completed: usize, dialog_open: bool) -> String {
        let counts = format!("{} tasks · {} completed", total, completed);
        if dialog_open {
            counts
        } else {
            format!(
                "{} │ j/k: move • Space: toggle • e: edit • d: delete • f: filter • q: quit",
                counts
            )
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, total: usize, completed: usize, dialog_open: bool) {
        let status_bar = Paragraph::new(Self::status_text(total, completed, dialog_open))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}
