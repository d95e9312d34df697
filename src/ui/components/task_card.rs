use crate::config::DisplayConfig;
use crate::entities::Task;
use crate::icons::IconService;
use crate::ui::core::Action;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Display of a single task: checkbox, title, creation timestamp and the
/// edit/delete affordances. Every intent is reported as an action carrying
/// the task id; the card itself holds no state beyond the record it shows.
#[derive(Debug, Clone)]
pub struct TaskCard {
    pub task: Task,
    pub icons: IconService,
}

impl TaskCard {
    pub fn new(task: Task, icons: IconService) -> Self {
        Self { task, icons }
    }

    /// Map a key pressed while this card is selected to the matching intent
    pub fn handle_key_events(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('x') => Action::ToggleComplete(self.task.id),
            KeyCode::Char('e') => Action::OpenEditDialog(self.task.id),
            KeyCode::Char('d') | KeyCode::Delete => Action::OpenDeleteDialog(self.task.id),
            _ => Action::None,
        }
    }

    pub fn render(&self, selected: bool, display_config: &DisplayConfig) -> ListItem<'static> {
        let checkbox_style = if self.task.completed {
            Style::default().fg(Color::Green)
        } else if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let title_style = match (self.task.completed, selected) {
            (true, true) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::BOLD),
            (true, false) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
            (false, true) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(Color::White),
        };

        let mut title_spans = vec![
            Span::styled(format!("{} ", self.icons.checkbox(self.task.completed)), checkbox_style),
            Span::styled(self.task.title.clone(), title_style),
        ];

        // Action hints only on the focused card
        if selected {
            let hint_style = Style::default().fg(Color::DarkGray);
            title_spans.push(Span::styled(format!("  {} e", self.icons.edit()), hint_style));
            title_spans.push(Span::styled(format!("  {} d", self.icons.delete()), hint_style));
        }

        let mut lines = vec![Line::from(title_spans)];
        if display_config.show_timestamps {
            lines.push(Line::from(Span::styled(
                format!("    {} {}", self.icons.timestamp(), self.task.created_at),
                Style::default().fg(Color::DarkGray),
            )));
        }

        ListItem::new(lines)
    }
}
