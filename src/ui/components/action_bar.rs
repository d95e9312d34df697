//! Title line and action bar: the add button and the filter selector

use crate::constants::{ADD_TASK_LABEL, APP_TITLE};
use crate::entities::TaskFilter;
use crate::icons::IconService;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Action bar component
pub struct ActionBar;

impl ActionBar {
    /// Render the application title
    pub fn render_title(f: &mut Frame, area: Rect, icons: &IconService) {
        let title = Paragraph::new(Line::from(Span::styled(
            format!("{} {}", icons.app_title(), APP_TITLE),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);

        f.render_widget(title, area);
    }

    /// Render the "Add Task" button and the filter selector
    pub fn render(f: &mut Frame, area: Rect, filter: TaskFilter, icons: &IconService) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)])
            .split(area);

        let add_button = Paragraph::new(Line::from(vec![
            Span::styled("a ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{} {}", icons.add(), ADD_TASK_LABEL),
                Style::default().fg(Color::White),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(add_button, chunks[0]);
        f.render_widget(Self::filter_selector(filter, icons), chunks[1]);
    }

    fn filter_selector(active: TaskFilter, icons: &IconService) -> Paragraph<'static> {
        let mut spans = Vec::new();
        for (index, filter) in TaskFilter::ALL.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("{} ", index + 1),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));

            let style = if *filter == active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(filter.label(), style));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} Filter (f) ", icons.filter()))
                .style(Style::default().fg(Color::Gray)),
        )
    }
}
