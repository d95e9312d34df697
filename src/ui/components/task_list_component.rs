use crate::config::DisplayConfig;
use crate::constants::EMPTY_STATE_MESSAGE;
use crate::entities::{Task, TaskFilter};
use crate::icons::IconService;
use crate::ui::components::task_card::TaskCard;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListState, Paragraph},
    Frame,
};

/// The filtered list of task cards, or the empty-state message when nothing matches.
pub struct TaskListComponent {
    pub cards: Vec<TaskCard>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub filter: TaskFilter,
    pub icons: IconService,
    pub display_config: DisplayConfig,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            filter: TaskFilter::default(),
            icons: IconService::default(),
            display_config: DisplayConfig::default(),
        }
    }

    pub fn set_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    /// Replace the visible tasks with an already filtered list
    pub fn update_data(&mut self, tasks: Vec<Task>, filter: TaskFilter, icons: IconService) {
        self.cards = tasks
            .into_iter()
            .map(|task| TaskCard::new(task, icons.clone()))
            .collect();
        self.filter = filter;
        self.icons = icons;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.cards.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.cards.len() {
                self.selected_index = self.cards.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_card(&self) -> Option<&TaskCard> {
        self.cards.get(self.selected_index)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn block_title(&self) -> String {
        format!(" Tasks ({}) · {} ", self.cards.len(), self.filter.label())
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            _ => self
                .get_selected_card()
                .map(|card| card.handle_key_events(key))
                .unwrap_or(Action::None),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.cards.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.cards.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.cards.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.cards.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.block_title());

        if self.cards.is_empty() {
            let empty_state = Paragraph::new(EMPTY_STATE_MESSAGE)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty_state, rect);
            return;
        }

        let items: Vec<_> = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| card.render(index == self.selected_index, &self.display_config))
            .collect();

        let tasks_list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(tasks_list, rect, &mut self.list_state);
    }
}
