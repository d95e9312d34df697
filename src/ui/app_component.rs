use crate::config::Config;
use crate::entities::{Task, TaskFilter, TaskId};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::repositories::{TaskError, TaskRepository};
use crate::ui::components::{ActionBar, DialogComponent, StatusBar, TaskListComponent};
use crate::ui::core::{
    actions::{Action, ModalState},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::{Clock, SystemClock, DEFAULT_TIMESTAMP_FORMAT};
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Application state separate from UI concerns.
///
/// Every change goes through one of the transition methods below; components
/// only ever see copies of this data.
#[derive(Debug, Clone)]
pub struct AppState {
    pub tasks: TaskRepository,
    pub modal: ModalState,
    /// Last task targeted for editing, kept after the dialog closes
    pub editing_task_id: Option<TaskId>,
    /// Last task targeted for deletion, kept after the dialog closes
    pub deleting_task_id: Option<TaskId>,
    pub filter: TaskFilter,
    pub timestamp_format: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TaskFilter::default(), DEFAULT_TIMESTAMP_FORMAT.to_string())
    }
}

impl AppState {
    pub fn new(filter: TaskFilter, timestamp_format: String) -> Self {
        Self {
            tasks: TaskRepository::new(),
            modal: ModalState::Closed,
            editing_task_id: None,
            deleting_task_id: None,
            filter,
            timestamp_format,
        }
    }

    /// Tasks matching the active filter, in creation order
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks.filtered(self.filter)
    }

    pub fn open_add_dialog(&mut self) {
        self.modal = ModalState::AddingTask;
    }

    /// Open the edit dialog pre-filled with the task's title.
    ///
    /// Returns false, leaving the state untouched, if no task has that id.
    pub fn open_edit_dialog(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.get_by_id(id) else {
            return false;
        };

        self.modal = ModalState::EditingTask {
            id,
            current_title: task.title.clone(),
        };
        self.editing_task_id = Some(id);
        true
    }

    pub fn open_delete_dialog(&mut self, id: TaskId) {
        self.deleting_task_id = Some(id);
        self.modal = ModalState::ConfirmingDelete { id };
    }

    /// Close whichever dialog is open. Edit/delete targets are left as they were.
    pub fn close_dialog(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Append a new task and close the dialog.
    ///
    /// An empty title is rejected and the dialog stays open.
    pub fn add_task(&mut self, title: &str, now: &DateTime<Local>) -> Result<TaskId, TaskError> {
        let id = self.tasks.create(title, now, &self.timestamp_format)?.id;
        self.close_dialog();
        Ok(id)
    }

    /// Replace a task's title and close the dialog.
    ///
    /// Returns `Ok(false)` if no task has that id. An empty title is rejected
    /// and the dialog stays open.
    pub fn edit_task(&mut self, id: TaskId, title: &str) -> Result<bool, TaskError> {
        let updated = self.tasks.update_title(id, title)?;
        self.close_dialog();
        Ok(updated)
    }

    /// Remove a task and close the dialog. Unknown ids leave the collection as is.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.tasks.delete(id);
        self.close_dialog();
        removed
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> Option<bool> {
        self.tasks.toggle_completed(id)
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn cycle_filter(&mut self) -> TaskFilter {
        self.filter = self.filter.next();
        self.filter
    }
}

pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    icons: IconService,
    clock: Box<dyn Clock>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        Self::with_clock(config, logger, Box::new(SystemClock))
    }

    pub fn with_clock(config: &Config, logger: Logger, clock: Box<dyn Clock>) -> Self {
        let mut task_list = TaskListComponent::new();
        task_list.set_display_config(config.display.clone());

        let mut app = Self {
            task_list,
            dialog: DialogComponent::new(),
            state: AppState::new(config.ui.default_filter, config.display.timestamp_format.clone()),
            icons: IconService::new(config.display.icon_theme),
            clock,
            logger,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Push the current state down to every component
    fn sync_component_data(&mut self) {
        let filtered: Vec<Task> = self.state.filtered_tasks().into_iter().cloned().collect();
        self.task_list
            .update_data(filtered, self.state.filter, self.icons.clone());

        self.dialog.set_modal(&self.state.modal);
        self.dialog.set_icons(self.icons.clone());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('a') => Action::OpenAddDialog,
            KeyCode::Char('f') => Action::CycleFilter,
            KeyCode::Char('1') => Action::SetFilter(TaskFilter::All),
            KeyCode::Char('2') => Action::SetFilter(TaskFilter::Completed),
            KeyCode::Char('3') => Action::SetFilter(TaskFilter::Incomplete),
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('q') | KeyCode::Esc => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    fn describe_task(&self, id: TaskId) -> String {
        match self.state.tasks.get_by_id(id) {
            Some(task) => format!("ID {} '{}'", id, task.title),
            None => format!("ID {} [unknown]", id),
        }
    }

    /// Apply an action to the application state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::OpenAddDialog => {
                self.logger.log("Dialog: Opening add task dialog".to_string());
                self.state.open_add_dialog();
                Action::None
            }
            Action::OpenEditDialog(id) => {
                if self.state.open_edit_dialog(id) {
                    self.logger
                        .log(format!("Dialog: Editing task {}", self.describe_task(id)));
                } else {
                    log::warn!("Dialog: Cannot edit task {}, not found", id);
                }
                Action::None
            }
            Action::OpenDeleteDialog(id) => {
                self.logger
                    .log(format!("Dialog: Confirming delete of task {}", self.describe_task(id)));
                self.state.open_delete_dialog(id);
                Action::None
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog".to_string());
                self.state.close_dialog();
                Action::None
            }
            Action::CreateTask { title } => {
                let now = self.clock.now();
                match self.state.add_task(&title, &now) {
                    Ok(id) => self.logger.log(format!("Task: Created task ID {} '{}'", id, title)),
                    Err(e) => log::debug!("Task: Rejected new task: {}", e),
                }
                Action::None
            }
            Action::EditTask { id, title } => {
                let description = self.describe_task(id);
                match self.state.edit_task(id, &title) {
                    Ok(true) => self
                        .logger
                        .log(format!("Task: Renamed task {} -> '{}'", description, title)),
                    Ok(false) => log::warn!("Task: Cannot edit task {}, not found", id),
                    Err(e) => log::debug!("Task: Rejected edit of task {}: {}", id, e),
                }
                Action::None
            }
            Action::DeleteTask(id) => {
                match self.state.delete_task(id) {
                    Some(task) => self
                        .logger
                        .log(format!("Task: Deleted task ID {} '{}'", task.id, task.title)),
                    None => log::warn!("Task: Cannot delete task {}, not found", id),
                }
                Action::None
            }
            Action::ToggleComplete(id) => {
                match self.state.toggle_complete(id) {
                    Some(completed) => self.logger.log(format!(
                        "Task: Marked task {} as {}",
                        self.describe_task(id),
                        if completed { "completed" } else { "incomplete" }
                    )),
                    None => log::warn!("Task: Cannot toggle task {}, not found", id),
                }
                Action::None
            }
            Action::SetFilter(filter) => {
                self.state.set_filter(filter);
                self.logger.log(format!("Filter: Showing {} tasks", filter));
                Action::None
            }
            Action::CycleFilter => {
                let filter = self.state.cycle_filter();
                self.logger.log(format!("Filter: Showing {} tasks", filter));
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger
                    .log(format!("Icons: Switched to {:?} theme", self.icons.theme()));
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    let task_list_action = self.task_list.handle_key_events(key);
                    if !matches!(task_list_action, Action::None) {
                        task_list_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        // Process action through component hierarchy
        let action = self.dialog.update(action);
        let action = self.task_list.update(action);

        // Handle app-level actions
        let _final_action = self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        ActionBar::render_title(f, areas.title, &self.icons);
        ActionBar::render(f, areas.action_bar, self.state.filter, &self.icons);
        self.task_list.render(f, areas.task_list);
        StatusBar::render(
            f,
            areas.status_bar,
            self.state.tasks.len(),
            self.state.tasks.completed_count(),
            self.dialog.is_visible(),
        );

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
