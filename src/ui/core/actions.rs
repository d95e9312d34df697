use crate::entities::{TaskFilter, TaskId};

/// Which modal dialog is open, and the task it targets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    AddingTask,
    EditingTask {
        id: TaskId,
        current_title: String,
    },
    ConfirmingDelete {
        id: TaskId,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Initial contents of the dialog's text field
    pub fn initial_title(&self) -> &str {
        match self {
            Self::EditingTask { current_title, .. } => current_title,
            _ => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,

    // Dialogs
    OpenAddDialog,
    OpenEditDialog(TaskId),
    OpenDeleteDialog(TaskId),
    HideDialog,

    // Task operations
    CreateTask {
        title: String,
    },
    EditTask {
        id: TaskId,
        title: String,
    },
    DeleteTask(TaskId),
    ToggleComplete(TaskId),

    // View
    SetFilter(TaskFilter),
    CycleFilter,
    CycleIconTheme,

    // App control
    Quit,
    None,
}
