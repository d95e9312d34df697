//! Constants used throughout the application
//!
//! This module centralizes UI text and other constant values
//! to improve maintainability and consistency.

// Screen text
pub const APP_TITLE: &str = "TODO LIST";
pub const EMPTY_STATE_MESSAGE: &str = "No tasks available.";
pub const ADD_TASK_LABEL: &str = "Add Task";

// Dialog text
pub const DIALOG_TITLE_ADD: &str = "Add New Task";
pub const DIALOG_TITLE_EDIT: &str = "Edit Task";
pub const DIALOG_TITLE_DELETE: &str = "Confirm Delete";
pub const DIALOG_DELETE_MESSAGE: &str = "Are you sure you want to delete this task?";
pub const INPUT_PLACEHOLDER: &str = "Enter your task title";
pub const INPUT_FIELD_TITLE: &str = "Title";

// Files
pub const APP_DIR_NAME: &str = "todolist";
pub const LOCAL_CONFIG_FILE: &str = "todolist.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "todolist.log";

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Width of the modal dialogs as a percentage of the screen
pub const DIALOG_WIDTH_PERCENT: u16 = 60;
/// Height in lines of the add/edit dialog
pub const INPUT_DIALOG_HEIGHT: u16 = 9;
/// Height in lines of the delete confirmation dialog
pub const CONFIRM_DIALOG_HEIGHT: u16 = 7;
