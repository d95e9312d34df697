//! Reusable UI components

pub mod action_bar;
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;
pub mod task_card;
pub mod task_list_component;

// Component exports
pub use action_bar::ActionBar;
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
pub use task_card::TaskCard;
pub use task_list_component::TaskListComponent;
