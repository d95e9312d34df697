//! Core UI functionality for the todolist application.
//!
//! This module contains the building blocks every screen element shares.
//!
//! - [`actions`] - Actions emitted by components and the modal state sum type
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//!
//! Components translate key events into [`Action`]s. The app component applies
//! each action to its state through a transition method, pushes the new data
//! back to the components and the renderer redraws.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, ModalState};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
