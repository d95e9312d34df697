//! todolist - A terminal task list
//!
//! Create, edit, complete, filter and delete tasks held in memory for the
//! length of a session, from a keyboard-driven interface built with Ratatui.
//!
//! # Modules
//!
//! * [`cli`] - Command line arguments
//! * [`config`] - Application configuration management
//! * [`entities`] - Task record and view filter
//! * [`repositories`] - In-memory task collection and its rules
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Clock and timestamp helpers

/// Command line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task data models
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Repository layer over the in-memory task collection
pub mod repositories;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use entities::{Task, TaskFilter, TaskId};
