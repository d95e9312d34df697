//! Utility modules for the todolist application.
//!
//! - [`datetime`] - Clock abstraction and creation timestamp formatting

pub mod datetime;
