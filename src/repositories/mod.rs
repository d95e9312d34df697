//! Repository layer over the in-memory task collection.
//!
//! Repositories keep entities as plain data while owning the rules for how
//! they are created, changed and removed.

pub mod task;

pub use task::{TaskError, TaskRepository};
