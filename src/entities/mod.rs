pub mod task;

pub use task::{Task, TaskFilter, TaskId};
