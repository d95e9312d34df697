//! In-memory task collection.

use chrono::{DateTime, Local};

use crate::entities::{Task, TaskFilter, TaskId};
use crate::utils::datetime::{epoch_millis, format_timestamp};

/// Errors raised by task mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
}

/// Ordered collection of tasks for the current session.
///
/// Insertion order is display order. Ids are issued from the creation instant
/// and bumped past the last issued id, so they stay unique even when two tasks
/// are created within the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct TaskRepository {
    tasks: Vec<Task>,
    last_id: Option<TaskId>,
}

impl TaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all tasks in insertion order.
    pub fn get_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a single task by id.
    pub fn get_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Tasks matching `filter`, in insertion order.
    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    /// Append a new incomplete task created at `created`.
    pub fn create(
        &mut self,
        title: &str,
        created: &DateTime<Local>,
        timestamp_format: &str,
    ) -> Result<&Task, TaskError> {
        let title = normalize_title(title)?;
        let id = self.next_id(created);
        self.last_id = Some(id);

        self.tasks
            .push(Task::new(id, title, format_timestamp(created, timestamp_format)));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Replace the title of a task, leaving every other field untouched.
    ///
    /// Returns `Ok(false)` when no task has the given id.
    pub fn update_title(&mut self, id: TaskId, title: &str) -> Result<bool, TaskError> {
        let title = normalize_title(title)?;
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.title = title;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Flip the completion flag of a task and return its new value.
    pub fn toggle_completed(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Remove a task, returning it if it existed.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    fn next_id(&self, created: &DateTime<Local>) -> TaskId {
        let candidate = epoch_millis(created);
        match self.last_id {
            Some(TaskId(last)) if candidate <= last => TaskId(last + 1),
            _ => TaskId(candidate),
        }
    }
}

fn normalize_title(title: &str) -> Result<String, TaskError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
