use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `scheduler` table.
///
/// `date` is the task's anchor date as a `YYYYMMDD` literal and `repeat` its
/// repeat rule; an empty `repeat` marks a one-off task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl Task {
    pub fn is_recurring(&self) -> bool {
        !self.repeat.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    pub title: String,
    /// `YYYYMMDD`; `None` or empty means today
    pub date: Option<String>,
    pub comment: String,
    pub repeat: String,
}

/// Partial update for a stored task. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub title: Option<String>,
    pub date: Option<String>,
    pub comment: Option<String>,
    /// `Some(String::new())` turns a recurring task into a one-off
    pub repeat: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// A one-off task was done and has been deleted.
    Removed(Task),
    /// A recurring task was moved to its next date.
    Rescheduled { previous_date: String, task: Task },
}
