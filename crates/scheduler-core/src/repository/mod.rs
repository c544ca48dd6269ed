use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, UpdateTaskData};
use crate::recurrence::RecurrenceManager;
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod tasks;

/// Persistence and date rules for scheduled tasks.
///
/// Operations that may move a task's date take `today` explicitly so callers
/// decide what "now" is.
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    /// All tasks ordered by date, or the tasks matching `search`.
    ///
    /// A `DD.MM.YYYY` search selects tasks on that date; anything else is a
    /// case-insensitive substring match on title and comment.
    async fn find_tasks(&self, search: Option<&str>) -> Result<Vec<Task>, CoreError>;
    async fn update_task(
        &self,
        id: i64,
        data: UpdateTaskData,
        today: NaiveDate,
    ) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    /// Marks a task done: one-off tasks are deleted, recurring tasks move to
    /// their next date after `today`.
    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
    recurrence: RecurrenceManager,
}

impl SqliteRepository {
    pub fn new(pool: DbPool, recurrence: RecurrenceManager) -> Self {
        Self { pool, recurrence }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn recurrence(&self) -> &RecurrenceManager {
        &self.recurrence
    }

    /// Closes the pool and waits for every connection to shut down.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
