use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, UpdateTaskData};
use crate::recurrence::{format_date, parse_date, RecurrenceManager};
use crate::repository::SqliteRepository;
use crate::rule::RecurrenceRule;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Sqlite, Transaction};
use tracing::info;

/// `chrono` format of a date typed into a search box, e.g. `24.01.2024`.
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let title = validate_title(&data.title)?;
        let repeat = data.repeat.trim();
        let date = resolve_task_date(self.recurrence(), data.date.as_deref(), repeat, today)?;

        let mut tx = self.pool().begin().await?;

        let id = sqlx::query(
            "INSERT INTO scheduler (date, title, comment, repeat) VALUES ($1, $2, $3, $4)",
        )
        .bind(&date)
        .bind(title)
        .bind(&data.comment)
        .bind(repeat)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let task = Self::find_task_in_transaction(&mut tx, id).await?;
        tx.commit().await?;

        info!(id = task.id, date = %task.date, "task added");
        Ok(task)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn find_tasks(&self, search: Option<&str>) -> Result<Vec<Task>, CoreError> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let tasks = match search {
            None => {
                sqlx::query_as("SELECT * FROM scheduler ORDER BY date, id")
                    .fetch_all(self.pool())
                    .await?
            }
            Some(term) => match NaiveDate::parse_from_str(term, SEARCH_DATE_FORMAT) {
                Ok(date) => {
                    sqlx::query_as("SELECT * FROM scheduler WHERE date = $1 ORDER BY id")
                        .bind(format_date(date))
                        .fetch_all(self.pool())
                        .await?
                }
                Err(_) => {
                    // SQLite's LOWER only folds ASCII, so text matching happens here.
                    let needle = term.to_lowercase();
                    let all: Vec<Task> = sqlx::query_as("SELECT * FROM scheduler ORDER BY date, id")
                        .fetch_all(self.pool())
                        .await?;
                    all.into_iter()
                        .filter(|task| matches_search(task, &needle))
                        .collect()
                }
            },
        };
        Ok(tasks)
    }

    async fn update_task(
        &self,
        id: i64,
        data: UpdateTaskData,
        today: NaiveDate,
    ) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;

        let current: Task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let title = data.title.unwrap_or(current.title);
        let title = validate_title(&title)?;
        let comment = data.comment.unwrap_or(current.comment);
        let repeat = data.repeat.unwrap_or(current.repeat);
        let repeat = repeat.trim();
        let date = data.date.unwrap_or(current.date);
        let date = resolve_task_date(self.recurrence(), Some(&date), repeat, today)?;

        sqlx::query(
            "UPDATE scheduler SET date = $1, title = $2, comment = $3, repeat = $4 WHERE id = $5",
        )
        .bind(&date)
        .bind(title)
        .bind(&comment)
        .bind(repeat)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let task = Self::find_task_in_transaction(&mut tx, id).await?;
        tx.commit().await?;
        info!(id, date = %task.date, "task updated");
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        info!(id, "task deleted");
        Ok(())
    }

    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        if !task.is_recurring() {
            sqlx::query("DELETE FROM scheduler WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            info!(id, "one-off task done and removed");
            return Ok(CompletionResult::Removed(task));
        }

        let next = self
            .recurrence()
            .next_date(today, &task.date, &task.repeat)?;

        sqlx::query("UPDATE scheduler SET date = $1 WHERE id = $2")
            .bind(&next)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let updated = Self::find_task_in_transaction(&mut tx, id).await?;
        tx.commit().await?;

        info!(id, from = %task.date, to = %updated.date, "recurring task rescheduled");
        Ok(CompletionResult::Rescheduled {
            previous_date: task.date,
            task: updated,
        })
    }
}

impl SqliteRepository {
    /// Reads back a row written earlier in the same transaction.
    async fn find_task_in_transaction(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<Task, CoreError> {
        sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }
}

fn validate_title(title: &str) -> Result<&str, CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::InvalidInput("task title is empty".to_string()));
    }
    Ok(title)
}

/// Decides the date a task is stored under.
///
/// An empty date means today. A date in the past moves to today for a one-off
/// task, or to the rule's next date after today for a recurring one. A
/// non-empty rule must parse even when the date needs no moving.
pub(crate) fn resolve_task_date(
    recurrence: &RecurrenceManager,
    date: Option<&str>,
    repeat: &str,
    today: NaiveDate,
) -> Result<String, CoreError> {
    let literal = match date.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => format_date(today),
    };
    let parsed = parse_date(&literal)?;

    let repeat = repeat.trim();
    if !repeat.is_empty() {
        RecurrenceRule::parse(repeat)?;
    }

    if parsed >= today {
        Ok(literal)
    } else if repeat.is_empty() {
        Ok(format_date(today))
    } else {
        Ok(recurrence.next_date(today, &literal, repeat)?)
    }
}

/// Case-insensitive substring match on title or comment. `needle` is
/// already lower-cased.
fn matches_search(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle) || task.comment.to_lowercase().contains(needle)
}
