use anyhow::Result;
use scheduler_core::models::{CompletionResult, Task};
use serde::Serialize;

#[derive(Serialize)]
struct TaskList<'a> {
    tasks: &'a [Task],
}

#[derive(Serialize)]
struct NextDate<'a> {
    date: &'a str,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Completion<'a> {
    Removed { task: &'a Task },
    Rescheduled { previous_date: &'a str, task: &'a Task },
}

#[derive(Serialize)]
struct Deleted {
    deleted: bool,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub fn tasks(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&TaskList { tasks })?)
}

pub fn task(task: &Task) -> Result<String> {
    Ok(serde_json::to_string_pretty(task)?)
}

pub fn next_date(date: &str) -> Result<String> {
    Ok(serde_json::to_string(&NextDate { date })?)
}

pub fn completion(result: &CompletionResult) -> Result<String> {
    let body = match result {
        CompletionResult::Removed(task) => Completion::Removed { task },
        CompletionResult::Rescheduled {
            previous_date,
            task,
        } => Completion::Rescheduled {
            previous_date,
            task,
        },
    };
    Ok(serde_json::to_string_pretty(&body)?)
}

pub fn deleted(deleted: bool) -> Result<String> {
    Ok(serde_json::to_string(&Deleted { deleted })?)
}

/// `{"error": "..."}`. Falls back to a hand-built body if serialization fails.
pub fn error(message: &str) -> String {
    serde_json::to_string(&ErrorBody { error: message })
        .unwrap_or_else(|_| r#"{"error":"unknown error"}"#.to_string())
}
