//! # Scheduler Core Library
//!
//! Next-date evaluation for recurring tasks and SQLite storage for a
//! date-ordered task list.
//!
//! ## Features
//!
//! - **Compact Repeat Rules**: `d N`, `y`, `w 1,3` and `m -1,15 3,6` rules
//!   parsed into a typed [`rule::RecurrenceRule`]
//! - **Deterministic Evaluation**: next dates are a pure function of the
//!   reference date, the anchor and the rule
//! - **Task Store**: add, search, edit and complete tasks, with completion of
//!   a recurring task re-anchoring it to its next date
//!
//! ## Core Modules
//!
//! - [`rule`]: Repeat rule grammar and parser
//! - [`recurrence`]: Next-date calculation and `YYYYMMDD` date literals
//! - [`db`]: Database connection and migration management
//! - [`models`]: Task rows and transfer objects
//! - [`repository`]: Data access layer with Repository pattern
//! - [`error`]: Error types for parsing, evaluation and storage
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use scheduler_core::{
//!     db, models::NewTaskData, recurrence::RecurrenceManager,
//!     repository::{SqliteRepository, TaskRepository},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::establish_connection("scheduler.db").await?;
//!     let repo = SqliteRepository::new(pool, RecurrenceManager::with_defaults());
//!
//!     let task_data = NewTaskData {
//!         title: "Pay rent".to_string(),
//!         repeat: "m 1".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let task = repo.add_task(task_data, Local::now().date_naive()).await?;
//!     println!("Created task {} on {}", task.title, task.date);
//!
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod rule;

pub use error::{CoreError, RecurrenceError, RuleParseError};
pub use recurrence::{next_date, RecurrenceConfig, RecurrenceManager};
pub use rule::RecurrenceRule;
