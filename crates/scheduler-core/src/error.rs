use chrono::NaiveDate;
use thiserror::Error;

/// Why a repeat rule string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("repeat rule is empty")]
    EmptyRule,

    #[error("unknown repeat rule kind '{0}', expected one of d, y, w, m")]
    UnknownKind(String),

    #[error("invalid repeat format: {0}")]
    InvalidFormat(String),
}

/// Errors surfaced while computing the next date of a recurring task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("invalid date '{0}', expected YYYYMMDD")]
    InvalidDateLiteral(String),

    #[error(transparent)]
    InvalidRule(#[from] RuleParseError),

    #[error("repeat rule '{rule}' has no matching date after {after}")]
    NoMatchFound { rule: String, after: NaiveDate },

    #[error("date arithmetic left the supported calendar range: {0}")]
    DateOutOfRange(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
}

impl From<RuleParseError> for CoreError {
    fn from(err: RuleParseError) -> Self {
        CoreError::Recurrence(RecurrenceError::InvalidRule(err))
    }
}
