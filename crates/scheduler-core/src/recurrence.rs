use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::RecurrenceError;
use crate::rule::RecurrenceRule;

/// `chrono` format of the `YYYYMMDD` date literal used throughout the scheduler.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Long enough to reach a Feb 29 across a skipped century leap year (2096 -> 2104).
pub const DEFAULT_MAX_SCAN_DAYS: u32 = 8 * 366;

/// Parses an 8-digit `YYYYMMDD` literal.
pub fn parse_date(literal: &str) -> Result<NaiveDate, RecurrenceError> {
    if literal.len() != 8 || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecurrenceError::InvalidDateLiteral(literal.to_string()));
    }
    NaiveDate::parse_from_str(literal, DATE_FORMAT)
        .map_err(|_| RecurrenceError::InvalidDateLiteral(literal.to_string()))
}

/// Formats a date as a `YYYYMMDD` literal.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Number of days in the month containing `date`, taken as the day before the
/// first of the following month.
pub fn days_in_month(date: NaiveDate) -> Option<u32> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

/// Adds whole calendar years. A Feb 29 that does not exist in the target year
/// rolls over to Mar 1.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Configuration for next-date calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurrenceConfig {
    /// Upper bound on the day-by-day scan used by weekly and monthly rules
    pub max_scan_days: u32,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            max_scan_days: DEFAULT_MAX_SCAN_DAYS,
        }
    }
}

/// RecurrenceManager: computes the next date of a recurring task.
///
/// Every call is a pure function of its inputs; the manager only carries the
/// scan bound, so one instance can be shared freely between callers.
#[derive(Debug, Clone, Default)]
pub struct RecurrenceManager {
    config: RecurrenceConfig,
}

impl RecurrenceManager {
    pub fn new(config: RecurrenceConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(RecurrenceConfig::default())
    }

    pub fn config(&self) -> &RecurrenceConfig {
        &self.config
    }

    /// String-level entry point: validates the anchor literal, parses the rule
    /// and returns the next date as a `YYYYMMDD` literal.
    ///
    /// The anchor is validated before the rule, so a bad date wins over a bad
    /// rule when both are wrong.
    pub fn next_date(
        &self,
        now: NaiveDate,
        date: &str,
        repeat: &str,
    ) -> Result<String, RecurrenceError> {
        let anchor = parse_date(date)?;
        let rule = RecurrenceRule::parse(repeat)?;
        self.next_occurrence(now, anchor, &rule).map(format_date)
    }

    /// Finds the first date strictly after `now` on which `rule` recurs,
    /// starting from `anchor`.
    ///
    /// # Behavior
    /// - Daily and yearly rules step from the anchor; an anchor already after
    ///   `now` still advances by one step
    /// - Weekly and monthly rules scan day by day from `max(anchor, now)` and
    ///   give up with `NoMatchFound` after `max_scan_days`
    pub fn next_occurrence(
        &self,
        now: NaiveDate,
        anchor: NaiveDate,
        rule: &RecurrenceRule,
    ) -> Result<NaiveDate, RecurrenceError> {
        let next = match rule {
            RecurrenceRule::Daily { interval } => next_daily(now, anchor, *interval)?,
            RecurrenceRule::Yearly => next_yearly(now, anchor)?,
            RecurrenceRule::Weekly { days } => {
                self.scan_forward(now, anchor, rule, |date| matches_weekday(date, days))?
            }
            RecurrenceRule::MonthlyDays { days, months } => {
                self.scan_forward(now, anchor, rule, |date| {
                    matches_month_day(date, days, months.as_ref())
                })?
            }
        };

        debug!(%now, %anchor, %rule, %next, "computed next occurrence");
        Ok(next)
    }

    fn scan_forward(
        &self,
        now: NaiveDate,
        anchor: NaiveDate,
        rule: &RecurrenceRule,
        matches: impl Fn(NaiveDate) -> bool,
    ) -> Result<NaiveDate, RecurrenceError> {
        let start = anchor.max(now);
        let mut candidate = start;

        for _ in 0..self.config.max_scan_days {
            candidate = candidate
                .succ_opt()
                .ok_or_else(|| RecurrenceError::DateOutOfRange(format!("{} + 1 day", candidate)))?;
            if matches(candidate) {
                return Ok(candidate);
            }
        }

        Err(RecurrenceError::NoMatchFound {
            rule: rule.to_string(),
            after: start,
        })
    }
}

/// Computes the next date using the default scan bound.
pub fn next_date(now: NaiveDate, date: &str, repeat: &str) -> Result<String, RecurrenceError> {
    RecurrenceManager::with_defaults().next_date(now, date, repeat)
}

fn next_daily(now: NaiveDate, anchor: NaiveDate, interval: u32) -> Result<NaiveDate, RecurrenceError> {
    let step = u64::from(interval);
    let days = if anchor > now {
        step
    } else {
        // Smallest multiple of the interval that lands after `now`.
        let elapsed = (now - anchor).num_days().unsigned_abs();
        (elapsed / step + 1) * step
    };

    anchor
        .checked_add_days(Days::new(days))
        .ok_or_else(|| RecurrenceError::DateOutOfRange(format!("{} + {} days", anchor, days)))
}

fn next_yearly(now: NaiveDate, anchor: NaiveDate) -> Result<NaiveDate, RecurrenceError> {
    let step = |date: NaiveDate| {
        add_years(date, 1)
            .ok_or_else(|| RecurrenceError::DateOutOfRange(format!("{} + 1 year", date)))
    };

    if anchor > now {
        return step(anchor);
    }

    let mut date = anchor;
    while date <= now {
        date = step(date)?;
    }
    Ok(date)
}

fn matches_weekday(date: NaiveDate, days: &BTreeSet<u32>) -> bool {
    days.contains(&date.weekday().number_from_monday())
}

fn matches_month_day(date: NaiveDate, days: &BTreeSet<i32>, months: Option<&BTreeSet<u32>>) -> bool {
    if months.is_some_and(|months| !months.contains(&date.month())) {
        return false;
    }

    let dom = date.day() as i32;
    if days.contains(&dom) {
        return true;
    }

    days_in_month(date)
        .map(|len| days.contains(&(dom - len as i32 - 1)))
        .unwrap_or(false)
}
