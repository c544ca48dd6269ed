//! The compact repeat-rule grammar.
//!
//! A rule is a whitespace separated list of tokens whose first token picks the
//! kind of recurrence:
//!
//! | Rule             | Meaning                                              |
//! |------------------|------------------------------------------------------|
//! | `d 7`            | every 7 days (1..=366)                               |
//! | `y`              | every year                                           |
//! | `w 1,3`          | on Mondays and Wednesdays (ISO numbers, 1 = Monday)  |
//! | `m 1,-1`         | on the 1st and the last day of every month           |
//! | `m -2,15 3,6,9`  | on the second-to-last day and the 15th of Mar/Jun/Sep |
//!
//! Numeric lists are comma separated without spaces. `-1` and `-2` are only
//! valid day-of-month values and count back from the end of the month.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::RuleParseError;

pub const MAX_DAILY_INTERVAL: u32 = 366;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// Every `interval` days.
    Daily { interval: u32 },
    /// Every calendar year.
    Yearly,
    /// ISO weekday numbers, 1 = Monday through 7 = Sunday.
    Weekly { days: BTreeSet<u32> },
    /// Day-of-month values in `-2..=31` without zero, optionally limited to
    /// calendar months `1..=12`.
    MonthlyDays {
        days: BTreeSet<i32>,
        months: Option<BTreeSet<u32>>,
    },
}

impl RecurrenceRule {
    /// Parses a repeat rule string. Never accepts a rule partially.
    pub fn parse(input: &str) -> Result<Self, RuleParseError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let (kind, args) = tokens.split_first().ok_or(RuleParseError::EmptyRule)?;

        match *kind {
            "d" => parse_daily(args),
            "y" => {
                if !args.is_empty() {
                    return Err(RuleParseError::InvalidFormat(
                        "'y' takes no arguments".to_string(),
                    ));
                }
                Ok(RecurrenceRule::Yearly)
            }
            "w" => parse_weekly(args),
            "m" => parse_monthly(args),
            other => Err(RuleParseError::UnknownKind(other.to_string())),
        }
    }

    /// Single-letter token that selects this kind of rule.
    pub fn kind(&self) -> &'static str {
        match self {
            RecurrenceRule::Daily { .. } => "d",
            RecurrenceRule::Yearly => "y",
            RecurrenceRule::Weekly { .. } => "w",
            RecurrenceRule::MonthlyDays { .. } => "m",
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecurrenceRule::parse(s)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceRule::Daily { interval } => write!(f, "d {}", interval),
            RecurrenceRule::Yearly => write!(f, "y"),
            RecurrenceRule::Weekly { days } => write!(f, "w {}", join(days)),
            RecurrenceRule::MonthlyDays { days, months } => {
                write!(f, "m {}", join(days))?;
                if let Some(months) = months {
                    write!(f, " {}", join(months))?;
                }
                Ok(())
            }
        }
    }
}

fn join<T: ToString>(values: &BTreeSet<T>) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn expect_arity(kind: &str, args: &[&str], allowed: &[usize]) -> Result<(), RuleParseError> {
    if allowed.contains(&args.len()) {
        Ok(())
    } else {
        Err(RuleParseError::InvalidFormat(format!(
            "'{}' expects {} argument(s), got {}",
            kind,
            allowed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" or "),
            args.len()
        )))
    }
}

fn parse_daily(args: &[&str]) -> Result<RecurrenceRule, RuleParseError> {
    expect_arity("d", args, &[1])?;

    let interval = args[0]
        .parse::<u32>()
        .ok()
        .filter(|n| (1..=MAX_DAILY_INTERVAL).contains(n))
        .ok_or_else(|| {
            RuleParseError::InvalidFormat(format!(
                "day interval '{}' must be a number from 1 to {}",
                args[0], MAX_DAILY_INTERVAL
            ))
        })?;

    Ok(RecurrenceRule::Daily { interval })
}

fn parse_weekly(args: &[&str]) -> Result<RecurrenceRule, RuleParseError> {
    expect_arity("w", args, &[1])?;

    let days = parse_list(args[0], "weekday", |n: u32| (1..=7).contains(&n))?;
    Ok(RecurrenceRule::Weekly { days })
}

fn parse_monthly(args: &[&str]) -> Result<RecurrenceRule, RuleParseError> {
    expect_arity("m", args, &[1, 2])?;

    let days = parse_list(args[0], "day of month", |n: i32| {
        (-2..=31).contains(&n) && n != 0
    })?;
    let months = args
        .get(1)
        .map(|token| parse_list(token, "month", |n: u32| (1..=12).contains(&n)))
        .transpose()?;

    Ok(RecurrenceRule::MonthlyDays { days, months })
}

/// Parses a comma separated list, rejecting empty items and values outside
/// of `valid`.
fn parse_list<T>(
    token: &str,
    what: &str,
    valid: impl Fn(T) -> bool,
) -> Result<BTreeSet<T>, RuleParseError>
where
    T: FromStr + Ord + Copy,
{
    token
        .split(',')
        .map(|item| {
            item.parse::<T>()
                .ok()
                .filter(|&n| valid(n))
                .ok_or_else(|| {
                    RuleParseError::InvalidFormat(format!("invalid {} '{}'", what, item))
                })
        })
        .collect()
}
