use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate, TimeZone, Utc};
use chrono_english::{parse_date_string, Dialect};
use scheduler_core::recurrence::{format_date, parse_date};

/// Today's date, or the `--today` override when given.
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(literal) => Ok(parse_date(literal)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Normalizes a user-typed task date to a `YYYYMMDD` literal.
///
/// Digit-only input and empty input are passed through for the store to
/// validate; anything else is read as an English phrase relative to `today`.
pub fn parse_task_date(input: &str, today: NaiveDate) -> Result<String> {
    let input = input.trim();
    if input.is_empty() || input.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(input.to_string());
    }

    let midnight = today
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("Failed to build a reference time for {}", today))?;
    let reference = Utc.from_utc_datetime(&midnight);

    parse_date_string(input, reference, Dialect::Us)
        .map(|parsed| format_date(parsed.date_naive()))
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", input, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 26).unwrap()
    }

    #[rstest]
    #[case("20240301", "20240301")]
    #[case("  20240301 ", "20240301")]
    #[case("", "")]
    #[case("2024", "2024")]
    #[case("tomorrow", "20240127")]
    fn test_parse_task_date(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_task_date(input, today()).unwrap(), expected);
    }

    #[test]
    fn test_parse_task_date_rejects_gibberish() {
        assert!(parse_task_date("not a date at all", today()).is_err());
    }

    #[test]
    fn test_resolve_today_override() {
        assert_eq!(resolve_today(Some("20240126")).unwrap(), today());
        assert!(resolve_today(Some("2024-01-26")).is_err());
    }
}
