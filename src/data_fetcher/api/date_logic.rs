//! Schedule day determination

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::US::Eastern;
use tracing::info;

use crate::constants::schedule_day::ROLLOVER_HOUR;
use crate::error::AppError;

/// Formats a date the way the schedule sheet writes it: `M/D`, no padding.
pub fn format_schedule_date(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// Whether `now` is late enough to score today's games rather than yesterday's.
pub fn should_use_todays_games<Tz: TimeZone>(now: &DateTime<Tz>) -> bool {
    now.hour() >= ROLLOVER_HOUR
}

/// Determines the schedule day to score, based on a custom date or the
/// current time in US Eastern.
/// Also returns whether the previous day was chosen due to the early-morning rollover.
pub fn determine_fetch_date(custom_date: Option<String>) -> Result<(String, bool), AppError> {
    let now_eastern = Utc::now().with_timezone(&Eastern);
    determine_fetch_date_with_time(custom_date, now_eastern)
}

/// Same as [`determine_fetch_date`] with an injected clock.
///
/// # Arguments
/// * `custom_date` - Optional override in `YYYY-MM-DD` or `M/D` form
/// * `now` - The local time used for the rollover decision
///
/// # Returns
/// * `(String, bool)` - Tuple of (`M/D` date, chosen due to rollover)
pub fn determine_fetch_date_with_time<Tz: TimeZone>(
    custom_date: Option<String>,
    now: DateTime<Tz>,
) -> Result<(String, bool), AppError> {
    if let Some(date) = custom_date {
        return Ok((normalize_custom_date(&date)?, false));
    }

    let today = now.date_naive();
    if should_use_todays_games(&now) {
        let date_str = format_schedule_date(today);
        info!("Using today's date: {date_str}");
        Ok((date_str, false))
    } else {
        let yesterday = today
            .pred_opt()
            .ok_or_else(|| AppError::datetime_parse_error("Date underflow computing previous day"))?;
        let date_str = format_schedule_date(yesterday);
        info!("Using yesterday's date due to {ROLLOVER_HOUR}:00 rollover: {date_str}");
        Ok((date_str, true))
    }
}

/// Accepts `YYYY-MM-DD` or `M/D` (padded or not) and returns `M/D`.
pub fn normalize_custom_date(date: &str) -> Result<String, AppError> {
    let date = date.trim();
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Ok(format_schedule_date(parsed));
    }

    let invalid = || {
        AppError::datetime_parse_error(format!(
            "Invalid date '{date}', expected YYYY-MM-DD or M/D"
        ))
    };
    let (month, day) = date.split_once('/').ok_or_else(invalid)?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    // 2024 is a leap year, so 2/29 is accepted.
    NaiveDate::from_ymd_opt(2024, month, day).ok_or_else(invalid)?;
    Ok(format!("{month}/{day}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eastern(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<chrono_tz::Tz> {
        Eastern.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap()
    }

    #[test]
    fn test_before_rollover_uses_previous_day() {
        let (date, rolled) = determine_fetch_date_with_time(None, eastern(2025, 3, 14, 6, 59)).unwrap();
        assert_eq!(date, "3/13");
        assert!(rolled);
    }

    #[test]
    fn test_at_rollover_uses_today() {
        let (date, rolled) = determine_fetch_date_with_time(None, eastern(2025, 3, 14, 7, 0)).unwrap();
        assert_eq!(date, "3/14");
        assert!(!rolled);
    }

    #[test]
    fn test_late_evening_uses_today() {
        let (date, _) = determine_fetch_date_with_time(None, eastern(2025, 11, 5, 23, 59)).unwrap();
        assert_eq!(date, "11/5");
    }

    #[test]
    fn test_rollover_across_month_and_year() {
        let (date, _) = determine_fetch_date_with_time(None, eastern(2025, 3, 1, 2, 0)).unwrap();
        assert_eq!(date, "2/28");
        let (date, _) = determine_fetch_date_with_time(None, eastern(2026, 1, 1, 0, 30)).unwrap();
        assert_eq!(date, "12/31");
    }

    #[test]
    fn test_utc_instant_is_judged_in_eastern() {
        // 10:30 UTC is 06:30 EDT in summer, still before the rollover.
        let utc = Utc.with_ymd_and_hms(2025, 7, 4, 10, 30, 0).single().unwrap();
        let (date, rolled) =
            determine_fetch_date_with_time(None, utc.with_timezone(&Eastern)).unwrap();
        assert_eq!(date, "7/3");
        assert!(rolled);
    }

    #[test]
    fn test_custom_date_overrides_clock() {
        let now = eastern(2025, 3, 14, 3, 0);
        let (date, rolled) =
            determine_fetch_date_with_time(Some("2024-01-05".to_string()), now).unwrap();
        assert_eq!(date, "1/5");
        assert!(!rolled);
    }

    #[test]
    fn test_normalize_custom_date() {
        assert_eq!(normalize_custom_date("3/14").unwrap(), "3/14");
        assert_eq!(normalize_custom_date("03/04").unwrap(), "3/4");
        assert_eq!(normalize_custom_date("2/29").unwrap(), "2/29");
        assert_eq!(normalize_custom_date("2025-12-01").unwrap(), "12/1");
    }

    #[test]
    fn test_normalize_custom_date_rejects_garbage() {
        for bad in ["", "tomorrow", "13/1", "2/30", "3-14", "2025-02-30"] {
            assert!(
                matches!(normalize_custom_date(bad), Err(AppError::DateTimeParse(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_schedule_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(format_schedule_date(date), "1/2");
    }
}
