use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A relative date window resolved against "now" at evaluation time.
///
/// The set of windows is closed, so an unknown window is unrepresentable in
/// typed code; the string spellings used by list UIs go through [`FromStr`],
/// which rejects anything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateWindow {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "90days")]
    Last90Days,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl DateWindow {
    /// Whether `date` falls inside the window relative to `now`.
    ///
    /// Boundaries are inclusive: a record dated exactly 7×24h before `now`
    /// is inside `Last7Days`. A record dated after `now` is inside every
    /// relative window.
    pub fn contains(&self, date: NaiveDate, now: DateTime<Utc>) -> bool {
        match self {
            DateWindow::All => true,
            DateWindow::Today => date == now.date_naive(),
            DateWindow::Last7Days => within_days(date, now, 7),
            DateWindow::Last30Days => within_days(date, now, 30),
            DateWindow::Last90Days => within_days(date, now, 90),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DateWindow::All)
    }

    /// The string spelling list UIs use for this window.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateWindow::Today => "today",
            DateWindow::Last7Days => "7days",
            DateWindow::Last30Days => "30days",
            DateWindow::Last90Days => "90days",
            DateWindow::All => "all",
        }
    }
}

fn within_days(date: NaiveDate, now: DateTime<Utc>, days: i64) -> bool {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    now.signed_duration_since(start) <= Duration::days(days)
}

/// Parse error for date-window spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWindowError(pub String);

impl std::fmt::Display for ParseWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown date window: {}", self.0)
    }
}

impl std::error::Error for ParseWindowError {}

impl FromStr for DateWindow {
    type Err = ParseWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(DateWindow::Today),
            "7days" => Ok(DateWindow::Last7Days),
            "30days" => Ok(DateWindow::Last30Days),
            "90days" => Ok(DateWindow::Last90Days),
            "all" => Ok(DateWindow::All),
            other => Err(ParseWindowError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn at_midnight(s: &str) -> DateTime<Utc> {
        date(s).and_time(NaiveTime::MIN).and_utc()
    }

    #[test]
    fn seven_day_boundary_is_inclusive() {
        let now = at_midnight("2025-10-26");
        assert!(DateWindow::Last7Days.contains(date("2025-10-19"), now));
        assert!(!DateWindow::Last7Days.contains(date("2025-10-18"), now));
    }

    #[test]
    fn future_dates_fall_inside_relative_windows() {
        let now = at_midnight("2025-10-26");
        assert!(DateWindow::Last7Days.contains(date("2025-11-01"), now));
    }

    #[test]
    fn today_matches_calendar_day_only() {
        let now = at_midnight("2025-10-26") + Duration::hours(15);
        assert!(DateWindow::Today.contains(date("2025-10-26"), now));
        assert!(!DateWindow::Today.contains(date("2025-10-25"), now));
    }

    #[test]
    fn all_matches_everything() {
        let now = at_midnight("2025-10-26");
        assert!(DateWindow::All.contains(date("1990-01-01"), now));
    }

    #[test]
    fn parses_ui_spellings() {
        assert_eq!("7days".parse::<DateWindow>(), Ok(DateWindow::Last7Days));
        assert_eq!("all".parse::<DateWindow>(), Ok(DateWindow::All));
        assert!("fortnight".parse::<DateWindow>().is_err());
    }

    #[test]
    fn round_trips_through_as_str() {
        for w in [
            DateWindow::Today,
            DateWindow::Last7Days,
            DateWindow::Last30Days,
            DateWindow::Last90Days,
            DateWindow::All,
        ] {
            assert_eq!(w.as_str().parse::<DateWindow>(), Ok(w));
        }
    }
}
