use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Midnight UTC on the given date, for deterministic window evaluation.
pub fn at_midnight(date: &str) -> DateTime<Utc> {
    date.parse::<NaiveDate>()
        .expect("test date")
        .and_time(NaiveTime::MIN)
        .and_utc()
}
