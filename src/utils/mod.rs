use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::RngExt;
use rand::distr::Alphanumeric;

pub struct DateUtils;

impl DateUtils {
    /// Moves `date` forward to the next occurrence of `weekday`.
    /// Returns `date` unchanged when it already falls on that weekday.
    pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
        let target = weekday.num_days_from_sunday();
        let current = date.weekday().num_days_from_sunday();
        let diff = (target + 7 - current) % 7;

        date + Duration::days(diff as i64)
    }
}

pub struct IdGenerator;

impl IdGenerator {
    /// Fresh opaque fixture id, unique per generated fixture.
    pub fn fixture_id() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect()
    }
}
