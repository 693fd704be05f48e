//! Localized weekday / month / hour labels for provider timestamps.
//!
//! Timestamps are Unix seconds; the offset is the location's UTC offset in
//! seconds as reported by the provider. The shifted instant is read as UTC,
//! so labels show the location's wall-clock time regardless of the host
//! timezone.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::types::Locale;

pub const LV_WEEKDAYS: [&str; 7] = [
    "Svētdiena",
    "Pirmdiena",
    "Otrdiena",
    "Trešdiena",
    "Ceturdiena",
    "Piektdiena",
    "Sestdiena",
];

pub const LV_MONTHS: [&str; 12] = [
    "Janvāris",
    "Februāris",
    "Marts",
    "Aprils",
    "Maijs",
    "Jūnijs",
    "Jūlijs",
    "Augusts",
    "Septembris",
    "Oktobris",
    "Novembris",
    "Decembris",
];

pub const EN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormatter {
    locale: Locale,
}

impl DateFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn weekday_names(&self) -> &'static [&'static str; 7] {
        match self.locale {
            Locale::Lv => &LV_WEEKDAYS,
            Locale::En => &EN_WEEKDAYS,
        }
    }

    pub fn month_names(&self) -> &'static [&'static str; 12] {
        match self.locale {
            Locale::Lv => &LV_MONTHS,
            Locale::En => &EN_MONTHS,
        }
    }

    /// "Weekday day, Month", e.g. "Pirmdiena 1, Maijs"
    pub fn get_date(&self, date_unix: i64, timezone: i32) -> String {
        let date = shifted(date_unix, timezone);
        format!(
            "{} {}, {}",
            self.weekday_label(&date),
            date.day(),
            self.month_label(&date)
        )
    }

    /// Hour of day as "H:00" (midnight is "0:00")
    pub fn get_hours(&self, time_unix: i64, timezone: i32) -> String {
        let date = shifted(time_unix, timezone);
        format!("{}:00", date.hour())
    }

    /// "day Month" in UTC, as used by the 5-day list
    pub fn day_month(&self, date_unix: i64) -> String {
        let date = shifted(date_unix, 0);
        format!("{} {}", date.day(), self.month_label(&date))
    }

    /// Weekday name in UTC
    pub fn weekday(&self, date_unix: i64) -> String {
        self.weekday_label(&shifted(date_unix, 0)).to_string()
    }

    fn weekday_label(&self, date: &DateTime<Utc>) -> &'static str {
        self.weekday_names()[date.weekday().num_days_from_sunday() as usize]
    }

    fn month_label(&self, date: &DateTime<Utc>) -> &'static str {
        self.month_names()[date.month0() as usize]
    }
}

/// Out-of-range timestamps clamp to the epoch
fn shifted(unix: i64, timezone: i32) -> DateTime<Utc> {
    let secs = unix.saturating_add(i64::from(timezone));
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
