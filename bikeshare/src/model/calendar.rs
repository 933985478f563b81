//! calendar lookups used to derive and filter on the month and weekday
//! of a trip's start time.
use chrono::{Datelike, Month, NaiveDateTime, Weekday};
use serde::{de::Error, Deserialize, Deserializer};

/// timestamp format of the `Start Time` and `End Time` columns. `%.f` also
/// accepts timestamps without fractional seconds.
pub const TRIP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(weekday: &Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// month of some timestamp. `month0` is always in [0, 12).
pub fn month_of(datetime: &NaiveDateTime) -> Month {
    MONTHS[datetime.month0() as usize]
}

/// case-insensitive match of a full month name, such as "january".
pub fn parse_month_name(s: &str) -> Option<Month> {
    MONTHS
        .iter()
        .find(|m| m.name().eq_ignore_ascii_case(s))
        .copied()
}

/// case-insensitive match of a full weekday name, such as "monday".
pub fn parse_weekday_name(s: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find(|d| weekday_name(d).eq_ignore_ascii_case(s))
        .copied()
}

pub fn deserialize_trip_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let datetime_str: String = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(datetime_str.trim(), TRIP_TIMESTAMP_FORMAT)
        .map_err(|e| D::Error::custom(format!("invalid timestamp '{datetime_str}': {e}")))
}
