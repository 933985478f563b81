use super::calendar;
use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

/// a row of a city trip file as it appears on disk. the leading unnamed
/// index column and any other unknown columns are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct TripRow {
    #[serde(
        rename = "Start Time",
        deserialize_with = "calendar::deserialize_trip_timestamp"
    )]
    pub start_time: NaiveDateTime,
    #[serde(
        rename = "End Time",
        deserialize_with = "calendar::deserialize_trip_timestamp"
    )]
    pub end_time: NaiveDateTime,
    /// trip length in seconds. some cities record fractional seconds, and
    /// the cell may be empty.
    #[serde(rename = "Trip Duration")]
    pub trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    /// stored as a float such as `1992.0`, empty when unknown.
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

impl TripRow {
    pub const REQUIRED_COLUMNS: [&'static str; 6] = [
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    pub const GENDER_COLUMN: &'static str = "Gender";
    pub const BIRTH_YEAR_COLUMN: &'static str = "Birth Year";
}

/// a single bikeshare ride with the calendar fields derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// None when the duration is missing or not a finite number.
    pub trip_duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub weekday: Weekday,
    pub month: Month,
}

impl TripRecord {
    #[cfg(test)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        trip_duration: f64,
        start_station: &str,
        end_station: &str,
    ) -> TripRecord {
        TripRecord {
            start_time,
            end_time,
            trip_duration: finite(trip_duration),
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
            weekday: start_time.weekday(),
            month: calendar::month_of(&start_time),
        }
    }

    #[cfg(test)]
    pub fn with_user_type(mut self, user_type: &str) -> TripRecord {
        self.user_type = Some(user_type.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_gender(mut self, gender: &str) -> TripRecord {
        self.gender = Some(gender.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_birth_year(mut self, birth_year: i32) -> TripRecord {
        self.birth_year = Some(birth_year);
        self
    }

    /// hour of the day the trip started, in [0, 24).
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

impl From<TripRow> for TripRecord {
    fn from(row: TripRow) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        TripRecord {
            weekday: row.start_time.weekday(),
            month: calendar::month_of(&row.start_time),
            start_time: row.start_time,
            end_time: row.end_time,
            trip_duration: row.trip_duration.and_then(finite),
            start_station: row.start_station,
            end_station: row.end_station,
            user_type: non_empty(row.user_type),
            gender: non_empty(row.gender),
            birth_year: row.birth_year.and_then(finite).map(|y| y.round() as i32),
        }
    }
}

/// csv accepts "NaN" and "inf" as floats; those never reach a statistic.
fn finite(value: f64) -> Option<f64> {
    Some(value).filter(|v| v.is_finite())
}

#[cfg(test)]
mod test {
    use super::{TripRecord, TripRow};
    use chrono::{Month, Weekday};

    #[test]
    fn test_row_derives_calendar_fields() {
        let data = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
2,2017-05-26 09:41:44,2017-05-26 09:46:25,281.5,Wood St & Hubbard St,Damen Ave & Chicago Ave,Customer,,
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let records = reader
            .deserialize::<TripRow>()
            .map(|r| r.map(TripRecord::from))
            .collect::<Result<Vec<_>, _>>()
            .expect("test invariant failed: rows should deserialize");
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.weekday, Weekday::Fri);
        assert_eq!(first.month, Month::June);
        assert_eq!(first.start_hour(), 15);
        assert_eq!(first.birth_year, Some(1992));
        assert_eq!(first.gender.as_deref(), Some("Male"));

        let second = &records[1];
        assert_eq!(second.trip_duration, Some(281.5));
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
    }

    #[test]
    fn test_rows_without_optional_columns() {
        let data = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
7,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: TripRow = reader
            .deserialize()
            .next()
            .expect("test invariant failed: one row expected")
            .expect("test invariant failed: row should deserialize");
        assert_eq!(row.gender, None);
        assert_eq!(row.birth_year, None);
    }

    #[test]
    fn test_missing_or_non_finite_durations() {
        let data = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-21 08:36:34,2017-06-21 08:44:43,NaN,A,B,Subscriber
2,2017-06-21 09:36:34,2017-06-21 09:44:43,,A,B,Subscriber
3,2017-06-21 10:36:34,2017-06-21 10:44:43,inf,A,B,Customer
4,2017-06-21 11:36:34,2017-06-21 11:44:43,489,A,B,Customer
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let durations = reader
            .deserialize::<TripRow>()
            .map(|r| r.map(|row| TripRecord::from(row).trip_duration))
            .collect::<Result<Vec<_>, _>>()
            .expect("test invariant failed: rows should deserialize");
        assert_eq!(durations, vec![None, None, None, Some(489.0)]);
    }
}
