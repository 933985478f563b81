use super::{FrequencyTable, Popular, TripReport, NOT_AVAILABLE};
use crate::model::{calendar, Dataset};
use chrono::{Month, Weekday};
use std::fmt::Display;

/// the most frequent times of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub popular_month: Option<Popular<Month>>,
    pub popular_weekday: Option<Popular<Weekday>>,
    /// hour of day in [0, 24)
    pub popular_hour: Option<Popular<u32>>,
}

impl TripReport for TimeStats {
    const HEADING: &'static str = "Calculating The Most Frequent Times of Travel";

    fn from_dataset(dataset: &Dataset) -> Self {
        let mut months = FrequencyTable::new();
        let mut weekdays = FrequencyTable::new();
        let mut hours = FrequencyTable::new();
        for trip in dataset.records() {
            months.increment(trip.month);
            weekdays.increment(trip.weekday);
            hours.increment(trip.start_hour());
        }
        TimeStats {
            popular_month: months.popular(),
            popular_weekday: weekdays.popular(),
            popular_hour: hours.popular(),
        }
    }
}

impl Display for TimeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let month = self
            .popular_month
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.value.name().to_string());
        let weekday = self.popular_weekday.as_ref().map_or_else(
            || NOT_AVAILABLE.to_string(),
            |p| calendar::weekday_name(&p.value).to_string(),
        );
        let hour = self
            .popular_hour
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.value.to_string());
        writeln!(f, "Most common month of travel was: {month}")?;
        writeln!(f, "Most popular weekday for travel was: {weekday}")?;
        writeln!(f, "Most popular hour for travel was: {hour}")
    }
}
