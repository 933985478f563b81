use super::{TripReport, NOT_AVAILABLE};
use crate::model::Dataset;
use std::{fmt::Display, time::Duration};

/// total and average trip duration, in seconds. trips without a usable
/// duration are left out of both.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    /// trips that contributed a duration
    pub trip_count: usize,
}

impl DurationStats {
    /// mean trip duration, or None when no trip has a duration.
    pub fn mean_seconds(&self) -> Option<f64> {
        if self.trip_count == 0 {
            None
        } else {
            Some(self.total_seconds / self.trip_count as f64)
        }
    }
}

impl TripReport for DurationStats {
    const HEADING: &'static str = "Calculating Trip Duration";

    fn from_dataset(dataset: &Dataset) -> Self {
        let (total_seconds, trip_count) = dataset
            .records()
            .iter()
            .filter_map(|t| t.trip_duration)
            .fold((0.0, 0), |(total, n), d| (total + d, n + 1));
        DurationStats {
            total_seconds,
            trip_count,
        }
    }
}

impl Display for DurationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Total travel time is: {} seconds ({})",
            self.total_seconds,
            human_readable(self.total_seconds)
        )?;
        match self.mean_seconds() {
            Some(mean) => writeln!(
                f,
                "Average travel time was: {mean} seconds ({})",
                human_readable(mean)
            ),
            None => writeln!(f, "Average travel time was: {NOT_AVAILABLE}"),
        }
    }
}

/// whole-second rendering such as "1h 2m 3s".
fn human_readable(seconds: f64) -> String {
    let whole = seconds.max(0.0).round() as u64;
    humantime::format_duration(Duration::from_secs(whole)).to_string()
}
