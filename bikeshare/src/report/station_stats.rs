use super::{FrequencyTable, Popular, TripReport, NOT_AVAILABLE};
use crate::model::Dataset;
use std::fmt::Display;

/// the most popular stations and station-to-station trip.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub popular_start_station: Option<Popular<String>>,
    pub popular_end_station: Option<Popular<String>>,
    /// (start station, end station)
    pub popular_trip: Option<Popular<(String, String)>>,
}

impl TripReport for StationStats {
    const HEADING: &'static str = "Calculating The Most Popular Stations and Trip";

    fn from_dataset(dataset: &Dataset) -> Self {
        let mut starts: FrequencyTable<&str> = FrequencyTable::new();
        let mut ends: FrequencyTable<&str> = FrequencyTable::new();
        let mut trips: FrequencyTable<(&str, &str)> = FrequencyTable::new();
        for trip in dataset.records() {
            starts.increment(&trip.start_station);
            ends.increment(&trip.end_station);
            trips.increment((trip.start_station.as_str(), trip.end_station.as_str()));
        }
        let owned = |p: Popular<&str>| Popular {
            value: p.value.to_string(),
            count: p.count,
        };
        StationStats {
            popular_start_station: starts.popular().map(owned),
            popular_end_station: ends.popular().map(owned),
            popular_trip: trips.popular().map(|p| Popular {
                value: (p.value.0.to_string(), p.value.1.to_string()),
                count: p.count,
            }),
        }
    }
}

impl Display for StationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = self
            .popular_start_station
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.value.clone());
        let end = self
            .popular_end_station
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.value.clone());
        let combo = self.popular_trip.as_ref().map_or_else(
            || NOT_AVAILABLE.to_string(),
            |p| format!("{} -> {} ({} trips)", p.value.0, p.value.1, p.count),
        );
        writeln!(f, "Most popular start station was: {start}")?;
        writeln!(f, "Most popular end station was: {end}")?;
        writeln!(f, "Most popular start/end station combo was: {combo}")
    }
}
