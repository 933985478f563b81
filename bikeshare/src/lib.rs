//! interactive exploration of bikeshare trip logs. a session collects a city
//! and optional month/day filters, loads the matching trips from the city's
//! CSV file and prints travel time, station, duration and user statistics.
pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;

pub use error::BikeshareError;
