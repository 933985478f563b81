pub mod calendar;
mod city;
mod dataset;
mod day_filter;
mod filter_selection;
mod month_filter;
mod trip_record;

pub use city::City;
pub use dataset::Dataset;
pub use day_filter::DayFilter;
pub use filter_selection::FilterSelection;
pub use month_filter::MonthFilter;
pub use trip_record::{TripRecord, TripRow};
