mod duration_stats;
mod frequency_table;
mod station_stats;
mod time_stats;
mod trip_report;
mod user_stats;

pub use duration_stats::DurationStats;
pub use frequency_table::{FrequencyTable, Popular};
pub use station_stats::StationStats;
pub use time_stats::TimeStats;
pub use trip_report::{run_report, write_all_reports, TripReport, SECTION_RULE};
pub use user_stats::{BirthYearStats, UserStats};

/// text printed in place of a statistic with no underlying data.
pub const NOT_AVAILABLE: &str = "not available";
