use super::{City, DayFilter, MonthFilter};
use std::fmt::Display;

/// the (city, month, day) triple chosen for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> FilterSelection {
        FilterSelection { city, month, day }
    }
}

impl Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "city: {}, month: {}, day: {}",
            self.city, self.month, self.day
        )
    }
}
