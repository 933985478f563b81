use super::calendar;
use chrono::Month;
use std::{fmt::Display, str::FromStr};

/// restricts a dataset to trips starting in one month, or keeps all months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(&self, month: &Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        calendar::parse_month_name(trimmed)
            .map(MonthFilter::Only)
            .ok_or_else(|| format!("expected a month name or 'all', found '{trimmed}'"))
    }
}

impl Display for MonthFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthFilter::All => write!(f, "all"),
            MonthFilter::Only(m) => write!(f, "{}", m.name().to_lowercase()),
        }
    }
}
