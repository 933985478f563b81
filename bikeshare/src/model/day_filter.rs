use super::calendar;
use chrono::Weekday;
use std::{fmt::Display, str::FromStr};

/// restricts a dataset to trips starting on one day of the week, or keeps all days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, weekday: &Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d == weekday,
        }
    }
}

impl FromStr for DayFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        calendar::parse_weekday_name(trimmed)
            .map(DayFilter::Only)
            .ok_or_else(|| format!("expected a weekday name or 'all', found '{trimmed}'"))
    }
}

impl Display for DayFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayFilter::All => write!(f, "all"),
            DayFilter::Only(d) => write!(f, "{}", calendar::weekday_name(d).to_lowercase()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::DayFilter;
    use chrono::Weekday;

    #[test]
    fn test_parse() {
        assert_eq!("all".parse::<DayFilter>(), Ok(DayFilter::All));
        assert_eq!(
            "wEdNeSdAy".parse::<DayFilter>(),
            Ok(DayFilter::Only(Weekday::Wed))
        );
        assert!("weds".parse::<DayFilter>().is_err());
    }

    #[test]
    fn test_display_round_trips_prompt_value() {
        let filter = DayFilter::Only(Weekday::Sat);
        assert_eq!(filter.to_string(), "saturday");
    }
}
