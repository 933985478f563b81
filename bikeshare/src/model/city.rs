use clap::ValueEnum;
use std::{fmt::Display, str::FromStr};

/// the cities with published trip logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// the trip file name for this city without extension, lower-cased with
    /// spaces replaced by underscores, such as "new_york_city".
    pub fn file_stem(&self) -> String {
        self.name().to_lowercase().replace(' ', "_")
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        City::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| format!("unknown city '{trimmed}'"))
    }
}

impl Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
