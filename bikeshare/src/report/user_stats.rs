use super::{FrequencyTable, Popular, TripReport};
use crate::model::Dataset;
use itertools::{Itertools, MinMaxResult};
use std::fmt::Display;

/// earliest, most recent and most common rider birth year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: Popular<i32>,
}

/// rider demographics. gender and birth year are None when the city does not
/// publish them or no trip in the dataset has a value.
#[derive(Debug, Clone)]
pub struct UserStats {
    pub user_types: FrequencyTable<String>,
    pub genders: Option<FrequencyTable<String>>,
    pub birth_years: Option<BirthYearStats>,
    city_has_gender: bool,
    city_has_birth_year: bool,
}

impl TripReport for UserStats {
    const HEADING: &'static str = "Calculating User Stats";

    fn from_dataset(dataset: &Dataset) -> Self {
        let records = dataset.records();
        let user_types = records
            .iter()
            .filter_map(|t| t.user_type.clone())
            .collect::<FrequencyTable<_>>();

        let genders = if dataset.has_gender_column() {
            let table = records
                .iter()
                .filter_map(|t| t.gender.clone())
                .collect::<FrequencyTable<_>>();
            Some(table).filter(|t| !t.is_empty())
        } else {
            None
        };

        let birth_years = if dataset.has_birth_year_column() {
            birth_year_stats(records.iter().filter_map(|t| t.birth_year))
        } else {
            None
        };

        UserStats {
            user_types,
            genders,
            birth_years,
            city_has_gender: dataset.has_gender_column(),
            city_has_birth_year: dataset.has_birth_year_column(),
        }
    }
}

fn birth_year_stats(years: impl Iterator<Item = i32> + Clone) -> Option<BirthYearStats> {
    let (earliest, most_recent) = match years.clone().minmax() {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(y) => (y, y),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let most_common = years.collect::<FrequencyTable<_>>().popular()?;
    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

impl Display for UserStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Count for each type of user:")?;
        if self.user_types.is_empty() {
            writeln!(f, "  User type data not available for this selection.")?;
        }
        for (user_type, count) in self.user_types.sorted_by_count() {
            writeln!(f, "  {user_type}: {count}")?;
        }

        writeln!(f, "\nCount of user genders for travel:")?;
        match &self.genders {
            Some(genders) => {
                for (gender, count) in genders.sorted_by_count() {
                    writeln!(f, "  {gender}: {count}")?;
                }
            }
            None => writeln!(
                f,
                "  Gender data not available for {}.",
                missing_scope(self.city_has_gender)
            )?,
        }
        writeln!(f)?;

        match &self.birth_years {
            Some(years) => {
                writeln!(f, "Earliest birth year was: {}", years.earliest)?;
                writeln!(f, "Most recent birth year was: {}", years.most_recent)?;
                writeln!(f, "Most common birth year was: {}", years.most_common.value)
            }
            None => writeln!(
                f,
                "Birth year data not available for {}.",
                missing_scope(self.city_has_birth_year)
            ),
        }
    }
}

/// a column the city publishes can still be empty for the filtered trips.
fn missing_scope(city_has_column: bool) -> &'static str {
    if city_has_column {
        "this selection"
    } else {
        "this city"
    }
}
