use super::{City, DayFilter, FilterSelection, MonthFilter, TripRecord};

/// the trips of one city, in file order, optionally restricted by month and day.
///
/// the optional `Gender` and `Birth Year` columns are not published for every
/// city. whether the source file carried them is tracked separately from the
/// row values so that reports can tell "column absent" apart from "no values".
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    records: Vec<TripRecord>,
    has_gender_column: bool,
    has_birth_year_column: bool,
}

impl Dataset {
    pub fn new(
        city: City,
        records: Vec<TripRecord>,
        has_gender_column: bool,
        has_birth_year_column: bool,
    ) -> Dataset {
        Dataset {
            city,
            records,
            has_gender_column,
            has_birth_year_column,
        }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_gender_column(&self) -> bool {
        self.has_gender_column
    }

    pub fn has_birth_year_column(&self) -> bool {
        self.has_birth_year_column
    }

    /// keeps the trips whose derived weekday matches the filter.
    pub fn filter_by_day(self, day: &DayFilter) -> Dataset {
        self.retain(|r| day.matches(&r.weekday))
    }

    /// keeps the trips whose derived month matches the filter.
    pub fn filter_by_month(self, month: &MonthFilter) -> Dataset {
        self.retain(|r| month.matches(&r.month))
    }

    /// applies the day and month filters of a selection. both are equality
    /// predicates on independent fields, so their order does not change the result.
    pub fn filter(self, selection: &FilterSelection) -> Dataset {
        self.filter_by_day(&selection.day)
            .filter_by_month(&selection.month)
    }

    fn retain(mut self, predicate: impl Fn(&TripRecord) -> bool) -> Dataset {
        self.records.retain(|r| predicate(r));
        self
    }
}

#[cfg(test)]
mod test {
    use super::Dataset;
    use crate::model::{calendar, City, DayFilter, MonthFilter, TripRecord};
    use chrono::{Month, NaiveDateTime, Weekday};

    fn trip(start: &str) -> TripRecord {
        let t = NaiveDateTime::parse_from_str(start, calendar::TRIP_TIMESTAMP_FORMAT)
            .expect("test invariant failed: bad timestamp");
        TripRecord::new(t, t, 60.0, "A", "B")
    }

    fn mock_dataset() -> Dataset {
        let records = vec![
            trip("2017-01-02 08:00:00"), // monday, january
            trip("2017-01-03 08:00:00"), // tuesday, january
            trip("2017-02-06 08:00:00"), // monday, february
            trip("2017-03-06 18:00:00"), // monday, march
            trip("2017-03-12 18:00:00"), // sunday, march
            trip("2017-01-09 12:00:00"), // monday, january
        ];
        Dataset::new(City::Chicago, records, true, true)
    }

    #[test]
    fn test_filter_order_independent() {
        let month = MonthFilter::Only(Month::January);
        let day = DayFilter::Only(Weekday::Mon);
        let day_first = mock_dataset().filter_by_day(&day).filter_by_month(&month);
        let month_first = mock_dataset().filter_by_month(&month).filter_by_day(&day);
        assert_eq!(day_first.records(), month_first.records());
        assert_eq!(day_first.len(), 2);
    }

    #[test]
    fn test_all_filters_keep_everything() {
        let filtered = mock_dataset()
            .filter_by_day(&DayFilter::All)
            .filter_by_month(&MonthFilter::All);
        assert_eq!(filtered.len(), mock_dataset().len());
    }

    #[test]
    fn test_weekday_counts_sum_to_total() {
        let total: usize = calendar::WEEKDAYS
            .iter()
            .map(|d| mock_dataset().filter_by_day(&DayFilter::Only(*d)).len())
            .sum();
        assert_eq!(total, mock_dataset().len());
    }

    #[test]
    fn test_filter_to_empty() {
        let filtered = mock_dataset().filter_by_month(&MonthFilter::Only(Month::December));
        assert!(filtered.is_empty());
    }
}
