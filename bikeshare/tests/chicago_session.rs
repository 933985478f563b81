use bikeshare::{
    app::session,
    config::ExplorerConfig,
    loader,
    model::{calendar, City, DayFilter, FilterSelection, MonthFilter},
    report::{run_report, StationStats, TimeStats, TripReport, UserStats},
};
use chrono::{Month, Weekday};
use std::{io::Cursor, path::PathBuf};

fn test_config() -> ExplorerConfig {
    ExplorerConfig {
        data_directory: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test"),
        ..Default::default()
    }
}

fn unfiltered(city: City) -> FilterSelection {
    FilterSelection::new(city, MonthFilter::All, DayFilter::All)
}

#[test]
fn test_chicago_statistics() {
    let dataset = loader::load_dataset(&test_config(), &unfiltered(City::Chicago))
        .expect("chicago fixture should load");

    let time = TimeStats::from_dataset(&dataset);
    assert_eq!(time.popular_month.map(|p| p.value), Some(Month::January));
    assert_eq!(time.popular_weekday.map(|p| p.value), Some(Weekday::Thu));
    assert_eq!(time.popular_hour.map(|p| (p.value, p.count)), Some((9, 3)));

    let stations = StationStats::from_dataset(&dataset);
    let popular_trip = stations.popular_trip.expect("popular trip should exist");
    assert_eq!(popular_trip.value.0, "Wood St & Hubbard St");
    assert_eq!(popular_trip.value.1, "Damen Ave & Chicago Ave");
    assert_eq!(popular_trip.count, 3);

    let users = UserStats::from_dataset(&dataset);
    let years = users.birth_years.expect("chicago publishes birth years");
    assert_eq!(years.earliest, 1975);
    assert_eq!(years.most_recent, 1992);
    // 1992 and 1986 are tied at three riders, 1992 appears first in the file
    assert_eq!(years.most_common.value, 1992);
}

#[test]
fn test_filtered_selection_matches_sequential_filters() {
    let selection = FilterSelection::new(
        City::Chicago,
        MonthFilter::Only(Month::May),
        DayFilter::Only(Weekday::Fri),
    );
    let loaded = loader::load_dataset(&test_config(), &selection).expect("should load");
    let path = test_config().dataset_path(&City::Chicago);
    let sequential = loader::read_city_dataset(&path, City::Chicago)
        .expect("should load")
        .filter_by_month(&selection.month)
        .filter_by_day(&selection.day);
    assert_eq!(loaded.records(), sequential.records());
    assert_eq!(loaded.len(), 1);
}

#[test]
fn test_weekday_partition_of_washington() {
    let total = loader::load_dataset(&test_config(), &unfiltered(City::Washington))
        .expect("should load")
        .len();
    let by_day: usize = calendar::WEEKDAYS
        .iter()
        .map(|d| {
            let selection =
                FilterSelection::new(City::Washington, MonthFilter::All, DayFilter::Only(*d));
            loader::load_dataset(&test_config(), &selection)
                .expect("should load")
                .len()
        })
        .sum();
    assert_eq!(by_day, total);
}

#[test]
fn test_run_report_writes_timing() {
    let dataset = loader::load_dataset(&test_config(), &unfiltered(City::Washington))
        .expect("should load");
    let mut out = Vec::new();
    let users: UserStats = run_report(&dataset, &mut out).expect("report should write");
    assert!(users.genders.is_none());
    let text = String::from_utf8(out).expect("utf8 output");
    assert!(text.starts_with("\nCalculating User Stats...\n"));
    assert!(text.contains("This took "));
    assert!(text.contains("Birth year data not available for this city."));
}

#[test]
fn test_interactive_session_output() {
    let mut output = Vec::new();
    session::run(
        &test_config(),
        Cursor::new("Chicago\nall\nall\nno\n"),
        &mut output,
    )
    .expect("session should finish");
    let text = String::from_utf8(output).expect("utf8 output");
    assert!(text.contains("Total travel time is: 6332 seconds (1h 45m 32s)"));
    assert!(text.contains("Average travel time was: 633.2 seconds"));
    assert!(text.contains("  Subscriber: 9"));
    assert!(text.contains("  Customer: 1"));
    assert!(text.contains("  Male: 7"));
    assert!(text.contains("  Female: 2"));
    assert!(!text.contains("NaN"));
}

#[test]
fn test_run_once_missing_city() {
    let mut output = Vec::new();
    let result = session::run_once(&test_config(), &unfiltered(City::NewYorkCity), &mut output);
    assert!(result.is_err_and(|e| e.is_dataset_error()));
}
