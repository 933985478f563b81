use crate::{
    config::ExplorerConfig,
    error::BikeshareError,
    model::{City, Dataset, FilterSelection, TripRecord, TripRow},
};
use kdam::tqdm;
use std::path::Path;

/// reads the trip file for the selected city and applies the selection's
/// day and month filters. the file is re-read on every call so each session
/// starts from the unfiltered source.
pub fn load_dataset(
    config: &ExplorerConfig,
    selection: &FilterSelection,
) -> Result<Dataset, BikeshareError> {
    let path = config.dataset_path(&selection.city);
    let dataset = read_city_dataset(&path, selection.city)?;
    let total = dataset.len();
    let filtered = dataset.filter(selection);
    log::info!(
        "kept {} of {} trips for {}",
        filtered.len(),
        total,
        selection
    );
    Ok(filtered)
}

/// reads every trip in a city file. required columns are checked against the
/// header before any row is parsed.
pub fn read_city_dataset(path: &Path, city: City) -> Result<Dataset, BikeshareError> {
    if !path.is_file() {
        return Err(BikeshareError::DatasetNotFound {
            city: city.to_string(),
            path: path.to_path_buf(),
        });
    }
    log::debug!("reading trips for {city} from {}", path.display());

    let read_error = |source: csv::Error| BikeshareError::DatasetReadError {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(read_error)?;
    let headers = reader.headers().map_err(read_error)?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h.trim() == name);

    if let Some(missing) = TripRow::REQUIRED_COLUMNS
        .iter()
        .find(|column| !has_column(**column))
    {
        return Err(BikeshareError::MissingColumn {
            path: path.to_path_buf(),
            column: missing.to_string(),
        });
    }
    let has_gender_column = has_column(TripRow::GENDER_COLUMN);
    let has_birth_year_column = has_column(TripRow::BIRTH_YEAR_COLUMN);
    if !has_gender_column || !has_birth_year_column {
        log::debug!(
            "{} has gender column: {has_gender_column}, birth year column: {has_birth_year_column}",
            path.display()
        );
    }

    let rows = tqdm!(
        reader.into_deserialize::<TripRow>(),
        desc = format!("reading {city} trips")
    );
    let records = rows
        .map(|row| row.map(TripRecord::from))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)?;

    Ok(Dataset::new(
        city,
        records,
        has_gender_column,
        has_birth_year_column,
    ))
}
