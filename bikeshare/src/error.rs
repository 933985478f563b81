use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BikeshareError {
    #[error("no trip data found for {city} at {}", path.display())]
    DatasetNotFound { city: String, path: PathBuf },
    #[error("failure reading trip data from {}: {source}", path.display())]
    DatasetReadError { path: PathBuf, source: csv::Error },
    #[error("trip data file {} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("{0}")]
    ConfigurationError(String),
    #[error("input closed while waiting for {0}")]
    InputClosed(String),
    #[error("failure reading or writing terminal: {0}")]
    TerminalError(#[from] std::io::Error),
}

impl BikeshareError {
    /// true for failures tied to a single city's trip file. a session can
    /// report these and go back to collecting filters.
    pub fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            BikeshareError::DatasetNotFound { .. }
                | BikeshareError::DatasetReadError { .. }
                | BikeshareError::MissingColumn { .. }
        )
    }
}
