use crate::{error::BikeshareError, model::City};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// where to find the city trip files.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// directory containing one trip file per city
    pub data_directory: PathBuf,
    /// extension of the trip files, without the leading dot
    pub file_extension: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from("."),
            file_extension: String::from("csv"),
        }
    }
}

impl ExplorerConfig {
    /// path of the trip file for a city, such as `./new_york_city.csv`.
    pub fn dataset_path(&self, city: &City) -> PathBuf {
        self.data_directory
            .join(format!("{}.{}", city.file_stem(), self.file_extension))
    }
}

impl TryFrom<&String> for ExplorerConfig {
    type Error = BikeshareError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                BikeshareError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                BikeshareError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                BikeshareError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                BikeshareError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(BikeshareError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
