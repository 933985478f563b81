use super::session;
use crate::{
    config::ExplorerConfig,
    error::BikeshareError,
    model::{City, DayFilter, FilterSelection, MonthFilter},
};
use clap::Parser;
use std::path::PathBuf;

/// command line tool for exploring bikeshare trip statistics by city, month and day
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct BikeshareApp {
    /// directory containing the city trip files. overrides the configuration file.
    #[arg(long)]
    pub data_directory: Option<String>,
    /// optional .toml or .json explorer configuration file
    #[arg(long)]
    pub config: Option<String>,
    /// report on this city once instead of prompting interactively
    #[arg(long, value_enum)]
    pub city: Option<City>,
    /// month name or "all", used with --city
    #[arg(long, requires = "city")]
    pub month: Option<MonthFilter>,
    /// weekday name or "all", used with --city
    #[arg(long, requires = "city")]
    pub day: Option<DayFilter>,
}

impl BikeshareApp {
    pub fn build_config(&self) -> Result<ExplorerConfig, BikeshareError> {
        let mut config = match &self.config {
            Some(f) => ExplorerConfig::try_from(f)?,
            None => ExplorerConfig::default(),
        };
        if let Some(dir) = &self.data_directory {
            config.data_directory = PathBuf::from(dir);
        }
        log::debug!("explorer configuration: {config:?}");
        Ok(config)
    }

    pub fn run(&self) -> Result<(), BikeshareError> {
        let config = self.build_config()?;
        let stdout = std::io::stdout();
        match self.city {
            Some(city) => {
                let selection = FilterSelection::new(
                    city,
                    self.month.unwrap_or_default(),
                    self.day.unwrap_or_default(),
                );
                session::run_once(&config, &selection, &mut stdout.lock())
            }
            None => session::run(&config, std::io::stdin().lock(), stdout.lock()),
        }
    }
}
