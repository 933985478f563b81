mod explorer_config;

pub use explorer_config::ExplorerConfig;
