mod dataset_loader;

pub use dataset_loader::{load_dataset, read_city_dataset};
