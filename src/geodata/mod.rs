mod dataset;
mod geodata_error;
mod models;

pub use dataset::{DatasetSummary, ListingDataset, POPUP_PROPERTY};
pub use geodata_error::GeoDataError;
pub use models::FeatureCollection;
