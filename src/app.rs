use crate::config::MapConfig;
use crate::geodata::ListingDataset;

/// Shared, read-only state handed to every request.
#[derive(Debug)]
pub struct AppState {
    pub map: MapConfig,
    pub listings: ListingDataset,
}
