use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoDataError {
    #[error("Fetch error for {url}: {message}")]
    Fetch { url: String, message: String },
    #[error("Read error for {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("GeoJSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Expected a FeatureCollection, found {0:?}")]
    NotAFeatureCollection(String),
}
