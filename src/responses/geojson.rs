// responses/geojson.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

pub const GEOJSON_CONTENT_TYPE: &str = "application/geo+json";

/// Serve an already-serialized GeoJSON document.
pub fn geojson_response(body: &[u8]) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", GEOJSON_CONTENT_TYPE)
        .body(Body::from(body.to_vec()))
        .map_err(|_| ServerError::InternalError)
}
