use crate::app::AppState;
use crate::config::LISTINGS_PATH;
use crate::domain::ListingProperties;
use crate::errors::ServerError;
use crate::responses::{geojson_response, html_response, ResultResp};
use crate::templates;
use astra::Request;
use serde_json::Value;
use std::io::Read;
use tracing::debug;

/// Largest popup request body we will read.
const MAX_POPUP_BODY: u64 = 64 * 1024;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::map_page(&state.map)),
        ("GET", LISTINGS_PATH) => geojson_response(state.listings.body()),
        ("POST", "/popup") => {
            let props = read_listing(&mut req)?;
            html_response(templates::describe(&props))
        }
        _ => {
            debug!(%method, %path, "no route");
            Err(ServerError::NotFound)
        }
    }
}

/// Parses one listing's raw properties from the request body.
fn read_listing(req: &mut Request) -> Result<ListingProperties, ServerError> {
    let mut raw = String::new();
    req.body_mut()
        .reader()
        .take(MAX_POPUP_BODY)
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable body: {e}")))?;

    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON: {e}")))?;

    if !value.is_object() {
        return Err(ServerError::BadRequest(
            "Expected a JSON object of listing properties".into(),
        ));
    }

    Ok(ListingProperties::from_value(&value))
}
