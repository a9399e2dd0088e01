use crate::app::AppState;
use crate::config::{MapConfig, LISTINGS_PATH};
use crate::geodata::ListingDataset;
use astra::Response;
use serde_json::{json, Value};
use std::io::Read;

/// A ten percent rule listing with every field the popup reads.
pub fn ten_percent_listing() -> Value {
    json!({
        "street_address": "123 Main St",
        "listing_url": "https://example.com",
        "bedrooms": 2,
        "home_type": "SINGLE_FAMILY",
        "gouging_rule": "tenpercent",
        "price_ceiling": 2200,
        "base_price": 2000,
        "base_price_date": "2020-01-01",
        "emergency_peak_price": 2400,
        "emergency_peak_price_date": "2025-01-10",
        "base_vs_peak_price": 0.2,
        "pct_increase_of_peak_over_base": 0.35,
        "is_currently_gouged": true
    })
}

pub fn fmr_listing() -> Value {
    json!({
        "street_address": "77 Sunset Blvd",
        "listing_url": "https://example.com/77",
        "bedrooms": 0,
        "home_type": "APARTMENT",
        "gouging_rule": "fmr",
        "price_ceiling": 1800,
        "base_price": null,
        "base_price_date": null,
        "emergency_peak_price": 3150.5,
        "emergency_peak_price_date": "2025-02-14",
        "base_vs_peak_price": null,
        "pct_increase_of_peak_over_base": 0.62,
        "is_currently_gouged": false
    })
}

pub fn sample_collection() -> Value {
    json!({
        "type": "FeatureCollection",
        "name": "trb-web-map",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-118.3, 34.02] },
                "properties": ten_percent_listing()
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-118.25, 34.05] },
                "properties": fmr_listing()
            }
        ]
    })
}

pub fn test_state() -> AppState {
    let listings = ListingDataset::from_json(&sample_collection().to_string())
        .unwrap_or_else(|e| panic!("Sample collection failed to load: {e}"));

    AppState {
        map: MapConfig {
            access_token: "pk.test-token".to_string(),
            data_source: "sample.geojson".to_string(),
            data_url: LISTINGS_PATH.to_string(),
        },
        listings,
    }
}

pub fn read_body(mut resp: Response) -> String {
    let mut body = String::new();
    resp.body_mut()
        .reader()
        .read_to_string(&mut body)
        .expect("Failed to read response body");
    body
}
