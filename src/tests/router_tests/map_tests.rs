// src/tests/router_tests/map_tests.rs

use crate::config::LISTINGS_PATH;
use crate::geodata::POPUP_PROPERTY;
use crate::router::handle;
use crate::tests::utils::{read_body, test_state};
use astra::Body;
use http::{Method, Request};

#[test]
fn map_page_carries_settings() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = read_body(resp);
    assert!(body.contains("<div id=\"map\"></div>"));
    assert!(body.contains("mapbox-gl.js"));
    assert!(body.contains("\"accessToken\":\"pk.test-token\""));
    assert!(body.contains(&format!("\"dataUrl\":\"{LISTINGS_PATH}\"")));
    assert!(body.contains("mapbox://styles/mapbox/dark-v11"));
    assert!(body.contains("\"listing_points\""));
    assert!(body.contains("#f94b4b"));
}

#[test]
fn listings_are_served_as_geojson() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri(LISTINGS_PATH)
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/geo+json"
    );

    let body = read_body(resp);
    let served: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(served["type"], "FeatureCollection");
    assert!(served["features"][0]["properties"][POPUP_PROPERTY].is_string());
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).err().expect("expected an error");
    assert_eq!(err.status(), 404);

    let resp = crate::responses::html_error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(read_body(resp).contains("Error 404"));
}
