// src/tests/router_tests/popup_tests.rs

use crate::router::handle;
use crate::tests::utils::{fmr_listing, read_body, test_state, ten_percent_listing};
use astra::Body;
use http::{Method, Request};

fn post_popup(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/popup")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[test]
fn popup_renders_posted_listing() {
    let state = test_state();

    let resp = handle(post_popup(ten_percent_listing().to_string()), &state)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.starts_with("<h3><a href=\"https://example.com\""));
    assert!(body.contains("2 Bedroom Single-family"));
    assert!(body.contains("Original Rent (1/1/20): <strong>$2,000</strong>"));
}

#[test]
fn popup_matches_preannotated_feature() {
    let state = test_state();

    let resp = handle(post_popup(fmr_listing().to_string()), &state).unwrap();
    let direct = read_body(resp);

    let served: serde_json::Value = serde_json::from_slice(state.listings.body()).unwrap();
    assert_eq!(
        served["features"][1]["properties"]["popup_html"].as_str().unwrap(),
        direct
    );
}

#[test]
fn popup_rejects_non_objects() {
    let state = test_state();

    let err = handle(post_popup("[1, 2, 3]".to_string()), &state).err().expect("expected an error");
    assert_eq!(err.status(), 400);

    let err = handle(post_popup("not json".to_string()), &state).err().expect("expected an error");
    assert_eq!(err.status(), 400);
}

#[test]
fn popup_requires_post() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/popup")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).err().expect("expected an error");
    assert_eq!(err.status(), 404);
}
