#![cfg(all(feature = "cloudflare", target_arch = "wasm32"))]

use snoypredict_adapter_cloudflare::{dispatch, from_page};
use snoypredict_core::http::StatusCode;
use snoypredict_core::{App, Hooks, Page, SnoyPredict};
use wasm_bindgen_test::*;
use worker::{Method, Request as CfRequest, Response as CfResponse};

wasm_bindgen_test_configure!(run_in_browser);

fn cf_request(method: Method, path: &str) -> CfRequest {
    CfRequest::new(&format!("https://snoy.example{path}"), method).expect("cf request")
}

fn content_type(response: &CfResponse) -> Option<String> {
    response.headers().get("content-type").expect("headers")
}

async fn assert_matches_page(app: &App, path: &str) {
    let expected = app.handle(&format!("https://snoy.example{path}")).await;
    let mut response = dispatch(app, cf_request(Method::Get, path))
        .await
        .expect("cf response");

    assert_eq!(response.status_code(), expected.status().as_u16(), "{path}");
    assert_eq!(
        content_type(&response).as_deref(),
        Some(expected.content_type()),
        "{path}"
    );
    assert_eq!(response.text().await.expect("text"), expected.body(), "{path}");
}

#[wasm_bindgen_test]
async fn dispatch_is_a_pass_through_of_the_app_page() {
    let app = SnoyPredict::build_app();
    for path in [
        "/",
        "/style.css",
        "/predict?prediction=fog&date=2021-02-05",
        "/predict?prediction=fog",
        "/predict?prediction=fog&date=soon",
        "/unknown",
    ] {
        assert_matches_page(&app, path).await;
    }
}

#[wasm_bindgen_test]
async fn dispatch_renders_prediction() {
    let app = SnoyPredict::build_app();
    let req = cf_request(Method::Get, "/predict?prediction=rain&date=2021-02-05");

    let mut response = dispatch(&app, req).await.expect("cf response");

    assert_eq!(response.status_code(), 200);
    let body = response.text().await.expect("text");
    assert!(body.contains("<p>Prediction: rain</p>"));
    assert!(body.contains("<p>Date: 2021-02-05</p>"));
}

#[wasm_bindgen_test]
async fn dispatch_ignores_method() {
    let app = SnoyPredict::build_app();
    let req = cf_request(Method::Post, "/style.css");

    let response = dispatch(&app, req).await.expect("cf response");

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        content_type(&response).as_deref(),
        Some("text/css; charset=utf-8")
    );
}

#[wasm_bindgen_test]
async fn from_page_keeps_empty_bodies_empty() {
    let page = Page::new(StatusCode::OK, "text/plain; charset=utf-8", "");

    let mut response = from_page(page).expect("cf response");

    assert_eq!(response.status_code(), 200);
    assert!(response.bytes().await.expect("bytes").is_empty());
}
