// API Integration Tests
//
// Purpose: drive the router end-to-end — form rendering, form submission,
// JSON API, and health check.
// Run with: cargo test --test api_integration_tests

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use crop_advisor_rust::dataset::CROP_TARGETS;
use crop_advisor_rust::{create_router, INVALID_INPUT_MESSAGE};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

// Helper: read a response body as a string
async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}

// Helper: parse a JSON response
async fn json_response(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

// Helper: build a form-encoded POST to /
fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// Helper: build a JSON POST to /api/recommend
fn api_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/recommend")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const VALID_FORM_BODY: &str =
    "N=90&P=65&K=85&temperature=35&humidity=55&ph=7.5&rainfall=200&soil_type=2&algorithm=naive_bayes";

// =========================================================================
// Section 1: Health Check
// =========================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_response(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

// =========================================================================
// Section 2: Form Rendering
// =========================================================================

#[tokio::test]
async fn test_form_page_renders() {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("<form"));
    for field in ["N", "P", "K", "temperature", "humidity", "ph", "rainfall", "soil_type"] {
        assert!(
            html.contains(&format!("name=\"{}\"", field)),
            "form should have a {} input",
            field
        );
    }
    // Dropdown ranges and soil categories are rendered
    assert!(html.contains("<option value=\"200\">200</option>"));
    assert!(html.contains("Sandy"));
    assert!(html.contains("logistic_regression"));
    // No error banner on a fresh form
    assert!(!html.contains(INVALID_INPUT_MESSAGE));
}

// =========================================================================
// Section 3: Form Submission
// =========================================================================

#[tokio::test]
async fn test_submit_valid_naive_bayes() {
    let app = create_router();

    let response = app.oneshot(form_request(VALID_FORM_BODY)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    // The input matches training row 6 on every measurement; the fertilizer
    // resolves through the submitted Sandy soil code.
    assert!(html.contains("sugarcane"));
    assert!(html.contains("FYM + Urea for Sandy"));
    assert!(!html.contains(INVALID_INPUT_MESSAGE));
}

#[tokio::test]
async fn test_submit_without_algorithm_defaults_to_naive_bayes() {
    let app = create_router();

    let body = "N=90&P=65&K=85&temperature=35&humidity=55&ph=7.5&rainfall=200&soil_type=2";
    let response = app.oneshot(form_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("sugarcane"));
}

#[tokio::test]
async fn test_submit_logistic_regression_stays_in_target_list() {
    let app = create_router();

    let body =
        "N=90&P=65&K=85&temperature=35&humidity=55&ph=7.5&rainfall=200&soil_type=2&algorithm=logistic_regression";
    let response = app.oneshot(form_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(!html.contains(INVALID_INPUT_MESSAGE));
    assert!(
        CROP_TARGETS.iter().filter(|crop| html.contains(*crop)).count() >= 3,
        "result page should list three crops from the fixed target list"
    );
}

#[tokio::test]
async fn test_submit_missing_field_shows_error() {
    let app = create_router();

    // rainfall omitted
    let body = "N=90&P=65&K=85&temperature=35&humidity=55&ph=7.5&soil_type=2";
    let response = app.oneshot(form_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains(INVALID_INPUT_MESSAGE));
    // The form is re-rendered, with no recommendation table
    assert!(html.contains("<form"));
    assert!(!html.contains("sugarcane"));
}

#[tokio::test]
async fn test_submit_non_numeric_field_shows_error() {
    let app = create_router();

    let body = "N=90&P=65&K=85&temperature=35&humidity=55&ph=acidic&rainfall=200&soil_type=2";
    let response = app.oneshot(form_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains(INVALID_INPUT_MESSAGE));
    assert!(!html.contains("sugarcane"));
}

#[tokio::test]
async fn test_submit_out_of_range_soil_falls_back() {
    let app = create_router();

    let body = "N=90&P=65&K=85&temperature=35&humidity=55&ph=7.5&rainfall=200&soil_type=9";
    let response = app.oneshot(form_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert_eq!(
        html.matches("General Fertilizer").count(),
        3,
        "all three recommendations should use the fallback blend"
    );
}

// =========================================================================
// Section 4: JSON API
// =========================================================================

#[tokio::test]
async fn test_api_recommend_returns_ranked_records() {
    let app = create_router();

    let response = app
        .oneshot(api_request(serde_json::json!({
            "N": 90, "P": 65, "K": 85,
            "temperature": 35, "humidity": 55,
            "ph": 7.5, "rainfall": 200,
            "soil_type": 2,
            "algorithm": "naive_bayes"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_response(response).await;
    assert_eq!(body["algorithm"], "naive_bayes");

    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0]["crop"], "sugarcane");
    assert_eq!(recs[0]["fertilizer"], "FYM + Urea for Sandy");

    // Descending probabilities, distinct crops, names from the fixed list
    let probs: Vec<f64> = recs
        .iter()
        .map(|r| r["probability"].as_f64().unwrap())
        .collect();
    assert!(probs[0] >= probs[1] && probs[1] >= probs[2]);

    let mut crops: Vec<&str> = recs.iter().map(|r| r["crop"].as_str().unwrap()).collect();
    for crop in &crops {
        assert!(CROP_TARGETS.contains(crop));
    }
    crops.sort_unstable();
    crops.dedup();
    assert_eq!(crops.len(), 3);
}

#[tokio::test]
async fn test_api_recommend_logistic_regression() {
    let app = create_router();

    let response = app
        .oneshot(api_request(serde_json::json!({
            "N": 50, "P": 40, "K": 60,
            "temperature": 28, "humidity": 80,
            "ph": 6.5, "rainfall": 100,
            "soil_type": 0,
            "algorithm": "logistic_regression"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_response(response).await;
    assert_eq!(body["algorithm"], "logistic_regression");
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_api_recommend_rejects_malformed_payload() {
    let app = create_router();

    let response = app
        .oneshot(api_request(serde_json::json!({
            "N": "not a number", "P": 65, "K": 85,
            "temperature": 35, "humidity": 55,
            "ph": 7.5, "rainfall": 200,
            "soil_type": 2
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_response(response).await;
    assert_eq!(body["error"], INVALID_INPUT_MESSAGE);
}

#[tokio::test]
async fn test_api_recommend_rejects_missing_field() {
    let app = create_router();

    let response = app
        .oneshot(api_request(serde_json::json!({
            "N": 90, "P": 65, "K": 85,
            "temperature": 35, "humidity": 55,
            "ph": 7.5, "rainfall": 200
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
