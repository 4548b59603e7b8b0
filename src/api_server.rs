// Axum API Server Module
//
// Purpose: HTML form + JSON endpoints for crop/fertilizer recommendation.
// Every request is stateless: the classifier refits on the embedded table,
// so the router carries no shared state.

use std::collections::HashMap;

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    extract::Form,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use thiserror::Error;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::model::Algorithm;
use crate::recommend::{recommend, CropInput};
use crate::web::pages;

/// User-facing message for any malformed submission. Missing fields and
/// failed numeric coercion deliberately collapse into this one generic
/// message with no field-level detail.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter correct values.";

/// The single error kind a submission can produce.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", INVALID_INPUT_MESSAGE)]
pub struct InvalidInput;

// ============================================================================
// Router
// ============================================================================

pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // HTML form flow
        .route("/", get(form_page).post(submit_form))
        // JSON API mirror of the form submission
        .route("/api/recommend", post(api_recommend))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .layer(TraceLayer::new_for_http()) // Request logging
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn form_page() -> Html<String> {
    pages::render_form(None)
}

/// Handle a form submission: coerce the 8 required fields, run the
/// recommendation, and render the result. Any parse failure re-renders the
/// form with the generic error banner instead — no partial results.
async fn submit_form(
    payload: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    let fields = match payload {
        Ok(Form(fields)) => fields,
        Err(_) => return pages::render_form(Some(INVALID_INPUT_MESSAGE)),
    };

    match parse_submission(&fields) {
        Ok((input, algorithm)) => {
            tracing::debug!(algorithm = algorithm.tag(), "scoring form submission");
            let recommendations = recommend(&input, algorithm);
            pages::render_result(&recommendations)
        }
        Err(InvalidInput) => pages::render_form(Some(INVALID_INPUT_MESSAGE)),
    }
}

/// JSON request for the API route. Field names match the form fields.
#[derive(Debug, Deserialize)]
struct RecommendRequest {
    #[serde(flatten)]
    input: CropInput,
    algorithm: Option<String>,
}

async fn api_recommend(
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::InvalidInput)?;
    let algorithm = request
        .algorithm
        .as_deref()
        .map(Algorithm::from_tag)
        .unwrap_or_default();

    tracing::debug!(algorithm = algorithm.tag(), "scoring API request");
    let recommendations = recommend(&request.input, algorithm);

    Ok(Json(serde_json::json!({
        "algorithm": algorithm.tag(),
        "recommendations": recommendations,
    })))
}

// ============================================================================
// Form Field Coercion
// ============================================================================

/// Coerce the raw form fields into a typed input + algorithm selector.
///
/// The seven measurements parse as floats, `soil_type` as an integer, and the
/// optional `algorithm` tag defaults to naive Bayes when absent (unknown tags
/// also resolve to naive Bayes, in `Algorithm::from_tag`).
fn parse_submission(
    fields: &HashMap<String, String>,
) -> Result<(CropInput, Algorithm), InvalidInput> {
    let input = CropInput {
        n: float_field(fields, "N")?,
        p: float_field(fields, "P")?,
        k: float_field(fields, "K")?,
        temperature: float_field(fields, "temperature")?,
        humidity: float_field(fields, "humidity")?,
        ph: float_field(fields, "ph")?,
        rainfall: float_field(fields, "rainfall")?,
        soil_type: int_field(fields, "soil_type")?,
    };

    let algorithm = fields
        .get("algorithm")
        .map(|tag| Algorithm::from_tag(tag))
        .unwrap_or_default();

    Ok((input, algorithm))
}

fn float_field(fields: &HashMap<String, String>, name: &str) -> Result<f64, InvalidInput> {
    fields
        .get(name)
        .ok_or(InvalidInput)?
        .trim()
        .parse()
        .map_err(|_| InvalidInput)
}

fn int_field(fields: &HashMap<String, String>, name: &str) -> Result<i64, InvalidInput> {
    fields
        .get(name)
        .ok_or(InvalidInput)?
        .trim()
        .parse()
        .map_err(|_| InvalidInput)
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    InvalidInput,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput => (StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
