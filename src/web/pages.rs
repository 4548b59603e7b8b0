// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::response::Html;

use crate::fertilizer::SoilType;
use crate::model::{LOGISTIC_REGRESSION_TAG, NAIVE_BAYES_TAG};
use crate::recommend::Recommendation;

/// Inclusive integer range for a dropdown.
fn step_range(start: i64, stop: i64, step: usize) -> Vec<i64> {
    (start..=stop).step_by(step).collect()
}

// ============================================================================
// Entry Form
// ============================================================================

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub range_0_200: Vec<i64>,
    pub range_0_150: Vec<i64>,
    pub range_10_45: Vec<i64>,
    pub range_20_100: Vec<i64>,
    pub range_4_9: Vec<i64>,
    pub range_50_300: Vec<i64>,
    pub soil_options: Vec<(i64, &'static str)>,
    pub algorithm_options: Vec<&'static str>,
    pub error: Option<String>,
}

impl IndexTemplate {
    pub fn new(error: Option<&str>) -> Self {
        Self {
            title: "Crop & Fertilizer Advisor".to_string(),
            range_0_200: step_range(0, 200, 10),
            range_0_150: step_range(0, 150, 10),
            range_10_45: step_range(10, 45, 1),
            range_20_100: step_range(20, 100, 5),
            range_4_9: step_range(4, 9, 1),
            range_50_300: step_range(50, 300, 10),
            soil_options: [SoilType::Clay, SoilType::Loamy, SoilType::Sandy]
                .into_iter()
                .map(|soil| (soil.code(), soil.display_name()))
                .collect(),
            algorithm_options: vec![NAIVE_BAYES_TAG, LOGISTIC_REGRESSION_TAG],
            error: error.map(str::to_string),
        }
    }
}

/// Render the entry form, optionally with the submission error banner.
pub fn render_form(error: Option<&str>) -> Html<String> {
    Html(
        IndexTemplate::new(error)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

// ============================================================================
// Result Page
// ============================================================================

/// View row for one ranked recommendation (confidence preformatted so the
/// template stays free of float formatting).
pub struct RecommendationRow {
    pub rank: usize,
    pub crop: String,
    pub fertilizer: String,
    pub confidence_pct: String,
}

#[derive(Template)]
#[template(path = "pages/result.html")]
pub struct ResultTemplate {
    pub title: String,
    pub rows: Vec<RecommendationRow>,
}

/// Render the ranked recommendation list.
pub fn render_result(recommendations: &[Recommendation]) -> Html<String> {
    let rows = recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| RecommendationRow {
            rank: i + 1,
            crop: rec.crop.clone(),
            fertilizer: rec.fertilizer.clone(),
            confidence_pct: format!("{:.1}", rec.probability * 100.0),
        })
        .collect();

    let template = ResultTemplate {
        title: "Recommended Crops".to_string(),
        rows,
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}
