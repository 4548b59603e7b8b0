//! Crop & Fertilizer Recommendation
//!
//! The one nontrivial operation in this service: fit the selected classifier
//! on the embedded training table, rank class probabilities for the request's
//! feature row, and pair the top crops with their fertilizer lookups.
//!
//! Every call retrains from scratch. On a 10-row table both fits are
//! microsecond-scale, so the statelessness costs nothing and removes every
//! shared-state concern from the request path.

use ndarray::{arr1, Array1};
use serde::{Deserialize, Serialize};

use crate::dataset;
use crate::fertilizer;
use crate::model::{Algorithm, GaussianNaiveBayes, MultinomialLogisticRegression, TrainParams};

/// Number of ranked crops returned per request.
pub const TOP_K: usize = 3;

/// One prediction request: the seven measurements plus the soil-type code.
///
/// The soil code range is deliberately unchecked; codes outside 0/1/2 simply
/// miss every fertilizer table entry and fall back to the generic blend.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CropInput {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    pub soil_type: i64,
}

impl CropInput {
    /// Feature row in training-matrix column order.
    pub fn feature_row(&self) -> Array1<f64> {
        arr1(&[
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
            self.soil_type as f64,
        ])
    }
}

/// One ranked crop with its fertilizer pairing.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub crop: String,
    pub fertilizer: String,
    /// Model-estimated class probability for this crop given the input.
    pub probability: f64,
}

/// Rank the top crops for an input and pair each with its fertilizer.
///
/// Returns exactly [`TOP_K`] records with distinct crops, ordered by
/// descending probability. Tie order is whatever the (stable) sort produces.
pub fn recommend(input: &CropInput, algorithm: Algorithm) -> Vec<Recommendation> {
    let x = dataset::training_matrix();
    let y = dataset::labels();
    let sample = input.feature_row();

    let probs = match algorithm {
        Algorithm::NaiveBayes => GaussianNaiveBayes::fit(&x, &y).predict_proba(sample.view()),
        Algorithm::LogisticRegression => {
            MultinomialLogisticRegression::fit(&x, &y, TrainParams::default())
                .predict_proba(sample.view())
        }
    };

    let mut order: Vec<usize> = (0..probs.len()).collect();
    order.sort_by(|&a, &b| probs[b].total_cmp(&probs[a]));

    order
        .into_iter()
        .take(TOP_K)
        .map(|idx| {
            let crop = dataset::crop_name(idx).unwrap_or_default();
            Recommendation {
                crop: crop.to_string(),
                fertilizer: fertilizer::lookup(crop, input.soil_type).to_string(),
                probability: probs[idx],
            }
        })
        .collect()
}
