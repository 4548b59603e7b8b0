//! Crop Advisor Rust Implementation
//!
//! Web form + JSON service recommending the top-3 crops (with fertilizer
//! pairings) for a set of soil/weather measurements. A stock probabilistic
//! classifier is refit on an embedded 10-row table on every request; there is
//! no persisted model, no stored data, and no shared state between requests.
//!
//! Known limitation: the training table and fertilizer table are hardcoded
//! placeholders without agronomic grounding. Treat the predictions as demo
//! output.

pub mod api_server;
pub mod dataset;
pub mod fertilizer;
pub mod model;
pub mod recommend;
pub mod web;

// Re-export commonly used types
pub use api_server::{create_router, INVALID_INPUT_MESSAGE};
pub use model::Algorithm;
pub use recommend::{recommend, CropInput, Recommendation, TOP_K};
