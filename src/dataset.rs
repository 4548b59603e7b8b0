//! Embedded Training Dataset
//!
//! The 10-row dummy crop table and its label/target alignment. Every
//! prediction request re-reads these constants; there is no runtime-mutable
//! dataset and nothing is loaded from disk.
//!
//! NOTE: the rows are placeholders without agronomic grounding. They exist so
//! the classifiers have something to fit; do not read domain meaning into
//! them.

use ndarray::{arr1, Array1, Array2};

/// Number of feature columns (7 numeric measurements + soil-type code).
pub const NUM_FEATURES: usize = 8;

/// Number of crop classes (one training row per class).
pub const NUM_CLASSES: usize = 10;

/// Column names, in training-matrix order.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
    "soil_type",
];

/// Crop names indexed by class label.
///
/// Ordering is load-bearing: label `i` used in training must resolve to
/// `CROP_TARGETS[i]`. Nothing validates this at runtime, so the alignment is
/// pinned by tests instead.
pub const CROP_TARGETS: [&str; NUM_CLASSES] = [
    "rice",
    "wheat",
    "maize",
    "cotton",
    "barley",
    "millet",
    "sugarcane",
    "soybean",
    "sunflower",
    "pulses",
];

// ============================================================================
// EMBEDDED TRAINING ROWS
// One row per crop class, columns in FEATURE_NAMES order.
// ============================================================================

static TRAINING_ROWS: [[f64; NUM_FEATURES]; NUM_CLASSES] = [
    // N      P     K     temp  humid ph   rain   soil
    [50.0, 40.0, 60.0, 28.0, 80.0, 6.5, 100.0, 0.0], // rice
    [100.0, 60.0, 80.0, 32.0, 70.0, 6.0, 150.0, 1.0], // wheat
    [150.0, 90.0, 100.0, 25.0, 60.0, 7.0, 120.0, 2.0], // maize
    [80.0, 70.0, 70.0, 30.0, 65.0, 6.8, 110.0, 0.0], // cotton
    [120.0, 85.0, 90.0, 33.0, 75.0, 6.2, 130.0, 1.0], // barley
    [30.0, 20.0, 25.0, 20.0, 85.0, 5.5, 90.0, 2.0], // millet
    [90.0, 65.0, 85.0, 35.0, 55.0, 7.5, 200.0, 0.0], // sugarcane
    [60.0, 45.0, 55.0, 27.0, 60.0, 6.7, 140.0, 1.0], // soybean
    [140.0, 95.0, 110.0, 26.0, 70.0, 6.1, 160.0, 2.0], // sunflower
    [110.0, 75.0, 95.0, 31.0, 68.0, 6.9, 170.0, 1.0], // pulses
];

/// Build the 10×8 training matrix.
///
/// Reconstructed on every call — predictions are stateless by design and the
/// table is small enough that caching buys nothing.
pub fn training_matrix() -> Array2<f64> {
    let flat: Vec<f64> = TRAINING_ROWS.iter().flatten().copied().collect();
    Array2::from_shape_vec((NUM_CLASSES, NUM_FEATURES), flat)
        .expect("embedded training table has fixed shape")
}

/// Class labels for the training rows (row `i` belongs to class `i`).
pub fn labels() -> Vec<usize> {
    (0..NUM_CLASSES).collect()
}

/// Training row for one class, as an owned feature vector.
pub fn class_row(label: usize) -> Option<Array1<f64>> {
    TRAINING_ROWS.get(label).map(|row| arr1(row))
}

/// Crop name for a class label.
pub fn crop_name(label: usize) -> Option<&'static str> {
    CROP_TARGETS.get(label).copied()
}
