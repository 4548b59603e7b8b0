//! Multinomial Logistic Regression
//!
//! Softmax-linear classifier trained with full-batch gradient descent,
//! bounded by `max_iter` with an early gradient-tolerance exit. The weight
//! layout (intercept row stacked on top of the feature rows) follows the
//! multiclass regression used elsewhere in this stack.
//!
//! Raw form features span three orders of magnitude (pH around 6 vs rainfall
//! up to 300), so features are z-score standardized from training statistics
//! before descent and the same transform is applied at prediction time.

use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Gradient-descent settings.
#[derive(Debug, Clone, Copy)]
pub struct TrainParams {
    /// Hard bound on descent iterations.
    pub max_iter: usize,
    /// Step size on the averaged gradient.
    pub learning_rate: f64,
    /// Early exit once the summed absolute gradient falls below this.
    pub tolerance: f64,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            learning_rate: 0.5,
            tolerance: 1e-6,
        }
    }
}

/// A fitted multinomial logistic regression.
#[derive(Debug)]
pub struct MultinomialLogisticRegression {
    /// Shape (features + 1, classes); row 0 is the intercept.
    weights: Array2<f64>,
    /// Per-feature training means for standardization.
    feature_means: Array1<f64>,
    /// Per-feature training standard deviations (floored to 1 for constant
    /// columns).
    feature_stds: Array1<f64>,
}

impl MultinomialLogisticRegression {
    /// Fit on a feature matrix and integer labels in `0..n_classes`.
    pub fn fit(x: &Array2<f64>, y: &[usize], params: TrainParams) -> Self {
        let n_samples = x.nrows();
        let n_features = x.ncols();
        let n_classes = y.iter().copied().max().map_or(0, |m| m + 1);

        let feature_means = x.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(n_features));
        let feature_stds = x
            .var_axis(Axis(0), 0.0)
            .mapv(|v| if v.sqrt() > 1e-12 { v.sqrt() } else { 1.0 });

        // Standardized design matrix with a leading bias column.
        let mut design = Array2::<f64>::ones((n_samples, n_features + 1));
        for (i, row) in x.outer_iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                design[(i, j + 1)] = (value - feature_means[j]) / feature_stds[j];
            }
        }

        let mut one_hot = Array2::<f64>::zeros((n_samples, n_classes));
        for (i, &label) in y.iter().enumerate() {
            one_hot[(i, label)] = 1.0;
        }

        let mut weights = Array2::<f64>::zeros((n_features + 1, n_classes));
        for _ in 0..params.max_iter {
            let probs = softmax_rows(design.dot(&weights));
            let grad = design.t().dot(&(&probs - &one_hot)) / n_samples as f64;
            let grad_norm: f64 = grad.iter().map(|g| g.abs()).sum();
            weights -= &(grad * params.learning_rate);
            if grad_norm < params.tolerance {
                break;
            }
        }

        Self {
            weights,
            feature_means,
            feature_stds,
        }
    }

    /// Class-probability vector for a single feature row.
    pub fn predict_proba(&self, sample: ArrayView1<f64>) -> Array1<f64> {
        let n_features = self.feature_means.len();
        let mut row = Array1::<f64>::ones(n_features + 1);
        for j in 0..n_features {
            row[j + 1] = (sample[j] - self.feature_means[j]) / self.feature_stds[j];
        }

        let logits = row.dot(&self.weights);
        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut probs = logits.mapv(|v| (v - max).exp());
        let total = probs.sum();
        if total > 0.0 {
            probs /= total;
        }
        probs
    }
}

/// Row-wise softmax, shifted by the row maximum for stability.
fn softmax_rows(logits: Array2<f64>) -> Array2<f64> {
    let mut out = logits;
    for mut row in out.outer_iter_mut() {
        let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        row.mapv_inplace(|v| (v - max).exp());
        let total = row.sum();
        if total > 0.0 {
            row.mapv_inplace(|v| v / total);
        }
    }
    out
}
