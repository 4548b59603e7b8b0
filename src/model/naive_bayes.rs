//! Gaussian Naive Bayes
//!
//! Per-feature Gaussian likelihoods with class priors taken from label
//! frequencies. Scores accumulate in log space and are normalized with
//! log-sum-exp, so single-sample classes (variance zero before smoothing)
//! stay finite.

use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Portion of the largest per-feature variance added to every class variance.
/// Keeps the Gaussian density defined when a class has a single training row.
pub const VAR_SMOOTHING: f64 = 1e-9;

/// A fitted Gaussian naive Bayes classifier.
#[derive(Debug)]
pub struct GaussianNaiveBayes {
    /// Per-class feature means, shape (classes, features).
    means: Array2<f64>,
    /// Per-class smoothed feature variances, same shape.
    variances: Array2<f64>,
    /// Log prior per class.
    log_priors: Array1<f64>,
}

impl GaussianNaiveBayes {
    /// Fit on a feature matrix and integer labels.
    ///
    /// Labels must lie in `0..n_classes` where `n_classes` is
    /// `max(label) + 1`; classes with no rows get a floored prior and never
    /// win the ranking.
    pub fn fit(x: &Array2<f64>, y: &[usize]) -> Self {
        let n_samples = x.nrows();
        let n_features = x.ncols();
        let n_classes = y.iter().copied().max().map_or(0, |m| m + 1);

        // Smoothing floor scales with the widest feature.
        let global_var = x.var_axis(Axis(0), 0.0);
        let epsilon = VAR_SMOOTHING * global_var.iter().copied().fold(0.0, f64::max);

        let mut counts = vec![0usize; n_classes];
        let mut means = Array2::<f64>::zeros((n_classes, n_features));
        for (row, &label) in x.outer_iter().zip(y) {
            counts[label] += 1;
            let mut mean_row = means.row_mut(label);
            mean_row += &row;
        }
        for (c, &count) in counts.iter().enumerate() {
            if count > 0 {
                means.row_mut(c).mapv_inplace(|v| v / count as f64);
            }
        }

        let mut variances = Array2::<f64>::zeros((n_classes, n_features));
        for (row, &label) in x.outer_iter().zip(y) {
            let diff = &row - &means.row(label);
            let mut var_row = variances.row_mut(label);
            var_row += &(&diff * &diff);
        }
        for (c, &count) in counts.iter().enumerate() {
            let denom = count.max(1) as f64;
            variances
                .row_mut(c)
                .mapv_inplace(|v| v / denom + epsilon);
        }

        let log_priors = Array1::from_iter(
            counts
                .iter()
                .map(|&c| (c as f64 / n_samples as f64).max(1e-300).ln()),
        );

        Self {
            means,
            variances,
            log_priors,
        }
    }

    /// Class-probability vector for a single feature row.
    pub fn predict_proba(&self, sample: ArrayView1<f64>) -> Array1<f64> {
        let jll = self.joint_log_likelihood(sample);

        // log-sum-exp normalization
        let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut probs = jll.mapv(|v| (v - max).exp());
        let total = probs.sum();
        if total > 0.0 {
            probs /= total;
        }
        probs
    }

    /// Unnormalized log P(class) + log P(sample | class) per class.
    fn joint_log_likelihood(&self, sample: ArrayView1<f64>) -> Array1<f64> {
        const LN_2PI: f64 = 1.8378770664093453;

        let n_classes = self.log_priors.len();
        let mut jll = Array1::<f64>::zeros(n_classes);
        for c in 0..n_classes {
            let mut score = self.log_priors[c];
            for ((&x, &mean), &var) in sample
                .iter()
                .zip(self.means.row(c))
                .zip(self.variances.row(c))
            {
                let diff = x - mean;
                score += -0.5 * (LN_2PI + var.ln()) - diff * diff / (2.0 * var);
            }
            jll[c] = score;
        }
        jll
    }
}
