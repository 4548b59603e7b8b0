//! Probabilistic Classifiers
//!
//! Two small from-scratch classifiers over the embedded training table:
//! Gaussian naive Bayes (the default) and a multinomial logistic regression.
//! Both fit in microseconds on the 10-row table and are retrained on every
//! request — there is no persisted model state.

pub mod logreg;
pub mod naive_bayes;

pub use logreg::{MultinomialLogisticRegression, TrainParams};
pub use naive_bayes::GaussianNaiveBayes;

/// Form tag selecting the logistic regression model.
pub const LOGISTIC_REGRESSION_TAG: &str = "logistic_regression";

/// Form tag selecting the naive Bayes model (also the default).
pub const NAIVE_BAYES_TAG: &str = "naive_bayes";

/// Classifier selector carried by the form's optional `algorithm` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    NaiveBayes,
    LogisticRegression,
}

impl Algorithm {
    /// Parse a selector tag. Anything other than the logistic regression tag
    /// (including the empty string and unknown values) selects naive Bayes.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            LOGISTIC_REGRESSION_TAG => Self::LogisticRegression,
            _ => Self::NaiveBayes,
        }
    }

    /// Canonical tag for this selector.
    pub fn tag(self) -> &'static str {
        match self {
            Self::NaiveBayes => NAIVE_BAYES_TAG,
            Self::LogisticRegression => LOGISTIC_REGRESSION_TAG,
        }
    }
}
