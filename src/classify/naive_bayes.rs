//! Multinomial naive Bayes classifier.

use log::debug;

use crate::error::{Result, TeczkaError};

/// Default Laplace smoothing constant.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Multinomial naive Bayes classifier over count or frequency features.
///
/// Fractional feature values (for example TF-IDF weights) are accepted. All
/// probability work happens in log space; `predict_proba` normalizes with
/// log-sum-exp, so the returned distribution always sums to 1.
///
/// Classes are kept sorted lexicographically. Downstream argmax keeps the
/// first maximum, so a probability tie resolves to the smallest label.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Laplace smoothing constant.
    alpha: f64,
    /// Known class labels, sorted ascending.
    classes: Vec<String>,
    /// Log prior per class.
    class_log_prior: Vec<f64>,
    /// Log likelihood per class and feature column.
    feature_log_prob: Vec<Vec<f64>>,
    /// Width of the feature space seen during fit.
    n_features: usize,
}

impl MultinomialNb {
    /// Create a new classifier with the default smoothing constant.
    pub fn new() -> Self {
        Self::with_alpha(DEFAULT_ALPHA)
    }

    /// Create a new classifier with a custom smoothing constant.
    pub fn with_alpha(alpha: f64) -> Self {
        MultinomialNb {
            alpha,
            classes: Vec::new(),
            class_log_prior: Vec::new(),
            feature_log_prob: Vec::new(),
            n_features: 0,
        }
    }

    /// Fit the classifier on a feature matrix and parallel label list.
    ///
    /// All previous parameters are replaced; nothing from an earlier fit
    /// survives.
    pub fn fit(&mut self, rows: &[Vec<f64>], labels: &[String]) -> Result<()> {
        if rows.is_empty() {
            return Err(TeczkaError::model("Cannot fit on an empty feature matrix"));
        }
        if rows.len() != labels.len() {
            return Err(TeczkaError::model(format!(
                "Feature matrix has {} rows but {} labels were given",
                rows.len(),
                labels.len()
            )));
        }

        let n_features = rows[0].len();
        if rows.iter().any(|row| row.len() != n_features) {
            return Err(TeczkaError::model("Feature matrix rows have uneven widths"));
        }

        let mut classes: Vec<String> = labels.to_vec();
        classes.sort();
        classes.dedup();

        let n_classes = classes.len();
        let mut sample_count = vec![0usize; n_classes];
        let mut feature_sum = vec![vec![0.0f64; n_features]; n_classes];

        for (row, label) in rows.iter().zip(labels) {
            // Labels come from `classes`, so the lookup cannot fail.
            let class_idx = classes
                .binary_search(label)
                .map_err(|_| TeczkaError::model(format!("Unknown label: {label}")))?;
            sample_count[class_idx] += 1;
            for (j, value) in row.iter().enumerate() {
                feature_sum[class_idx][j] += value;
            }
        }

        let n_samples = rows.len() as f64;
        let mut class_log_prior = Vec::with_capacity(n_classes);
        let mut feature_log_prob = Vec::with_capacity(n_classes);

        for class_idx in 0..n_classes {
            class_log_prior.push((sample_count[class_idx] as f64 / n_samples).ln());

            let class_total: f64 = feature_sum[class_idx].iter().sum();
            let denominator = class_total + self.alpha * n_features as f64;
            let log_probs: Vec<f64> = feature_sum[class_idx]
                .iter()
                .map(|&sum| ((sum + self.alpha) / denominator).ln())
                .collect();
            feature_log_prob.push(log_probs);
        }

        debug!(
            "fitted naive bayes: {} classes, {} features, {} samples",
            n_classes,
            n_features,
            rows.len()
        );

        self.classes = classes;
        self.class_log_prior = class_log_prior;
        self.feature_log_prob = feature_log_prob;
        self.n_features = n_features;

        Ok(())
    }

    /// Compute the normalized log posterior per class for one feature row.
    pub fn predict_log_proba(&self, row: &[f64]) -> Result<Vec<f64>> {
        if !self.is_fitted() {
            return Err(TeczkaError::model("Classifier has not been fitted"));
        }
        if row.len() != self.n_features {
            return Err(TeczkaError::model(format!(
                "Expected {} features but got {}",
                self.n_features,
                row.len()
            )));
        }

        let joint: Vec<f64> = self
            .class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior
                    + row
                        .iter()
                        .zip(log_probs)
                        .map(|(value, log_prob)| value * log_prob)
                        .sum::<f64>()
            })
            .collect();

        // Normalize with log-sum-exp
        let max = joint.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let log_sum = max
            + joint
                .iter()
                .map(|&value| (value - max).exp())
                .sum::<f64>()
                .ln();

        Ok(joint.into_iter().map(|value| value - log_sum).collect())
    }

    /// Compute the posterior probability per class for one feature row.
    ///
    /// The returned vector is parallel to [`classes`](Self::classes) and
    /// sums to 1.
    pub fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>> {
        let log_proba = self.predict_log_proba(row)?;
        Ok(log_proba.into_iter().map(f64::exp).collect())
    }

    /// Known class labels, sorted ascending.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check whether the classifier has been fitted.
    pub fn is_fitted(&self) -> bool {
        !self.classes.is_empty()
    }

    /// The smoothing constant used by this classifier.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new()
    }
}
