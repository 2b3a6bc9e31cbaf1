//! The incremental classification engine.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::classify::naive_bayes::MultinomialNb;
use crate::classify::tfidf::TfIdfVectorizer;
use crate::classify::types::{Prediction, TrainingExample};
use crate::error::Result;

/// Incremental supervised text classifier over a growing corpus.
///
/// The engine accumulates `(text, label)` examples. Once at least two
/// distinct labels have been seen, every further [`learn`](Self::learn) call
/// retrains the vectorizer and the model from scratch on the entire corpus.
/// Full retraining is deliberate — the corpus sizes this engine targets are
/// small, and a fresh fit keeps the vocabulary consistent with the corpus at
/// all times.
///
/// The engine has no global state; construct one instance per host and keep
/// it behind a lock if it is shared across threads. `learn` must be
/// serialized against all other calls, since it replaces the fitted model in
/// place.
///
/// # Examples
///
/// ```
/// use teczka::classify::ClassificationEngine;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut engine = ClassificationEngine::new()?;
///
/// assert!(!engine.learn("Invoice from company", "Finanse")?);
/// assert!(engine.learn("Meeting notes", "Sluzbowe")?);
///
/// let prediction = engine.predict("Invoice from company")?.unwrap();
/// assert_eq!(prediction.label, "Finanse");
/// assert!(prediction.confidence > 0.5);
/// # Ok(())
/// # }
/// ```
pub struct ClassificationEngine {
    /// TF-IDF vectorizer, refitted on every retrain.
    vectorizer: TfIdfVectorizer,
    /// Naive Bayes model, refitted on every retrain.
    model: MultinomialNb,
    /// Whether at least one successful retrain has occurred.
    trained: bool,
    /// Distinct labels observed so far, in sorted order.
    labels: BTreeSet<String>,
    /// Accumulated training texts.
    training_texts: Vec<String>,
    /// Labels parallel to `training_texts`.
    training_labels: Vec<String>,
}

impl std::fmt::Debug for ClassificationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationEngine")
            .field("examples", &self.training_texts.len())
            .field("labels", &self.labels)
            .field("trained", &self.trained)
            .field("vectorizer", &self.vectorizer)
            .finish()
    }
}

impl ClassificationEngine {
    /// Create a new engine with the standard analysis pipeline.
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(StandardAnalyzer::new()?)))
    }

    /// Create a new engine with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        ClassificationEngine {
            vectorizer: TfIdfVectorizer::new(analyzer),
            model: MultinomialNb::new(),
            trained: false,
            labels: BTreeSet::new(),
            training_texts: Vec::new(),
            training_labels: Vec::new(),
        }
    }

    /// Create a new engine and replay the given examples through
    /// [`learn`](Self::learn).
    pub fn from_examples(examples: Vec<TrainingExample>) -> Result<Self> {
        let mut engine = Self::new()?;
        for example in examples {
            engine.learn(&example.text, &example.label)?;
        }
        Ok(engine)
    }

    /// Record a labeled example and retrain if possible.
    ///
    /// Returns `Ok(true)` if a retrain occurred as a result of this call,
    /// i.e. the engine is now in a trained, predict-capable state, and
    /// `Ok(false)` while fewer than two distinct labels have been seen.
    pub fn learn(&mut self, text: &str, label: &str) -> Result<bool> {
        self.labels.insert(label.to_string());
        self.training_texts.push(text.to_string());
        self.training_labels.push(label.to_string());

        // With at least 2 distinct labels, train on the whole corpus
        if self.labels.len() >= 2 {
            self.retrain()?;
            self.trained = true;
            return Ok(true);
        }

        Ok(false)
    }

    /// Retrain vectorizer and model from scratch on all examples.
    fn retrain(&mut self) -> Result<()> {
        self.vectorizer.fit(&self.training_texts)?;

        let rows = self
            .training_texts
            .iter()
            .map(|text| self.vectorizer.transform(text))
            .collect::<Result<Vec<_>>>()?;

        self.model.fit(&rows, &self.training_labels)?;

        debug!(
            "retrained on {} examples: {} labels, vocabulary of {}",
            self.training_texts.len(),
            self.labels.len(),
            self.vectorizer.vocabulary_size()
        );

        Ok(())
    }

    /// Check whether the engine can classify yet.
    ///
    /// True iff at least one retrain has happened and at least two distinct
    /// labels have been observed. Always recomputed from state.
    pub fn can_predict(&self) -> bool {
        self.trained && self.labels.len() >= 2
    }

    /// Classify a text.
    ///
    /// Returns `Ok(None)` while [`can_predict`](Self::can_predict) is false —
    /// classification being unavailable is not an error. Otherwise the text
    /// is vectorized against the fitted vocabulary (unknown tokens are
    /// dropped) and the label with the highest posterior probability is
    /// returned. A probability tie resolves to the lexicographically
    /// smallest label. Prediction never retrains; repeated calls with no
    /// intervening `learn` return identical results.
    pub fn predict(&self, text: &str) -> Result<Option<Prediction>> {
        if !self.can_predict() {
            return Ok(None);
        }

        let row = self.vectorizer.transform(text)?;
        let probabilities = self.model.predict_proba(&row)?;

        // First strict maximum wins; classes are sorted ascending
        let mut best = 0;
        for (idx, &probability) in probabilities.iter().enumerate() {
            if probability > probabilities[best] {
                best = idx;
            }
        }

        Ok(Some(Prediction {
            label: self.model.classes()[best].clone(),
            confidence: probabilities[best],
        }))
    }

    /// Distinct labels observed so far, sorted ascending.
    pub fn labels(&self) -> Vec<String> {
        self.labels.iter().cloned().collect()
    }

    /// Total number of accumulated training examples.
    pub fn example_count(&self) -> usize {
        self.training_texts.len()
    }

    /// Whether at least one successful retrain has occurred.
    pub fn is_trained(&self) -> bool {
        self.trained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_engine_cannot_predict() {
        let engine = ClassificationEngine::new().unwrap();

        assert!(!engine.can_predict());
        assert!(!engine.is_trained());
        assert_eq!(engine.example_count(), 0);
        assert!(engine.predict("anything").unwrap().is_none());
    }

    #[test]
    fn test_single_label_cannot_predict() {
        let mut engine = ClassificationEngine::new().unwrap();

        let retrained = engine.learn("Invoice from company", "Finanse").unwrap();
        assert!(!retrained);
        assert!(!engine.can_predict());
        assert!(engine.predict("Invoice").unwrap().is_none());

        // More examples of the same label still don't cross the threshold
        let retrained = engine.learn("Tax return documents", "Finanse").unwrap();
        assert!(!retrained);
        assert!(!engine.can_predict());
    }

    #[test]
    fn test_second_label_triggers_training() {
        let mut engine = ClassificationEngine::new().unwrap();

        engine.learn("Invoice from company", "Finanse").unwrap();
        let retrained = engine.learn("Meeting notes", "Sluzbowe").unwrap();

        assert!(retrained);
        assert!(engine.can_predict());
        assert!(engine.is_trained());
        assert_eq!(engine.labels(), vec!["Finanse", "Sluzbowe"]);
    }

    #[test]
    fn test_exact_match_recovers_own_label() {
        let mut engine = ClassificationEngine::new().unwrap();
        engine.learn("Invoice from company", "Finanse").unwrap();
        engine.learn("Meeting notes", "Sluzbowe").unwrap();

        let prediction = engine.predict("Invoice from company").unwrap().unwrap();
        assert_eq!(prediction.label, "Finanse");
        assert!(prediction.confidence > 0.5);
    }

    #[test]
    fn test_unknown_vocabulary_still_classifies() {
        let mut engine = ClassificationEngine::new().unwrap();
        engine.learn("Invoice from company", "Finanse").unwrap();
        engine.learn("Meeting notes", "Sluzbowe").unwrap();

        let prediction = engine
            .predict("completely unrelated emoji 🎉🎉🎉")
            .unwrap()
            .unwrap();

        assert!(!prediction.label.is_empty());
        assert!(prediction.confidence > 0.0);
        assert!(prediction.confidence <= 1.0);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let mut engine = ClassificationEngine::new().unwrap();
        engine.learn("Invoice from company", "Finanse").unwrap();
        engine.learn("Meeting notes", "Sluzbowe").unwrap();

        let first = engine.predict("quarterly budget report").unwrap().unwrap();
        let second = engine.predict("quarterly budget report").unwrap().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_is_accepted() {
        let mut engine = ClassificationEngine::new().unwrap();
        engine.learn("", "Finanse").unwrap();
        engine.learn("Meeting notes", "Sluzbowe").unwrap();

        let prediction = engine.predict("").unwrap();
        assert!(prediction.is_some());
    }

    #[test]
    fn test_from_examples() {
        let engine = ClassificationEngine::from_examples(vec![
            TrainingExample::new("Invoice from company", "Finanse"),
            TrainingExample::new("Meeting notes", "Sluzbowe"),
            TrainingExample::new("Grocery shopping list", "Prywatne"),
        ])
        .unwrap();

        assert!(engine.can_predict());
        assert_eq!(engine.example_count(), 3);
        assert_eq!(engine.labels().len(), 3);
    }

    #[test]
    fn test_learning_keeps_growing_the_corpus() {
        let mut engine = ClassificationEngine::new().unwrap();
        engine.learn("Invoice from company", "Finanse").unwrap();
        engine.learn("Meeting notes", "Sluzbowe").unwrap();
        engine.learn("Bank statement for account", "Finanse").unwrap();

        assert_eq!(engine.example_count(), 3);
        assert_eq!(engine.labels().len(), 2);

        // The later example is part of the model now
        let prediction = engine.predict("Bank statement for account").unwrap().unwrap();
        assert_eq!(prediction.label, "Finanse");
    }
}
