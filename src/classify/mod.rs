//! Incremental text classification over a growing labeled corpus.
//!
//! This module provides the classification engine at the heart of Teczka:
//! documents are vectorized with TF-IDF over a bounded vocabulary and
//! classified with a multinomial naive Bayes model. Every labeled example
//! retrains the model from scratch on the full corpus, so predictions always
//! reflect everything learned so far.
//!
//! # Architecture
//!
//! - `ClassificationEngine`: owns the corpus, the vectorizer, and the model
//! - `TfIdfVectorizer`: feature extraction using TF-IDF
//! - `MultinomialNb`: probabilistic classifier with per-label confidence
//! - `TrainingExample`: training data structure
//!
//! # Example
//!
//! ```rust
//! use teczka::classify::ClassificationEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = ClassificationEngine::new()?;
//! assert!(!engine.can_predict());
//!
//! engine.learn("Invoice from company", "Finanse")?;
//! engine.learn("Meeting notes", "Sluzbowe")?;
//! assert!(engine.can_predict());
//!
//! let prediction = engine.predict("Invoice from company")?.unwrap();
//! assert_eq!(prediction.label, "Finanse");
//! # Ok(())
//! # }
//! ```

mod engine;
mod naive_bayes;
mod tfidf;
mod types;

// Public exports
pub use engine::ClassificationEngine;
pub use naive_bayes::MultinomialNb;
pub use tfidf::TfIdfVectorizer;
pub use types::{Prediction, TrainingExample, load_training_examples};
