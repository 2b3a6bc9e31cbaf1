//! TF-IDF vectorizer for text feature extraction.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// Default bound on the vocabulary size.
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// TF-IDF vectorizer for text feature extraction.
///
/// The vocabulary is bounded: when the corpus contains more distinct tokens
/// than `max_features`, only the most frequent ones are kept. Ranking is
/// deterministic — tokens are ordered by total term count descending, with
/// token text ascending as the tie break, and column indices are assigned in
/// that order. Fitting the same corpus therefore always produces the same
/// feature space.
pub struct TfIdfVectorizer {
    /// Vocabulary: word -> column index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each column.
    idf: Vec<f64>,
    /// Total number of documents seen during the last fit.
    n_documents: usize,
    /// Upper bound on the vocabulary size.
    max_features: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("max_features", &self.max_features)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer and the
    /// default vocabulary bound.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::with_max_features(analyzer, DEFAULT_MAX_FEATURES)
    }

    /// Create a new TF-IDF vectorizer with a custom vocabulary bound.
    pub fn with_max_features(analyzer: Arc<dyn Analyzer>, max_features: usize) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            max_features,
            analyzer,
        }
    }

    /// Fit the vectorizer on training documents.
    ///
    /// The vocabulary and IDF table are rebuilt from scratch; nothing from a
    /// previous fit survives.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();
        let mut term_count: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let tokens = self.tokenize(doc)?;

            for token in &tokens {
                *term_count.entry(token.clone()).or_insert(0) += 1;
            }

            let unique_tokens: AHashSet<&String> = tokens.iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
            }
        }

        // Rank tokens by corpus frequency, keep the top max_features.
        let mut ranked: Vec<(String, usize)> = term_count.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let mut vocabulary = AHashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        let n = documents.len() as f64;

        for (idx, (word, _)) in ranked.into_iter().enumerate() {
            let df = *document_frequency.get(&word).unwrap_or(&0);
            // IDF = log((N + 1) / (df + 1)) + 1
            idf.push(((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(word, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Tokens outside the fitted vocabulary have no column and are dropped.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = self.tokenize(document)?;
        let mut tf = vec![0.0; self.vocabulary.len()];

        // Count term frequencies
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by document length
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        // Apply IDF
        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        Ok(tf)
    }

    /// Tokenize a document using the configured analyzer.
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Check whether the vectorizer has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.n_documents > 0
    }

    /// Look up the column index of a token in the fitted vocabulary.
    pub fn column_of(&self, token: &str) -> Option<usize> {
        self.vocabulary.get(token).copied()
    }
}
