//! Common types for text classification.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Training sample for text classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Document text.
    pub text: String,
    /// Category label.
    pub label: String,
}

impl TrainingExample {
    /// Create a new training example.
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        TrainingExample {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// A classification result: the winning label and its posterior probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted category label.
    pub label: String,
    /// Posterior probability of the predicted label, in `[0, 1]`.
    pub confidence: f64,
}

/// Load training examples from a JSON file.
///
/// The file must contain a JSON array of `{"text": ..., "label": ...}`
/// objects.
pub fn load_training_examples<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>> {
    let content = std::fs::read_to_string(path)?;
    let examples: Vec<TrainingExample> = serde_json::from_str(&content)?;
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_training_example_new() {
        let example = TrainingExample::new("Invoice from company", "Finanse");
        assert_eq!(example.text, "Invoice from company");
        assert_eq!(example.label, "Finanse");
    }

    #[test]
    fn test_load_training_examples() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"text": "Invoice from company", "label": "Finanse"}},
                {{"text": "Meeting notes", "label": "Sluzbowe"}}]"#
        )
        .unwrap();

        let examples = load_training_examples(file.path()).unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].label, "Finanse");
        assert_eq!(examples[1].text, "Meeting notes");
    }

    #[test]
    fn test_load_training_examples_missing_file() {
        assert!(load_training_examples("/nonexistent/training.json").is_err());
    }

    #[test]
    fn test_prediction_serde_round_trip() {
        let prediction = Prediction {
            label: "Finanse".to_string(),
            confidence: 0.87,
        };

        let json = serde_json::to_string(&prediction).unwrap();
        let back: Prediction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prediction);
    }
}
