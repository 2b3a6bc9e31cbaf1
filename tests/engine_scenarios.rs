use teczka::classify::{ClassificationEngine, TrainingExample};
use teczka::error::Result;

#[test]
fn fresh_engine_reports_classification_unavailable() -> Result<()> {
    let engine = ClassificationEngine::new()?;

    assert!(!engine.can_predict());
    assert!(engine.predict("anything")?.is_none());
    assert!(engine.labels().is_empty());
    assert_eq!(engine.example_count(), 0);
    Ok(())
}

#[test]
fn single_label_is_not_enough_to_train() -> Result<()> {
    let mut engine = ClassificationEngine::new()?;

    let retrained = engine.learn("Invoice from company", "Finanse")?;
    assert!(!retrained);
    assert!(!engine.can_predict());
    assert!(engine.predict("Invoice from company")?.is_none());
    Ok(())
}

#[test]
fn second_distinct_label_makes_engine_predict_capable() -> Result<()> {
    let mut engine = ClassificationEngine::new()?;

    engine.learn("Invoice from company", "Finanse")?;
    let retrained = engine.learn("Meeting notes", "Sluzbowe")?;

    assert!(retrained);
    assert!(engine.can_predict());
    Ok(())
}

#[test]
fn exact_corpus_text_recovers_its_own_label_with_confidence() -> Result<()> {
    let mut engine = ClassificationEngine::new()?;
    engine.learn("Invoice from company", "Finanse")?;
    engine.learn("Meeting notes", "Sluzbowe")?;

    let prediction = engine.predict("Invoice from company")?.unwrap();
    assert_eq!(prediction.label, "Finanse");
    assert!(prediction.confidence > 0.5);
    Ok(())
}

#[test]
fn novel_vocabulary_still_yields_a_forced_choice() -> Result<()> {
    let mut engine = ClassificationEngine::new()?;
    engine.learn("Invoice from company", "Finanse")?;
    engine.learn("Meeting notes", "Sluzbowe")?;

    // No token of this text appears in the corpus
    let prediction = engine.predict("completely unrelated emoji 🎉🎉🎉")?.unwrap();

    assert!(["Finanse", "Sluzbowe"].contains(&prediction.label.as_str()));
    assert!(prediction.confidence >= 0.0);
    assert!(prediction.confidence <= 1.0);
    Ok(())
}

#[test]
fn distinct_label_count_is_monotonic_and_gates_prediction() -> Result<()> {
    let mut engine = ClassificationEngine::new()?;
    let examples = [
        ("Invoice from company", "Finanse"),
        ("Tax return documents", "Finanse"),
        ("Meeting notes", "Sluzbowe"),
        ("Grocery shopping list", "Prywatne"),
        ("Bank statement", "Finanse"),
    ];

    let mut previous_label_count = 0;
    for (text, label) in examples {
        engine.learn(text, label)?;

        let label_count = engine.labels().len();
        assert!(label_count >= previous_label_count);
        previous_label_count = label_count;

        assert_eq!(engine.can_predict(), label_count >= 2);
        assert_eq!(engine.predict("anything")?.is_some(), label_count >= 2);
    }
    Ok(())
}

#[test]
fn repeated_predictions_are_identical() -> Result<()> {
    let mut engine = ClassificationEngine::new()?;
    engine.learn("Invoice from company for office supplies", "Finanse")?;
    engine.learn("Meeting notes from planning session", "Sluzbowe")?;
    engine.learn("Grocery shopping list milk bread", "Prywatne")?;

    for query in ["Invoice totals", "planning session notes", "🎉", ""] {
        let first = engine.predict(query)?.unwrap();
        let second = engine.predict(query)?.unwrap();
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn prediction_confidence_stays_in_range_and_label_is_known() -> Result<()> {
    let mut engine = ClassificationEngine::new()?;
    engine.learn("Invoice from company", "Finanse")?;
    engine.learn("Meeting notes", "Sluzbowe")?;
    engine.learn("Dentist appointment Thursday", "Prywatne")?;

    let known = engine.labels();
    for query in [
        "Invoice from company",
        "notes",
        "dentist cleaning",
        "something else entirely",
    ] {
        let prediction = engine.predict(query)?.unwrap();
        assert!(prediction.confidence >= 0.0);
        assert!(prediction.confidence <= 1.0);
        assert!(known.contains(&prediction.label));
    }
    Ok(())
}

#[test]
fn learning_a_new_label_keeps_old_examples_classifiable() -> Result<()> {
    let mut engine = ClassificationEngine::new()?;
    engine.learn("Invoice from company for office supplies", "Finanse")?;
    engine.learn("Meeting notes from planning session", "Sluzbowe")?;

    // A new, previously-unseen label retrains on the whole corpus
    engine.learn("Grocery shopping list milk bread eggs", "Prywatne")?;

    // The earlier example's exact text still maps to its own label, which
    // shares all of its vocabulary, ahead of labels sharing none of it
    let prediction = engine.predict("Invoice from company for office supplies")?.unwrap();
    assert_eq!(prediction.label, "Finanse");
    Ok(())
}

#[test]
fn engine_replay_from_examples_matches_incremental_learning() -> Result<()> {
    let examples = vec![
        TrainingExample::new("Invoice from company for office supplies", "Finanse"),
        TrainingExample::new("Meeting notes from planning session", "Sluzbowe"),
        TrainingExample::new("Grocery shopping list milk bread", "Prywatne"),
    ];

    let replayed = ClassificationEngine::from_examples(examples.clone())?;

    let mut incremental = ClassificationEngine::new()?;
    for example in &examples {
        incremental.learn(&example.text, &example.label)?;
    }

    assert_eq!(replayed.labels(), incremental.labels());
    assert_eq!(replayed.example_count(), incremental.example_count());

    for query in ["Invoice from company", "shopping list", "planning"] {
        assert_eq!(replayed.predict(query)?, incremental.predict(query)?);
    }
    Ok(())
}
