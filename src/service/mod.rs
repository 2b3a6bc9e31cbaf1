//! Document service: mode state, persistence, and engine delegation.
//!
//! The service is the policy layer in front of the classification engine.
//! It decides when documents are stored with human-provided labels
//! (learning mode) and when the engine's own prediction is used (auto
//! mode), persists every raw fact in a [`DocumentStore`], and can rebuild
//! the engine from the store's history after a restart.

pub mod starter;
pub mod store;

pub use starter::{STARTER_EXAMPLES, load_starter_data};
pub use store::{DocumentStore, MemoryDocumentStore, StoredDocument};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::classify::{ClassificationEngine, Prediction};
use crate::error::{Result, TeczkaError};

/// Operating mode of the document service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    /// Every document is manually labeled before storage.
    Learning,
    /// The engine's prediction is used, optionally followed by correction.
    Auto,
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceMode::Learning => write!(f, "learning"),
            ServiceMode::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for ServiceMode {
    type Err = TeczkaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "learning" => Ok(ServiceMode::Learning),
            "auto" => Ok(ServiceMode::Auto),
            other => Err(TeczkaError::invalid_argument(format!(
                "Unknown service mode: {other}"
            ))),
        }
    }
}

/// A snapshot of service state for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStats {
    /// Number of documents recorded in the store.
    pub documents: usize,
    /// Distinct labels the engine has seen, sorted ascending.
    pub labels: Vec<String>,
    /// Whether the engine is predict-capable.
    pub trained: bool,
}

/// Document service that owns a store, an engine, and the operating mode.
///
/// The engine sits behind a read-write lock: `add_document` takes the write
/// lock so retraining is serialized against every classification, and a
/// reader can never observe a half-updated model.
pub struct DocumentService {
    store: Arc<dyn DocumentStore>,
    engine: RwLock<ClassificationEngine>,
    mode: RwLock<ServiceMode>,
}

impl DocumentService {
    /// Create a new service over the given store, starting in learning mode
    /// with a fresh engine.
    pub fn new(store: Arc<dyn DocumentStore>) -> Result<Self> {
        Ok(Self::with_engine(store, ClassificationEngine::new()?))
    }

    /// Create a new service with a pre-built engine.
    pub fn with_engine(store: Arc<dyn DocumentStore>, engine: ClassificationEngine) -> Self {
        DocumentService {
            store,
            engine: RwLock::new(engine),
            mode: RwLock::new(ServiceMode::Learning),
        }
    }

    /// Current operating mode.
    pub fn mode(&self) -> ServiceMode {
        *self.mode.read()
    }

    /// Switch the operating mode.
    pub fn set_mode(&self, mode: ServiceMode) {
        debug!("service mode set to {mode}");
        *self.mode.write() = mode;
    }

    /// Record a labeled document: persist it, then teach the engine.
    ///
    /// Returns the stored document. The engine's write lock is held across
    /// the `learn` call, so concurrent `classify` calls never observe a
    /// half-retrained model.
    pub fn add_document(
        &self,
        text: &str,
        area: &str,
        subarea: Option<&str>,
    ) -> Result<StoredDocument> {
        let document = self.store.save(text, area, subarea)?;

        let mut engine = self.engine.write();
        engine.learn(text, area)?;

        Ok(document)
    }

    /// Classify a text with the current engine.
    ///
    /// Returns `Ok(None)` while the engine cannot predict yet.
    pub fn classify(&self, text: &str) -> Result<Option<Prediction>> {
        self.engine.read().predict(text)
    }

    /// Rebuild the engine by replaying the store's full history.
    ///
    /// Documents are replayed oldest first, reproducing the original
    /// learning order. The old engine is replaced wholesale.
    pub fn rebuild_engine(&self) -> Result<()> {
        let mut rebuilt = ClassificationEngine::new()?;

        for document in self.store.all()?.into_iter().rev() {
            rebuilt.learn(&document.text, &document.area)?;
        }

        info!(
            "engine rebuilt from store: {} documents, {} labels",
            rebuilt.example_count(),
            rebuilt.labels().len()
        );

        *self.engine.write() = rebuilt;
        Ok(())
    }

    /// Snapshot of store and engine state.
    pub fn stats(&self) -> ServiceStats {
        let engine = self.engine.read();
        ServiceStats {
            documents: self.store.len(),
            labels: engine.labels(),
            trained: engine.is_trained(),
        }
    }

    /// The store backing this service.
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }
}
