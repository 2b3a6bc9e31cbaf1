//! Document store trait and in-memory implementation.
//!
//! The store durably records every raw `(text, area, subarea)` fact
//! independently of the classification engine. The engine only ever holds
//! derived state, so a store can replay its full history to rebuild an
//! engine after a restart.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A document as recorded by a [`DocumentStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Store-assigned identifier.
    pub id: u64,
    /// Raw document text.
    pub text: String,
    /// Top-level category.
    pub area: String,
    /// Optional finer-grained category.
    pub subarea: Option<String>,
    /// When the document was recorded.
    pub created_at: DateTime<Utc>,
}

/// Trait for stores that durably record labeled documents.
///
/// Implementations must be safe to share across threads.
pub trait DocumentStore: Send + Sync {
    /// Record a document and return it with its assigned id and timestamp.
    fn save(&self, text: &str, area: &str, subarea: Option<&str>) -> Result<StoredDocument>;

    /// All recorded documents, newest first.
    fn all(&self) -> Result<Vec<StoredDocument>>;

    /// Distinct `(area, subarea)` pairs, in first-seen order.
    fn categories(&self) -> Result<Vec<(String, Option<String>)>>;

    /// Number of recorded documents.
    fn len(&self) -> usize;

    /// Check if the store has no documents.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-memory document store.
///
/// This is the store used in tests and in hosts that keep their own durable
/// storage elsewhere. Ids are assigned monotonically starting from 1.
#[derive(Debug)]
pub struct MemoryDocumentStore {
    inner: RwLock<MemoryStoreInner>,
}

#[derive(Debug)]
struct MemoryStoreInner {
    documents: Vec<StoredDocument>,
    next_id: u64,
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        MemoryDocumentStore {
            inner: RwLock::new(MemoryStoreInner {
                documents: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Remove all documents from the store.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.documents.clear();
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn save(&self, text: &str, area: &str, subarea: Option<&str>) -> Result<StoredDocument> {
        let mut inner = self.inner.write();
        let document = StoredDocument {
            id: inner.next_id,
            text: text.to_string(),
            area: area.to_string(),
            subarea: subarea.map(|s| s.to_string()),
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.documents.push(document.clone());
        Ok(document)
    }

    fn all(&self) -> Result<Vec<StoredDocument>> {
        let inner = self.inner.read();
        let mut documents = inner.documents.clone();
        documents.reverse();
        Ok(documents)
    }

    fn categories(&self) -> Result<Vec<(String, Option<String>)>> {
        let inner = self.inner.read();
        let mut categories: Vec<(String, Option<String>)> = Vec::new();

        for document in &inner.documents {
            let pair = (document.area.clone(), document.subarea.clone());
            if !categories.contains(&pair) {
                categories.push(pair);
            }
        }

        Ok(categories)
    }

    fn len(&self) -> usize {
        self.inner.read().documents.len()
    }
}
