//! Classification result cache
//!
//! Unbounded, never evicted map from number to its computed result. Reads
//! take the shared lock, inserts the exclusive one; no lock is held while the
//! caller talks to the upstream service.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::ClassificationResult;

#[derive(Debug, Default)]
pub struct ClassificationCache {
    entries: RwLock<HashMap<i64, Arc<ClassificationResult>>>,
}

impl ClassificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, number: i64) -> Option<Arc<ClassificationResult>> {
        self.entries.read().await.get(&number).cloned()
    }

    /// Store a result unless one is already present, returning the stored one
    ///
    /// Concurrent misses for the same number may both compute; the first
    /// insert wins so every later hit serves identical bytes.
    pub async fn insert(&self, result: ClassificationResult) -> Arc<ClassificationResult> {
        let mut entries = self.entries.write().await;
        Arc::clone(
            entries
                .entry(result.number)
                .or_insert_with(|| Arc::new(result)),
        )
    }

    #[allow(clippy::len_without_is_empty)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
