//! Process-wide current dataset store
//!
//! The store is the single owner of the mutable "current dataset" state.
//! Each upload replaces the dataset wholesale; presentation collaborators
//! read immutable snapshots and can never observe a half-replaced dataset.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use crate::app::models::EnrichedRecord;

/// Single-owner store for the current enriched dataset
///
/// Replacement swaps an `Arc` snapshot under a short write lock, so the
/// operation is atomic with respect to readers. Snapshots handed out before
/// a replacement stay valid and unchanged.
#[derive(Debug, Default)]
pub struct DatasetStore {
    current: RwLock<Arc<Vec<EnrichedRecord>>>,
}

impl DatasetStore {
    /// Create a store with an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the current dataset with a freshly computed one
    ///
    /// Stale records from the prior upload are fully discarded. Returns the
    /// published snapshot for immediate downstream use.
    pub fn replace(&self, records: Vec<EnrichedRecord>) -> Arc<Vec<EnrichedRecord>> {
        let snapshot = Arc::new(records);
        *self.write_guard() = Arc::clone(&snapshot);
        info!("Published dataset with {} records", snapshot.len());
        snapshot
    }

    /// Get a read-only snapshot of the current dataset
    pub fn snapshot(&self) -> Arc<Vec<EnrichedRecord>> {
        Arc::clone(&self.read_guard())
    }

    /// Number of records in the current dataset
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Check if the current dataset is empty
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Arc<Vec<EnrichedRecord>>> {
        // A poisoned lock only means a reader panicked mid-access; the Arc
        // swap itself cannot leave the dataset half-replaced
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Arc<Vec<EnrichedRecord>>> {
        self.current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
