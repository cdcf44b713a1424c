//! # Receipt Store
//!
//! In-memory, write-once map from receipt id to points.
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    RwLock<HashMap<ReceiptId, u64>>                      │
//! │                                                                         │
//! │  put(id, points)  ──► write lock ──► insert complete pair ──► unlock   │
//! │                                                                         │
//! │  get(id)          ──► read lock  ──► copy points          ──► unlock   │
//! │                                                                         │
//! │  • Readers run in parallel; a writer waits for them.                   │
//! │  • An entry becomes visible only as a whole (id AND points).           │
//! │  • No lock is ever held across an `.await`.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store holds no receipts, only derived points. Entries live as long
//! as the store; there is no update or delete.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use receipts_core::{ReceiptId, ScoredReceipt};
use tracing::trace;

use crate::error::{StoreError, StoreResult};

/// Concurrency-safe id → points map.
///
/// ## Usage
/// ```rust
/// use receipts_store::ReceiptStore;
/// use receipts_core::ReceiptId;
///
/// let store = ReceiptStore::new();
/// let id: ReceiptId = "7fb1377b-b223-49d9-a31a-5a02701dd310".parse().unwrap();
///
/// store.put(id, 28).unwrap();
/// assert_eq!(store.get(&id).unwrap(), 28);
/// ```
#[derive(Debug, Default)]
pub struct ReceiptStore {
    entries: RwLock<HashMap<ReceiptId, u64>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReceiptStore::default()
    }

    /// Records the points for a receipt id.
    ///
    /// ## Errors
    /// - `DuplicateId` if the id already has an entry (the existing entry
    ///   is left untouched)
    /// - `LockPoisoned`
    pub fn put(&self, id: ReceiptId, points: u64) -> StoreResult<()> {
        let mut entries = self.write()?;

        match entries.entry(id) {
            Entry::Occupied(_) => Err(StoreError::duplicate(id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(points);
                trace!(%id, points, "Stored receipt points");
                Ok(())
            }
        }
    }

    /// Records a scored receipt. Same semantics as [`ReceiptStore::put`].
    pub fn insert(&self, scored: ScoredReceipt) -> StoreResult<()> {
        self.put(scored.id, scored.points)
    }

    /// Returns the points stored for `id`.
    ///
    /// ## Errors
    /// - `NotFound` if the id was never put
    /// - `LockPoisoned`
    pub fn get(&self, id: &ReceiptId) -> StoreResult<u64> {
        self.read()?
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::not_found(id.to_string()))
    }

    /// Checks whether `id` has an entry.
    pub fn contains(&self, id: &ReceiptId) -> StoreResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    /// Number of stored entries.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<ReceiptId, u64>>> {
        self.entries.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<ReceiptId, u64>>> {
        self.entries.write().map_err(|_| StoreError::LockPoisoned)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use uuid::Uuid;

    fn new_id() -> ReceiptId {
        ReceiptId::from_uuid(Uuid::new_v4())
    }

    #[test]
    fn test_put_then_get() {
        let store = ReceiptStore::new();
        let id = new_id();

        store.put(id, 109).unwrap();

        assert_eq!(store.get(&id), Ok(109));
        assert_eq!(store.contains(&id), Ok(true));
        assert_eq!(store.len(), Ok(1));
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = ReceiptStore::new();
        let id = new_id();

        assert_eq!(store.get(&id), Err(StoreError::not_found(id.to_string())));
        assert_eq!(store.is_empty(), Ok(true));
    }

    #[test]
    fn test_duplicate_put_keeps_first_value() {
        let store = ReceiptStore::new();
        let id = new_id();

        store.put(id, 28).unwrap();
        assert_eq!(store.put(id, 99), Err(StoreError::duplicate(id.to_string())));
        assert_eq!(store.get(&id), Ok(28));
    }

    #[test]
    fn test_insert_scored_receipt() {
        let store = ReceiptStore::new();
        let scored = ScoredReceipt {
            id: new_id(),
            points: 0,
        };

        store.insert(scored).unwrap();
        assert_eq!(store.get(&scored.id), Ok(0));
    }

    #[test]
    fn test_concurrent_puts_and_gets() {
        let store = ReceiptStore::new();
        let ids: Vec<ReceiptId> = (0..64).map(|_| new_id()).collect();

        thread::scope(|s| {
            for chunk in ids.chunks(8) {
                let store = &store;
                s.spawn(move || {
                    for (offset, id) in chunk.iter().enumerate() {
                        store.put(*id, offset as u64).unwrap();
                        assert_eq!(store.get(id), Ok(offset as u64));
                    }
                });
            }
        });

        assert_eq!(store.len(), Ok(64));
        for chunk in ids.chunks(8) {
            for (offset, id) in chunk.iter().enumerate() {
                assert_eq!(store.get(id), Ok(offset as u64));
            }
        }
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = Arc::new(ReceiptStore::new());

        let poisoner = Arc::clone(&store);
        let result = thread::spawn(move || {
            let _guard = poisoner.entries.write().unwrap();
            panic!("poison the store lock");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(store.get(&new_id()), Err(StoreError::LockPoisoned));
        assert_eq!(store.put(new_id(), 1), Err(StoreError::LockPoisoned));
    }
}
