//! # Receipt Service
//!
//! Wires the rule evaluator, id generator and store together so transports
//! only deal with two calls.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process(receipt)                                                       │
//! │       │                                                                 │
//! │       ├──► rules::breakdown(receipt, rules) ──► points                 │
//! │       │                                                                 │
//! │       ├──► ids.generate() ──► id                                       │
//! │       │         ▲                                                       │
//! │       │         └── contains / DuplicateId? try again (max 3)          │
//! │       │                                                                 │
//! │       └──► store.insert(ScoredReceipt) ──► Ok(id)                      │
//! │                                                                         │
//! │  points("7fb1377b-...")                                                 │
//! │       │                                                                 │
//! │       ├──► parse id ── malformed? ──► NotFound                         │
//! │       │                                                                 │
//! │       └──► store.get(id) ──► Ok(points) | NotFound                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use receipts_core::{rules, Receipt, ReceiptId, RuleSet, ScoredReceipt};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::id::{IdGenerator, UuidGenerator};
use crate::store::ReceiptStore;

/// How many fresh ids `process` tries before giving up.
pub const MAX_ID_ATTEMPTS: usize = 3;

/// Process / query entry point shared by all request handlers.
///
/// ## Usage
/// ```rust,ignore
/// let service = ReceiptService::new(Arc::new(ReceiptStore::new()))
///     .with_rules(RuleSet::without_total_threshold());
///
/// let id = service.process(&receipt)?;
/// let points = service.points(&id.to_string())?;
/// ```
#[derive(Debug)]
pub struct ReceiptService {
    store: Arc<ReceiptStore>,
    ids: Box<dyn IdGenerator>,
    rules: RuleSet,
}

impl ReceiptService {
    /// Creates a service over `store` with random UUID ids and every rule on.
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        ReceiptService {
            store,
            ids: Box::new(UuidGenerator),
            rules: RuleSet::default(),
        }
    }

    /// Sets the rule set used by `process`.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Replaces the id generator.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn store(&self) -> &ReceiptStore {
        &self.store
    }

    /// Scores a receipt, stores the points under a fresh id and returns it.
    ///
    /// ## Errors
    /// - `IdExhausted` if every generated id was already taken
    /// - `LockPoisoned`
    pub fn process(&self, receipt: &Receipt) -> StoreResult<ReceiptId> {
        let breakdown = rules::breakdown(receipt, &self.rules);
        let points = breakdown.total();
        debug!(retailer = receipt.retailer(), ?breakdown, "Scored receipt");

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if self.store.contains(&id)? {
                warn!(%id, attempt, "Generated receipt id already in use, retrying");
                continue;
            }

            // Another writer may claim the id between the check and the insert.
            match self.store.insert(ScoredReceipt { id, points }) {
                Ok(()) => {
                    info!(%id, points, "Processed receipt");
                    return Ok(id);
                }
                Err(StoreError::DuplicateId { .. }) => {
                    warn!(%id, attempt, "Receipt id claimed concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(StoreError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Looks up the points for an id string.
    ///
    /// A string that is not a UUID cannot have been issued, so it is
    /// reported as `NotFound`.
    pub fn points(&self, id: &str) -> StoreResult<u64> {
        let parsed: ReceiptId = id.parse().map_err(|_| {
            debug!(id, "Malformed receipt id");
            StoreError::not_found(id)
        })?;

        self.store.get(&parsed).inspect_err(|e| {
            if matches!(e, StoreError::NotFound { .. }) {
                debug!(id, "Receipt id not found");
            }
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
