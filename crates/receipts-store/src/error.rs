//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ReceiptStore / ReceiptService                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in receipts-api) ← NotFound → 404, everything else → 500    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No entry for the identifier.
    ///
    /// ## When This Occurs
    /// - The id was never issued by this process
    /// - The id is not a well-formed UUID
    /// - The process restarted since the id was issued
    #[error("No receipt found for id: {id}")]
    NotFound { id: String },

    /// An entry for the identifier already exists.
    ///
    /// Entries are write-once; a second `put` for the same id is refused.
    #[error("Receipt id already exists: {id}")]
    DuplicateId { id: String },

    /// Every generated id collided with an existing entry.
    #[error("Could not allocate a fresh receipt id after {attempts} attempts")]
    IdExhausted { attempts: usize },

    /// A thread panicked while holding the store lock.
    #[error("Receipt store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Creates a NotFound error for a given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// Creates a DuplicateId error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        StoreError::DuplicateId { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
