//! # receipts-store: Storage Layer for the Receipt Service
//!
//! This crate owns the process-wide id → points map and the orchestration
//! that fills it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Data Flow                           │
//! │                                                                         │
//! │  HTTP handler (POST /receipts/process)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipts-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ReceiptService │    │  IdGenerator  │    │ ReceiptStore │  │   │
//! │  │   │ (service.rs)  │───►│   (id.rs)     │    │  (store.rs)  │  │   │
//! │  │   │               │    │  UUID v4      │    │ RwLock<Map>  │  │   │
//! │  │   │ process/points│───────────────────────►│ put / get    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  No persistence: entries live exactly as long as the process.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The concurrency-safe map
//! - [`id`] - Identifier generation
//! - [`service`] - Process / query orchestration
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use receipts_store::{ReceiptService, ReceiptStore};
//!
//! // Constructed once at startup, shared with every handler
//! let service = Arc::new(ReceiptService::new(Arc::new(ReceiptStore::new())));
//!
//! let id = service.process(&receipt)?;
//! let points = service.points(&id.to_string())?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod service;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, UuidGenerator};
pub use service::ReceiptService;
pub use store::ReceiptStore;
