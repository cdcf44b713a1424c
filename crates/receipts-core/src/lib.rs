//! # receipts-core: Pure Points Logic
//!
//! This crate is the **heart** of the receipt service. It turns a receipt into
//! a points total using pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipts-api (HTTP)                          │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    receipts-store                               │   │
//! │  │         ReceiptService ──► IdGenerator ──► ReceiptStore         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipts-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   rules   │  │ validation│  │   │
//! │  │   │  Receipt  │  │   Money   │  │  evaluate │  │ RawReceipt│  │   │
//! │  │   │   Item    │  │  parsing  │  │  RuleSet  │  │ → Receipt │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO NETWORK • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, ReceiptId, wire DTOs)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rules`] - The eight points rules
//! - [`validation`] - Structural validation, the only way to build a Receipt
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipts_core::{rules, validation, RawItem, RawReceipt, ValidationOptions};
//!
//! let raw = RawReceipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![
//!         RawItem { short_description: "Gatorade".to_string(), price: "2.25".to_string() };
//!         4
//!     ],
//!     total: "9.00".to_string(),
//! };
//!
//! let receipt = validation::validate_receipt(raw, &ValidationOptions::default()).unwrap();
//! assert_eq!(rules::evaluate(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use rules::{PointsBreakdown, RuleSet};
pub use types::*;
pub use validation::ValidationOptions;
