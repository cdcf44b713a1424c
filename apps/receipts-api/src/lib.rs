//! # Receipts API
//!
//! HTTP front end for the receipt points service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipts API Server                              │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► routes ───► ReceiptService ───► Store    │
//! │                                 │                                       │
//! │                                 └──► validate_receipt (400 on failure) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPTS_HOST` - bind address (default: 0.0.0.0)
//! - `RECEIPTS_PORT` - HTTP port (default: 8080)
//! - `RECEIPTS_TOTAL_THRESHOLD_BONUS` - award +5 for totals above 10.00 (default: true)
//! - `RECEIPTS_REQUIRE_MATCHING_TOTAL` - reject totals that differ from the item sum
//!   (default: false)
//! - `RUST_LOG` - log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::{router, AppState};
