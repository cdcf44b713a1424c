//! # Error Types
//!
//! Domain-specific error types for receipts-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipts-core errors (this file)                                      │
//! │  ├── CoreError        - Amount parsing (Money::parse)                  │
//! │  └── ValidationError  - Receipt rejected before scoring                │
//! │                                                                         │
//! │  receipts-store errors (separate crate)                                │
//! │  └── StoreError       - NotFound, duplicate id, poisoned lock          │
//! │                                                                         │
//! │  receipts-api errors (in app)                                          │
//! │  └── ApiError         - What HTTP clients see                          │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError::InvalidReceipt → 400                │
//! │        StoreError::NotFound → ApiError::NotFound → 404                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rule evaluator itself has no error path: a `Receipt` can only exist
//! after validation succeeded.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors from parsing domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary string is not of the form `<digits>.<two digits>`.
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// A monetary amount does not fit in i64 cents.
    #[error("Amount out of range: '{0}'")]
    AmountOutOfRange(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Every variant means the same thing to a client ("the receipt is
/// invalid"); the detail is kept for logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., bad date, price without two decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Field contains characters outside its allowed set.
    #[error("{field} contains invalid character '{found}'")]
    InvalidCharacters { field: String, found: char },

    /// A list that must be non-empty was empty.
    #[error("{field} must contain at least one entry")]
    Empty { field: String },

    /// Receipt total disagrees with the sum of its item prices.
    #[error("total {total} does not match item sum {items_sum}")]
    TotalMismatch { total: String, items_sum: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "retailer".to_string(),
        };
        assert_eq!(err.to_string(), "retailer is required");

        let err = ValidationError::InvalidCharacters {
            field: "retailer".to_string(),
            found: '$',
        };
        assert_eq!(err.to_string(), "retailer contains invalid character '$'");

        let err = ValidationError::Empty {
            field: "items".to_string(),
        };
        assert_eq!(err.to_string(), "items must contain at least one entry");
    }

    #[test]
    fn test_amount_error_messages() {
        let err = CoreError::InvalidAmount("1.5".to_string());
        assert_eq!(err.to_string(), "Invalid amount: '1.5'");
    }
}
