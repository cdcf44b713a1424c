//! # Validation Module
//!
//! Structural validation of incoming receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (receipts-api)                                │
//! │  └── JSON shape: every field present, every scalar a string            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Character sets (retailer, descriptions)                           │
//! │  ├── Money pattern  (\d+\.\d{2})                                       │
//! │  ├── Date / time    (YYYY-MM-DD, HH:MM)                                │
//! │  └── At least one item                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Receipt (trusted) → rules::evaluate never fails                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipts_core::validation::{validate_receipt, ValidationOptions};
//! use receipts_core::{RawItem, RawReceipt};
//!
//! let raw = RawReceipt {
//!     retailer: "Walgreens".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "08:13".to_string(),
//!     items: vec![RawItem {
//!         short_description: "Pepsi - 12-oz".to_string(),
//!         price: "1.25".to_string(),
//!     }],
//!     total: "1.25".to_string(),
//! };
//!
//! let receipt = validate_receipt(raw, &ValidationOptions::default()).unwrap();
//! assert_eq!(receipt.items().len(), 1);
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Item, RawItem, RawReceipt, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Wire format of `purchaseDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of `purchaseTime`.
pub const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Options
// =============================================================================

/// Switches for checks that are not part of the base receipt shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationOptions {
    /// Reject receipts whose `total` differs from the sum of item prices.
    /// Off by default: the total is authoritative for scoring.
    pub require_matching_total: bool,
}

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a wire receipt and builds the trusted [`Receipt`].
///
/// This is the only constructor for `Receipt` and `Item`.
pub fn validate_receipt(raw: RawReceipt, options: &ValidationOptions) -> ValidationResult<Receipt> {
    validate_retailer(&raw.retailer)?;
    let purchase_date = validate_purchase_date(&raw.purchase_date)?;
    let purchase_time = validate_purchase_time(&raw.purchase_time)?;
    let total = validate_amount("total", &raw.total)?;

    if raw.items.is_empty() {
        return Err(ValidationError::Empty {
            field: "items".to_string(),
        });
    }

    let items = raw
        .items
        .into_iter()
        .map(validate_item)
        .collect::<ValidationResult<Vec<_>>>()?;

    if options.require_matching_total {
        check_total_matches(total, &items)?;
    }

    Ok(Receipt::new(
        raw.retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    ))
}

fn validate_item(raw: RawItem) -> ValidationResult<Item> {
    validate_short_description(&raw.short_description)?;
    let price = validate_amount("price", &raw.price)?;
    Ok(Item::new(raw.short_description, price))
}

fn check_total_matches(total: Money, items: &[Item]) -> ValidationResult<()> {
    let items_sum = items
        .iter()
        .try_fold(Money::from_cents(0), |acc, item| acc.checked_add(item.price()));

    match items_sum {
        Some(sum) if sum == total => Ok(()),
        Some(sum) => Err(ValidationError::TotalMismatch {
            total: total.to_string(),
            items_sum: sum.to_string(),
        }),
        None => Err(ValidationError::TotalMismatch {
            total: total.to_string(),
            items_sum: "overflow".to_string(),
        }),
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a retailer name.
///
/// ## Rules
/// - Must not be empty
/// - Letters, digits, underscore, whitespace, hyphen and `&` only
///   (the `[\w\s\-&]+` class, so tabs and all-whitespace names pass)
///
/// ## Example
/// ```rust
/// use receipts_core::validation::validate_retailer;
///
/// assert!(validate_retailer("M&M Corner Market").is_ok());
/// assert!(validate_retailer("Target!").is_err());
/// ```
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    validate_charset("retailer", retailer, |c| is_word_or_space(c) || c == '-' || c == '&')
}

/// Validates an item description.
///
/// ## Rules
/// - Must not be empty
/// - Letters, digits, underscore, whitespace and hyphen only
pub fn validate_short_description(description: &str) -> ValidationResult<()> {
    validate_charset("shortDescription", description, |c| {
        is_word_or_space(c) || c == '-'
    })
}

/// Validates a monetary string and parses it.
pub fn validate_amount(field: &str, value: &str) -> ValidationResult<Money> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Money::parse(value).map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

/// Parses `YYYY-MM-DD`.
pub fn validate_purchase_date(value: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| ValidationError::InvalidFormat {
        field: "purchaseDate".to_string(),
        reason: e.to_string(),
    })
}

/// Parses 24-hour `HH:MM`.
pub fn validate_purchase_time(value: &str) -> ValidationResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|e| ValidationError::InvalidFormat {
        field: "purchaseTime".to_string(),
        reason: e.to_string(),
    })
}

fn validate_charset(
    field: &str,
    value: &str,
    allowed: impl Fn(char) -> bool,
) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    match value.chars().find(|&c| !allowed(c)) {
        Some(found) => Err(ValidationError::InvalidCharacters {
            field: field.to_string(),
            found,
        }),
        None => Ok(()),
    }
}

// Same class as the regex `[\w\s]`.
fn is_word_or_space(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace()
}

// =============================================================================
// Unit Tests
// =============================================================================
