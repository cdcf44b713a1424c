//! # Domain Types
//!
//! Core domain types used throughout the receipt service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Wire (untrusted)              Validated (trusted)                      │
//! │  ┌─────────────────┐           ┌─────────────────┐                      │
//! │  │   RawReceipt    │ validate  │     Receipt     │  evaluate            │
//! │  │  all Strings    │ ────────► │  NaiveDate      │ ─────────► points    │
//! │  │  camelCase JSON │           │  NaiveTime      │                      │
//! │  └─────────────────┘           │  Money total    │                      │
//! │  ┌─────────────────┐           │  Vec<Item>      │                      │
//! │  │    RawItem      │           └─────────────────┘                      │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   ReceiptId     │   │  ScoredReceipt  │                             │
//! │  │  UUID (opaque)  │   │  id + points    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Item` and `Receipt` have private fields and no public constructor.
//! The only way to obtain one is [`crate::validation::validate_receipt`].

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Wire DTOs
// =============================================================================

/// A receipt line exactly as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub short_description: String,
    pub price: String,
}

/// A receipt exactly as it arrives on the wire.
///
/// ## JSON Shape
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
///   "total": "6.49"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<RawItem>,
    pub total: String,
}

// =============================================================================
// Item
// =============================================================================

/// A validated receipt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    short_description: String,
    price: Money,
}

impl Item {
    pub(crate) fn new(short_description: String, price: Money) -> Self {
        Item {
            short_description,
            price,
        }
    }

    /// Description as submitted (not trimmed).
    #[inline]
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Length in characters of the description with surrounding whitespace
    /// removed.
    pub fn trimmed_description_len(&self) -> usize {
        self.short_description.trim().chars().count()
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A validated receipt, ready for scoring.
///
/// ## Invariants
/// - `items` is never empty
/// - `retailer` is non-empty and only holds allowed characters
/// - `total` is authoritative; it is NOT required to equal the item sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    retailer: String,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
    items: Vec<Item>,
    total: Money,
}

impl Receipt {
    pub(crate) fn new(
        retailer: String,
        purchase_date: NaiveDate,
        purchase_time: NaiveTime,
        items: Vec<Item>,
        total: Money,
    ) -> Self {
        Receipt {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        }
    }

    #[inline]
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    #[inline]
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    #[inline]
    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Receipt Id
// =============================================================================

/// Opaque identifier handed back after a receipt is processed.
///
/// Displays as a canonical lowercase hyphenated UUID:
/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        ReceiptId(uuid)
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(ReceiptId)
    }
}

// =============================================================================
// Scored Receipt
// =============================================================================

/// A store entry: the identifier and the points it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredReceipt {
    pub id: ReceiptId,
    pub points: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================
