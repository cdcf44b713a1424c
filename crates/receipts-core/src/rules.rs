//! # Points Rules
//!
//! The rule evaluator: a pure function from a validated [`Receipt`] to a
//! points total.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                      Points                                    │
//! │  ─  ────────────────────────  ───────────────────────────────────────   │
//! │  1  Retailer alphanumerics    +1 per letter/digit in retailer           │
//! │  2  Round total               +50 if total has no cents                 │
//! │  3  Quarter multiple          +25 if total is a multiple of 0.25        │
//! │  4  Item pairs                +5 per two items (count / 2)              │
//! │  5  Description length        +ceil(price * 0.2) per item whose         │
//! │                                trimmed description length is a          │
//! │                                non-zero multiple of 3                   │
//! │  6  Total threshold           +5 if total > 10.00                       │
//! │  7  Odd day                   +6 if purchase day-of-month is odd        │
//! │  8  Afternoon window          +10 if 14:00 < time < 16:00               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule is independent and non-negative; the total is their sum.
//! Sums saturate, so extreme prices cap the score instead of wrapping.
//!
//! ## Usage
//! ```rust,ignore
//! let points = rules::evaluate(&receipt);
//!
//! // Per-rule view, same total
//! let breakdown = rules::breakdown(&receipt, &RuleSet::default());
//! assert_eq!(breakdown.total(), points);
//! ```

use chrono::{Datelike, NaiveTime};
use serde::Serialize;

use crate::money::Money;
use crate::types::Receipt;

// =============================================================================
// Rule Constants
// =============================================================================

pub const ROUND_TOTAL_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const QUARTER_CENTS: i64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
/// 20% expressed in basis points.
pub const DESCRIPTION_PRICE_RATE_BPS: u32 = 2000;
pub const TOTAL_THRESHOLD_POINTS: u64 = 5;
pub const TOTAL_THRESHOLD: Money = Money::from_cents(1000);
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

const AFTERNOON_START: (u32, u32) = (14, 0);
const AFTERNOON_END: (u32, u32) = (16, 0);

// =============================================================================
// Rule Set
// =============================================================================

/// Toggles for rules that may be switched off per deployment.
///
/// Only the total-threshold rule is optional. The published Target example
/// totals 28 points, which is what the rules give with that rule off; with
/// it on (the default) the same receipt scores 33.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub total_threshold_bonus: bool,
}

impl RuleSet {
    /// All eight rules.
    pub const fn all() -> Self {
        RuleSet {
            total_threshold_bonus: true,
        }
    }

    /// Rules 1-5, 7 and 8; matches the published Target example.
    pub const fn without_total_threshold() -> Self {
        RuleSet {
            total_threshold_bonus: false,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::all()
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Points contributed by each rule for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointsBreakdown {
    pub retailer_alphanumerics: u64,
    pub round_total: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub description_length: u64,
    pub total_threshold: u64,
    pub odd_day: u64,
    pub afternoon_window: u64,
}

impl PointsBreakdown {
    /// Sum of all contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer_alphanumerics,
            self.round_total,
            self.quarter_multiple,
            self.item_pairs,
            self.description_length,
            self.total_threshold,
            self.odd_day,
            self.afternoon_window,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

// =============================================================================
// Evaluator
// =============================================================================

/// Scores a receipt with every rule enabled.
pub fn evaluate(receipt: &Receipt) -> u64 {
    evaluate_with(receipt, &RuleSet::default())
}

/// Scores a receipt with the given rule set.
pub fn evaluate_with(receipt: &Receipt, rules: &RuleSet) -> u64 {
    breakdown(receipt, rules).total()
}

/// Computes every rule's contribution.
pub fn breakdown(receipt: &Receipt, rules: &RuleSet) -> PointsBreakdown {
    let total = receipt.total();

    PointsBreakdown {
        retailer_alphanumerics: retailer_alphanumerics(receipt.retailer()),
        round_total: award(total.is_whole_dollars(), ROUND_TOTAL_POINTS),
        quarter_multiple: award(total.is_multiple_of(QUARTER_CENTS), QUARTER_MULTIPLE_POINTS),
        item_pairs: ((receipt.items().len() / 2) as u64).saturating_mul(ITEM_PAIR_POINTS),
        description_length: description_length(receipt),
        total_threshold: award(
            rules.total_threshold_bonus && total > TOTAL_THRESHOLD,
            TOTAL_THRESHOLD_POINTS,
        ),
        odd_day: award(receipt.purchase_date().day() % 2 == 1, ODD_DAY_POINTS),
        afternoon_window: award(in_afternoon_window(receipt.purchase_time()), AFTERNOON_POINTS),
    }
}

#[inline]
fn award(condition: bool, points: u64) -> u64 {
    if condition {
        points
    } else {
        0
    }
}

fn retailer_alphanumerics(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

fn description_length(receipt: &Receipt) -> u64 {
    receipt
        .items()
        .iter()
        .filter(|item| {
            let len = item.trimmed_description_len();
            len > 0 && len % DESCRIPTION_LENGTH_DIVISOR == 0
        })
        .map(|item| item.price().percentage_ceil_dollars(DESCRIPTION_PRICE_RATE_BPS))
        .fold(0, u64::saturating_add)
}

// Exclusive on both ends: 14:00 and 16:00 do not qualify.
fn in_afternoon_window(time: NaiveTime) -> bool {
    let hm = |(h, m): (u32, u32)| NaiveTime::from_hms_opt(h, m, 0);
    match (hm(AFTERNOON_START), hm(AFTERNOON_END)) {
        (Some(start), Some(end)) => start < time && time < end,
        _ => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
