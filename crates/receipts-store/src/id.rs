//! Receipt identifier generation.
//!
//! Ids are random UUID v4 values: 122 random bits, so collisions are not a
//! practical concern. The service still checks the store before using one.

use std::fmt::Debug;

use receipts_core::ReceiptId;
use uuid::Uuid;

/// Source of fresh receipt ids.
pub trait IdGenerator: Send + Sync + Debug {
    fn generate(&self) -> ReceiptId;
}

/// Random UUID v4 generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> ReceiptId {
        ReceiptId::from_uuid(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_canonical_v4() {
        let id = UuidGenerator.generate();

        assert_eq!(id.as_uuid().get_version_num(), 4);
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text, text.to_lowercase());
        assert_eq!(text.parse::<ReceiptId>().unwrap(), id);
    }

    #[test]
    fn test_generates_distinct_ids() {
        let ids: HashSet<ReceiptId> = (0..1000).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
