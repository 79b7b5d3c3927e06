//! Offer identifier newtype with a smart constructor.
//!
//! Identifiers validate non-empty strings at construction time.
//! The raw constructor is never exported - use the smart constructor only.

use std::fmt;

/// Unique identifier for an offer, shared between the catalog and the
/// detail collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OfferId(String);

impl OfferId {
    /// Smart constructor: validates a non-empty identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidOfferId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidOfferId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidOfferId {
    #[error("Offer ID cannot be empty")]
    Empty,
}

// ===== Tests =====
