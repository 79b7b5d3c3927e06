//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod detail;
pub mod error;
pub mod identifiers;
pub mod offer;

// Re-export for convenience
pub use detail::{Contact, ContactKind, OfferDetail};
pub use error::{AppError, CatalogError};
pub use identifiers::{InvalidOfferId, OfferId};
pub use offer::Offer;
