//! Catalog store: the full offer list and the id → detail lookup.
//!
//! Loading is deliberately forgiving. A missing or malformed data file
//! logs an error and leaves that collection empty; the browser then shows
//! an empty list (or a fallback detail overlay) instead of crashing.

use crate::model::{CatalogError, Offer, OfferDetail, OfferId};
use std::collections::HashMap;
use std::path::Path;
use tracing::{error, info};

/// Owns the loaded catalog data. Offers are immutable once loaded; the
/// visible subset lives in `BrowserState`, not here.
#[derive(Debug, Default)]
pub struct CatalogStore {
    offers: Vec<Offer>,
    details: HashMap<OfferId, OfferDetail>,
}

impl CatalogStore {
    /// Build a store from already-parsed collections. Used by tests and
    /// by callers that source data elsewhere.
    pub fn new(offers: Vec<Offer>, details: Vec<OfferDetail>) -> Self {
        let details = details.into_iter().map(|d| (d.id.clone(), d)).collect();
        Self { offers, details }
    }

    /// Load both data files, degrading to empty collections on failure.
    pub fn load(offers_path: &Path, details_path: &Path) -> Self {
        let offers = match load_offers(offers_path) {
            Ok(offers) => {
                info!(count = offers.len(), path = %offers_path.display(), "Loaded offer catalog");
                offers
            }
            Err(err) => {
                error!(%err, "Error loading offers; catalog will be empty");
                Vec::new()
            }
        };

        let details = match load_details(details_path) {
            Ok(details) => {
                info!(count = details.len(), path = %details_path.display(), "Loaded offer details");
                details
            }
            Err(err) => {
                error!(%err, "Error loading details; overlays will use fallback content");
                Vec::new()
            }
        };

        Self::new(offers, details)
    }

    /// Strict load of both files; any failure is an error. Used when
    /// the paths were given explicitly and silent degradation would
    /// hide a typo.
    pub fn load_strict(offers_path: &Path, details_path: &Path) -> Result<Self, CatalogError> {
        let offers = load_offers(offers_path)?;
        let details = load_details(details_path)?;
        info!(
            offers = offers.len(),
            details = details.len(),
            "Loaded catalog (strict)"
        );
        Ok(Self::new(offers, details))
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Look up the detail record for an offer. A miss means the overlay
    /// renders fallback content.
    pub fn detail_for(&self, id: &OfferId) -> Option<&OfferDetail> {
        self.details.get(id)
    }
}

/// Strict load of the offers file.
pub fn load_offers(path: &Path) -> Result<Vec<Offer>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Strict load of the details file.
pub fn load_details(path: &Path) -> Result<Vec<OfferDetail>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

// ===== Tests =====
