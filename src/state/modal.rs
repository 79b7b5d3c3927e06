//! State for the offer detail overlay.

use crate::model::OfferId;

/// Detail overlay state: closed, or open on one offer.
///
/// Scroll position is per-opening; it resets when the overlay closes so
/// the next offer starts at the top.
#[derive(Debug, Clone, Default)]
pub struct DetailModalState {
    /// Offer id the overlay is showing; `None` means closed.
    offer_id: Option<OfferId>,

    /// Scroll offset for long detail content.
    scroll_offset: usize,
}

impl DetailModalState {
    /// Create new overlay state (closed).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.offer_id.is_some()
    }

    /// Id of the offer being shown, when open.
    pub fn offer_id(&self) -> Option<&OfferId> {
        self.offer_id.as_ref()
    }

    /// Open the overlay on an offer, starting at the top.
    pub fn open(&mut self, offer_id: OfferId) {
        self.offer_id = Some(offer_id);
        self.scroll_offset = 0;
    }

    /// Close the overlay and reset the scroll position.
    pub fn close(&mut self) {
        self.offer_id = None;
        self.scroll_offset = 0;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scroll down by amount, clamped to max.
    pub fn scroll_down(&mut self, amount: usize, max: usize) {
        self.scroll_offset = (self.scroll_offset + amount).min(max);
    }

    /// Scroll up by amount, saturating at 0.
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }
}

// ===== Tests =====
