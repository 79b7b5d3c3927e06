//! Pagination controller: how many visible cards are revealed.

/// Cards revealed before the first "show more".
pub const INITIAL_REVEAL: usize = 3;

/// Cards added per "show more" activation.
pub const REVEAL_STEP: usize = 6;

/// Reveal window over the visible set.
///
/// The count may exceed the visible length; the renderer slices with
/// `shown` and decides the "show more" affordance via `has_more`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealWindow {
    count: usize,
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealWindow {
    pub fn new() -> Self {
        Self { count: INITIAL_REVEAL }
    }

    /// Current reveal count, uncapped.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Grow the window by one step. No other effect.
    pub fn advance(&mut self) {
        self.count += REVEAL_STEP;
    }

    /// Reset to the initial reveal. Called on every recompute.
    pub fn reset(&mut self) {
        self.count = INITIAL_REVEAL;
    }

    /// Number of cards to actually render.
    pub fn shown(&self, visible_len: usize) -> usize {
        self.count.min(visible_len)
    }

    /// Whether a "show more" affordance should be offered.
    pub fn has_more(&self, visible_len: usize) -> bool {
        self.count < visible_len
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_three() {
        assert_eq!(RevealWindow::new().count(), 3);
    }

    #[test]
    fn advance_adds_six() {
        let mut window = RevealWindow::new();
        window.advance();
        assert_eq!(window.count(), 9);
        window.advance();
        assert_eq!(window.count(), 15);
    }

    #[test]
    fn reset_returns_to_three() {
        let mut window = RevealWindow::new();
        window.advance();
        window.reset();
        assert_eq!(window.count(), 3);
    }

    #[test]
    fn shown_caps_at_visible_length() {
        let mut window = RevealWindow::new();
        window.advance(); // 9
        assert_eq!(window.shown(10), 9);
        window.advance(); // 15
        assert_eq!(window.shown(10), 10);
    }

    #[test]
    fn has_more_follows_the_reveal_progression() {
        // Catalog of 10 filtered items: 3 → 9 (more) → 15 (no more).
        let mut window = RevealWindow::new();
        assert!(window.has_more(10));
        window.advance();
        assert_eq!(window.count(), 9);
        assert!(window.has_more(10));
        window.advance();
        assert!(!window.has_more(10));
    }

    #[test]
    fn no_more_when_everything_shown() {
        let window = RevealWindow::new();
        assert!(!window.has_more(3));
        assert!(!window.has_more(0));
    }
}
