//! Browser state machine (pure).
//!
//! All state transitions are pure functions testable without a TUI.

pub mod browser;
pub mod engine;
pub mod filter;
pub mod modal;
pub mod reveal;
pub mod survey;

// Re-export for convenience
pub use browser::{Action, BrowserState, ControlSync, Effect};
pub use engine::visible_offers;
pub use filter::{canonical_location, FilterState, SortMode};
pub use modal::DetailModalState;
pub use reveal::RevealWindow;
pub use survey::{Answer, AnswerInput, Question, QuestionKind, SurveyError, SurveyState};
