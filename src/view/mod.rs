//! TUI rendering and terminal management (impure shell)
//!
//! Everything stateful lives in `state`; this module owns the terminal,
//! translates key events into `Action`s and renders from snapshots.

mod cards;
mod controls;
mod detail;
mod styles;
pub mod survey;

pub use cards::render_cards;
pub use controls::{render_controls, SearchFocus};
pub use detail::render_detail_overlay;
pub use styles::{category_color, category_glyph, star_rating, ColorConfig, Theme};
pub use survey::{render_survey, SurveyForm};

use crate::catalog::CatalogStore;
use crate::model::AppError;
use crate::state::filter::LOCATION_ALL;
use crate::state::survey::QuestionKind;
use crate::state::{Action, BrowserState, DetailModalState, Effect, SortMode, SurveyState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Location dropdown entries, in cycle order. Keys are control-side;
/// the reducer maps them to catalog spellings.
const LOCATION_KEYS: &[&str] = &[
    LOCATION_ALL,
    "nizami",
    "28-may",
    "nasimi",
    "narimanov",
    "inşaatçılar",
    "əhmədli",
    "gənclik",
    "içərişəhər",
    "sahil",
];

/// Startup options resolved from the CLI and config.
#[derive(Debug, Clone, Default)]
pub struct ViewArgs {
    /// Whether the feedback survey tab is available.
    pub survey_enabled: bool,
    /// Search query applied before the first render.
    pub initial_search: Option<String>,
    /// Color switch resolved from `--no-color` and `NO_COLOR`.
    pub colors: ColorConfig,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    browser: BrowserState,
    modal: DetailModalState,
    survey: SurveyState,
    survey_form: SurveyForm,
    survey_visible: bool,
    survey_enabled: bool,
    search_focus: SearchFocus,
    theme: Theme,
    /// Raw search input; the reducer normalizes it on every keystroke.
    search_buffer: String,
    /// Selected index within the revealed slice.
    selected: usize,
    /// Distinct catalog categories in first-seen order, for cycling.
    categories: Vec<String>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(store: CatalogStore, args: ViewArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, store, args))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        // Initial render so the screen has content immediately
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(terminal: Terminal<B>, store: CatalogStore, args: ViewArgs) -> Self {
        let categories = distinct_categories(&store);
        let mut app = Self {
            terminal,
            browser: BrowserState::new(store),
            modal: DetailModalState::new(),
            survey: SurveyState::with_default_questions(),
            survey_form: SurveyForm::new(),
            survey_visible: false,
            survey_enabled: args.survey_enabled,
            search_focus: SearchFocus::Inactive,
            theme: Theme::new(args.colors),
            search_buffer: String::new(),
            selected: 0,
            categories,
        };
        if let Some(query) = args.initial_search {
            app.search_buffer = query.clone();
            app.dispatch(Action::SetSearch(query));
        }
        app
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if the app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, regardless of mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Detail overlay captures keys while open
        if self.modal.is_visible() {
            self.handle_modal_key(key);
            return false;
        }

        // Survey pane captures keys while open
        if self.survey_visible {
            self.handle_survey_key(key);
            return false;
        }

        // Search typing mode captures text input
        if self.search_focus == SearchFocus::Active {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.search_focus = SearchFocus::Inactive;
                }
                KeyCode::Char(ch) => {
                    self.search_buffer.push(ch);
                    self.dispatch(Action::SetSearch(self.search_buffer.clone()));
                }
                KeyCode::Backspace => {
                    self.search_buffer.pop();
                    self.dispatch(Action::SetSearch(self.search_buffer.clone()));
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('/') => self.search_focus = SearchFocus::Active,
            KeyCode::Char('d') => self.dispatch(Action::SetSort(SortMode::HighestDiscount)),
            KeyCode::Char('r') => self.dispatch(Action::SetSort(SortMode::HighestRating)),
            KeyCode::Char('l') => self.cycle_location(),
            KeyCode::Char('c') => self.cycle_category(),
            KeyCode::Char('C') => self.dispatch(Action::SetCategory(None)),
            KeyCode::Char('x') => {
                self.search_buffer.clear();
                self.dispatch(Action::ClearAll);
            }
            KeyCode::Char('m') => self.dispatch(Action::ShowMore),
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.browser.shown_len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('v') if self.survey_enabled => self.survey_visible = true,
            _ => {}
        }
        false
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let detail = self
            .modal
            .offer_id()
            .and_then(|id| self.browser.store().detail_for(id));
        let max = detail::content_height(detail).saturating_sub(1);
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.modal.close(),
            KeyCode::Down | KeyCode::Char('j') => self.modal.scroll_down(1, max),
            KeyCode::Up | KeyCode::Char('k') => self.modal.scroll_up(1),
            _ => {}
        }
    }

    fn handle_survey_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.survey_visible = false,
            KeyCode::Down => self.survey_form.cursor_down(&self.survey),
            KeyCode::Up => self.survey_form.cursor_up(),
            KeyCode::Char(' ') => {
                let free_text = self.survey.current_question().is_some_and(|q| {
                    matches!(q.kind, QuestionKind::Text | QuestionKind::Textarea)
                });
                if free_text {
                    self.survey_form.input_char(&self.survey, ' ');
                } else {
                    self.survey_form.toggle(&self.survey);
                }
            }
            KeyCode::Enter => self.survey_form.submit(&mut self.survey),
            KeyCode::Char(ch) => self.survey_form.input_char(&self.survey, ch),
            KeyCode::Backspace => self.survey_form.backspace(&self.survey),
            _ => {}
        }
    }

    /// Dispatch an action to the reducer and perform the returned effect.
    fn dispatch(&mut self, action: Action) {
        debug!(?action, "Dispatching");
        match self.browser.apply(action) {
            Effect::ScrollToResults => self.selected = 0,
            Effect::None => {}
        }
        // Selection index may now point past the revealed slice
        let last = self.browser.shown_len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }

    /// Advance the location dropdown to its next entry.
    fn cycle_location(&mut self) {
        let current = &self.browser.filter().location;
        let position = LOCATION_KEYS
            .iter()
            .position(|&key| crate::state::canonical_location(key) == current)
            .unwrap_or(0);
        let next = LOCATION_KEYS[(position + 1) % LOCATION_KEYS.len()];
        self.dispatch(Action::SetLocation(next.to_string()));
    }

    /// Advance the category selection: all → first → ... → last → all.
    fn cycle_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let next = match &self.browser.filter().category {
            None => Some(self.categories[0].clone()),
            Some(current) => self
                .categories
                .iter()
                .position(|c| c == current)
                .and_then(|i| self.categories.get(i + 1))
                .cloned(),
        };
        self.dispatch(Action::SetCategory(next));
    }

    /// Open the detail overlay on the selected card.
    fn open_selected(&mut self) {
        if let Some(offer) = self.browser.shown().nth(self.selected) {
            self.modal.open(offer.id.clone());
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let browser = &self.browser;
        let modal = &self.modal;
        let survey = &self.survey;
        let survey_form = &self.survey_form;
        let survey_visible = self.survey_visible;
        let search_focus = self.search_focus;
        let selected = self.selected;
        let theme = self.theme;
        let sync = browser.control_sync();
        let detail = modal
            .offer_id()
            .and_then(|id| browser.store().detail_for(id));

        self.terminal.draw(|frame| {
            let area = frame.area();
            let [controls_area, body_area] =
                Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

            render_controls(frame, controls_area, &sync, search_focus, theme);
            if survey_visible {
                render_survey(frame, body_area, survey, survey_form, theme);
            } else {
                render_cards(frame, body_area, browser, selected, theme);
            }
            render_detail_overlay(frame, area, modal, detail, theme);
        })?;
        Ok(())
    }
}

/// Distinct category values in first-seen catalog order.
fn distinct_categories(store: &CatalogStore) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for offer in store.offers() {
        if !categories.contains(&offer.category) {
            categories.push(offer.category.clone());
        }
    }
    categories
}

/// Initialize and run the TUI application over a loaded catalog.
///
/// Handles terminal setup, runs the event loop, and ensures terminal
/// state is restored even when the loop errors.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_store(store: CatalogStore, args: ViewArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(store, args)?;
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Tests =====
