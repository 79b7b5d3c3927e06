//! Survey form widget: ephemeral input state plus rendering.
//!
//! The widget collects a raw answer for the current question; on submit
//! the pure `SurveyState` validates, records and advances. Validation
//! failures surface inline and clear on the next input.

use crate::state::survey::{AnswerInput, QuestionKind, SurveyError, SurveyState, OTHER_OPTION};
use crate::view::styles::Theme;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::collections::HashSet;

/// Ephemeral input state for the question being answered.
#[derive(Debug, Default)]
pub struct SurveyForm {
    cursor: usize,
    selected_radio: Option<usize>,
    checked: HashSet<usize>,
    text: String,
    other_text: String,
    error: Option<SurveyError>,
}

impl SurveyForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the option cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the option cursor down, clamped to the option count.
    pub fn cursor_down(&mut self, survey: &SurveyState) {
        if let Some(question) = survey.current_question() {
            if !question.options.is_empty() {
                self.cursor = (self.cursor + 1).min(question.options.len() - 1);
            }
        }
    }

    /// Select or toggle the option under the cursor.
    pub fn toggle(&mut self, survey: &SurveyState) {
        let Some(question) = survey.current_question() else {
            return;
        };
        self.error = None;
        match question.kind {
            QuestionKind::Radio => self.selected_radio = Some(self.cursor),
            QuestionKind::Checkbox => {
                if !self.checked.remove(&self.cursor) {
                    self.checked.insert(self.cursor);
                }
            }
            _ => {}
        }
    }

    /// Route a typed character to the right text buffer.
    pub fn input_char(&mut self, survey: &SurveyState, c: char) {
        self.error = None;
        if self.other_active(survey) {
            self.other_text.push(c);
        } else {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self, survey: &SurveyState) {
        self.error = None;
        if self.other_active(survey) {
            self.other_text.pop();
        } else {
            self.text.pop();
        }
    }

    /// Whether the Other free-text input is currently in play.
    fn other_active(&self, survey: &SurveyState) -> bool {
        let Some(question) = survey.current_question() else {
            return false;
        };
        let other_index = question
            .options
            .iter()
            .position(|&opt| opt == OTHER_OPTION);
        match question.kind {
            QuestionKind::Radio => other_index.is_some() && self.selected_radio == other_index,
            QuestionKind::Checkbox => {
                other_index.is_some_and(|index| self.checked.contains(&index))
            }
            _ => false,
        }
    }

    /// Submit the collected answer. On success the form resets for the
    /// next question; on failure the error is kept for rendering.
    pub fn submit(&mut self, survey: &mut SurveyState) {
        let Some(question) = survey.current_question() else {
            return;
        };
        let input = match question.kind {
            QuestionKind::Radio => AnswerInput::Choice {
                selected: self.selected_radio,
                other_text: self.other_text.clone(),
            },
            QuestionKind::Checkbox => {
                let mut selected: Vec<usize> = self.checked.iter().copied().collect();
                selected.sort_unstable();
                AnswerInput::Choices {
                    selected,
                    other_text: self.other_text.clone(),
                }
            }
            QuestionKind::Text | QuestionKind::Textarea => {
                AnswerInput::FreeText(self.text.clone())
            }
        };

        match survey.submit(input) {
            Ok(()) => *self = Self::new(),
            Err(err) => self.error = Some(err),
        }
    }

    pub fn error(&self) -> Option<&SurveyError> {
        self.error.as_ref()
    }
}

/// Render the survey pane: the current question, or the thank-you
/// screen once done.
pub fn render_survey(
    frame: &mut Frame,
    area: Rect,
    survey: &SurveyState,
    form: &SurveyForm,
    theme: Theme,
) {
    let (answered, total) = survey.progress();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Fikrin bizim üçün önəmlidir ")
        .title_bottom(format!(" {answered}/{total} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if survey.is_done() {
        thank_you_lines(theme)
    } else {
        question_lines(survey, form, theme)
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn question_lines(survey: &SurveyState, form: &SurveyForm, theme: Theme) -> Vec<Line<'static>> {
    let Some(question) = survey.current_question() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut prompt = vec![Span::styled(
        question.prompt.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if question.required {
        prompt.push(Span::styled(" *", theme.fg(Color::Red)));
    }
    lines.push(Line::from(prompt));
    lines.push(Line::default());

    match question.kind {
        QuestionKind::Radio | QuestionKind::Checkbox => {
            for (index, option) in question.options.iter().enumerate() {
                let marker = match question.kind {
                    QuestionKind::Radio if form.selected_radio == Some(index) => "(•)",
                    QuestionKind::Radio => "( )",
                    _ if form.checked.contains(&index) => "[x]",
                    _ => "[ ]",
                };
                let pointer = if form.cursor == index { "▸ " } else { "  " };
                lines.push(Line::from(format!("{pointer}{marker} {option}")));
            }
            if form.other_active(survey) {
                lines.push(Line::from(format!("    Dəqiq fikrini yaz: {}▏", form.other_text)));
            }
        }
        QuestionKind::Text | QuestionKind::Textarea => {
            let shown = if form.text.is_empty() {
                Span::styled(question.placeholder.to_string(), theme.fg(Color::DarkGray))
            } else {
                Span::raw(format!("{}▏", form.text))
            };
            lines.push(Line::from(shown));
        }
    }

    lines.push(Line::default());
    if let Some(err) = form.error() {
        lines.push(Line::from(Span::styled(err.to_string(), theme.fg(Color::Red))));
    }
    lines.push(Line::from(Span::styled(
        "Enter: göndər",
        theme.fg(Color::Cyan),
    )));
    lines
}

fn thank_you_lines(theme: Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(
            "✔ Təşəkkür edirik!",
            theme.fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from("Rəyinizi bizimlə paylaşdığınız üçün təşəkkürlər."),
    ]
}

// ===== Tests =====
