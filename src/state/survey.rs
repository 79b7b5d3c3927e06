//! Progressive feedback survey (pure state machine).
//!
//! One question at a time; a submitted answer is validated, recorded and
//! advances to the next question. After the final question the survey is
//! done and the shell shows the thank-you screen.
//!
//! The "Digər" (Other) option on choice questions demands free text,
//! which replaces the literal option value in the recorded answer.

use std::collections::BTreeMap;
use thiserror::Error;

/// Literal option value that opens the free-text input.
pub const OTHER_OPTION: &str = "Digər";

/// Question kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Exactly one option.
    Radio,
    /// Zero or more options.
    Checkbox,
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    Textarea,
}

/// A single survey question.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: &'static str,
    pub kind: QuestionKind,
    pub prompt: &'static str,
    pub required: bool,
    pub options: &'static [&'static str],
    pub placeholder: &'static str,
}

/// The built-in question list.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question {
            id: "q1",
            kind: QuestionKind::Radio,
            prompt: "Platformadan istifadə edərdinmi?",
            required: true,
            options: &[
                "Bəli, mütləq istifadə edərdim",
                "Bəlkə istifadə edərəm",
                "Yox, istifadə etmərəm",
            ],
            placeholder: "",
        },
        Question {
            id: "q2",
            kind: QuestionKind::Checkbox,
            prompt: "Əgər istifadə etməzsənsə səbəbi nə ola bilər?",
            required: false,
            options: &[
                "Unudaram",
                "İstifadəsi çətindir",
                "Sayt olması (app deyil)",
                "Gündəlik həyatda ehtiyac duymuram",
                "Endirimlər azdır",
                OTHER_OPTION,
            ],
            placeholder: "",
        },
        Question {
            id: "q3",
            kind: QuestionKind::Textarea,
            prompt: "Dizaynda hansı çatışmazlıqları görürsən?",
            required: false,
            options: &[],
            placeholder: "Fikirlərini yaz...",
        },
        Question {
            id: "q4",
            kind: QuestionKind::Textarea,
            prompt: "Platformada olmayan, amma sənin istədiyin hər hansı bir şey varmı?",
            required: false,
            options: &[],
            placeholder: "Nə istəyirsənsə qeyd et...",
        },
        Question {
            id: "q5",
            kind: QuestionKind::Textarea,
            prompt: "Növbəti dəfə bir yerə getməzdən əvvəl bu platformaya baxacağını düşünürsənmi?",
            required: true,
            options: &[],
            placeholder: "Dürüst cavab yaz...",
        },
        Question {
            id: "q6",
            kind: QuestionKind::Checkbox,
            prompt: "Sənin üçün ən vacib kateqoriyalar hansılardır?",
            required: false,
            options: &["Yemək", "Əyləncə", "Geyim", "Təhsil", "Kofe"],
            placeholder: "",
        },
    ]
}

/// A recorded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Multi(Vec<String>),
}

/// Raw answer as collected by the form widget.
#[derive(Debug, Clone)]
pub enum AnswerInput {
    /// Radio: at most one selected option index plus the Other text.
    Choice {
        selected: Option<usize>,
        other_text: String,
    },
    /// Checkbox: selected option indices plus the Other text.
    Choices {
        selected: Vec<usize>,
        other_text: String,
    },
    /// Text or textarea contents.
    FreeText(String),
}

/// Validation failures for a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("An answer is required")]
    Required,
    #[error("The \"{OTHER_OPTION}\" option needs free text")]
    OtherTextRequired,
    #[error("Answer does not match the question kind")]
    KindMismatch,
    #[error("Option index out of range")]
    InvalidOption,
}

/// Survey progress and collected answers.
#[derive(Debug, Clone)]
pub struct SurveyState {
    questions: Vec<Question>,
    current: usize,
    answers: BTreeMap<&'static str, Answer>,
}

impl SurveyState {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            answers: BTreeMap::new(),
        }
    }

    /// Survey over the built-in question list.
    pub fn with_default_questions() -> Self {
        Self::new(default_questions())
    }

    /// The question awaiting an answer, `None` once done.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// 0-based progress: (answered, total).
    pub fn progress(&self) -> (usize, usize) {
        (self.current.min(self.questions.len()), self.questions.len())
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub fn answers(&self) -> &BTreeMap<&'static str, Answer> {
        &self.answers
    }

    /// Validate and record an answer for the current question, advancing
    /// on success. Submitting after completion is a no-op error-free
    /// `Ok`, mirroring a disabled form.
    pub fn submit(&mut self, input: AnswerInput) -> Result<(), SurveyError> {
        let Some(question) = self.questions.get(self.current) else {
            return Ok(());
        };

        let answer = validate(question, input)?;
        self.answers.insert(question.id, answer);
        self.current += 1;
        Ok(())
    }
}

/// Validate an input against a question, producing the recorded answer.
fn validate(question: &Question, input: AnswerInput) -> Result<Answer, SurveyError> {
    match (question.kind, input) {
        (QuestionKind::Radio, AnswerInput::Choice { selected, other_text }) => {
            let Some(index) = selected else {
                if question.required {
                    return Err(SurveyError::Required);
                }
                return Ok(Answer::Text(String::new()));
            };
            let option = *question.options.get(index).ok_or(SurveyError::InvalidOption)?;
            if option == OTHER_OPTION {
                let text = other_text.trim();
                if question.required && text.is_empty() {
                    return Err(SurveyError::OtherTextRequired);
                }
                Ok(Answer::Text(text.to_string()))
            } else {
                Ok(Answer::Text(option.to_string()))
            }
        }
        (QuestionKind::Checkbox, AnswerInput::Choices { selected, other_text }) => {
            if question.required && selected.is_empty() {
                return Err(SurveyError::Required);
            }
            let mut values = Vec::with_capacity(selected.len());
            for index in selected {
                let option = *question.options.get(index).ok_or(SurveyError::InvalidOption)?;
                if option == OTHER_OPTION {
                    let text = other_text.trim();
                    if question.required && text.is_empty() {
                        return Err(SurveyError::OtherTextRequired);
                    }
                    values.push(text.to_string());
                } else {
                    values.push(option.to_string());
                }
            }
            Ok(Answer::Multi(values))
        }
        (QuestionKind::Text | QuestionKind::Textarea, AnswerInput::FreeText(raw)) => {
            let text = raw.trim();
            if question.required && text.is_empty() {
                return Err(SurveyError::Required);
            }
            Ok(Answer::Text(text.to_string()))
        }
        _ => Err(SurveyError::KindMismatch),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "survey_tests.rs"]
mod tests;
