use crate::state::survey::{
    Answer, AnswerInput, Question, QuestionKind, SurveyError, SurveyState, OTHER_OPTION,
};

fn radio_required() -> Question {
    Question {
        id: "r",
        kind: QuestionKind::Radio,
        prompt: "pick one",
        required: true,
        options: &["yes", "no", OTHER_OPTION],
        placeholder: "",
    }
}

fn checkbox_required() -> Question {
    Question {
        id: "c",
        kind: QuestionKind::Checkbox,
        prompt: "pick some",
        required: true,
        options: &["a", "b", OTHER_OPTION],
        placeholder: "",
    }
}

fn textarea_optional() -> Question {
    Question {
        id: "t",
        kind: QuestionKind::Textarea,
        prompt: "say anything",
        required: false,
        options: &[],
        placeholder: "...",
    }
}

fn choice(selected: Option<usize>) -> AnswerInput {
    AnswerInput::Choice {
        selected,
        other_text: String::new(),
    }
}

#[test]
fn required_radio_without_selection_is_rejected() {
    let mut survey = SurveyState::new(vec![radio_required()]);
    let err = survey.submit(choice(None)).unwrap_err();
    assert_eq!(err, SurveyError::Required);
    assert!(!survey.is_done());
}

#[test]
fn radio_selection_records_option_text() {
    let mut survey = SurveyState::new(vec![radio_required()]);
    survey.submit(choice(Some(1))).unwrap();
    assert_eq!(survey.answers()["r"], Answer::Text("no".to_string()));
    assert!(survey.is_done());
}

#[test]
fn other_without_text_is_rejected_when_required() {
    let mut survey = SurveyState::new(vec![radio_required()]);
    let err = survey.submit(choice(Some(2))).unwrap_err();
    assert_eq!(err, SurveyError::OtherTextRequired);
}

#[test]
fn other_text_replaces_option_value() {
    let mut survey = SurveyState::new(vec![radio_required()]);
    survey
        .submit(AnswerInput::Choice {
            selected: Some(2),
            other_text: "  something else ".to_string(),
        })
        .unwrap();
    assert_eq!(
        survey.answers()["r"],
        Answer::Text("something else".to_string())
    );
}

#[test]
fn out_of_range_option_is_rejected() {
    let mut survey = SurveyState::new(vec![radio_required()]);
    let err = survey.submit(choice(Some(9))).unwrap_err();
    assert_eq!(err, SurveyError::InvalidOption);
}

#[test]
fn required_checkbox_with_nothing_selected_is_rejected() {
    let mut survey = SurveyState::new(vec![checkbox_required()]);
    let err = survey
        .submit(AnswerInput::Choices {
            selected: vec![],
            other_text: String::new(),
        })
        .unwrap_err();
    assert_eq!(err, SurveyError::Required);
}

#[test]
fn checkbox_other_is_substituted_in_place() {
    let mut survey = SurveyState::new(vec![checkbox_required()]);
    survey
        .submit(AnswerInput::Choices {
            selected: vec![0, 2],
            other_text: "custom".to_string(),
        })
        .unwrap();
    assert_eq!(
        survey.answers()["c"],
        Answer::Multi(vec!["a".to_string(), "custom".to_string()])
    );
}

#[test]
fn optional_textarea_accepts_empty() {
    let mut survey = SurveyState::new(vec![textarea_optional()]);
    survey.submit(AnswerInput::FreeText("   ".to_string())).unwrap();
    assert_eq!(survey.answers()["t"], Answer::Text(String::new()));
}

#[test]
fn kind_mismatch_is_rejected() {
    let mut survey = SurveyState::new(vec![textarea_optional()]);
    let err = survey.submit(choice(Some(0))).unwrap_err();
    assert_eq!(err, SurveyError::KindMismatch);
}

#[test]
fn completing_all_questions_reaches_done() {
    let mut survey = SurveyState::new(vec![radio_required(), textarea_optional()]);
    assert_eq!(survey.progress(), (0, 2));

    survey.submit(choice(Some(0))).unwrap();
    assert_eq!(survey.progress(), (1, 2));
    assert!(!survey.is_done());

    survey
        .submit(AnswerInput::FreeText("done".to_string()))
        .unwrap();
    assert!(survey.is_done());
    assert_eq!(survey.progress(), (2, 2));
    assert_eq!(survey.answers().len(), 2);
}

#[test]
fn submit_after_done_is_a_no_op() {
    let mut survey = SurveyState::new(vec![textarea_optional()]);
    survey.submit(AnswerInput::FreeText("x".to_string())).unwrap();
    assert!(survey.is_done());
    assert!(survey.submit(choice(None)).is_ok());
    assert_eq!(survey.answers().len(), 1);
}

#[test]
fn default_questions_match_survey_shape() {
    let survey = SurveyState::with_default_questions();
    let (_, total) = survey.progress();
    assert_eq!(total, 6);
    let first = survey.current_question().unwrap();
    assert_eq!(first.kind, QuestionKind::Radio);
    assert!(first.required);
}

#[test]
fn failed_validation_does_not_advance() {
    let mut survey = SurveyState::new(vec![radio_required(), textarea_optional()]);
    let _ = survey.submit(choice(None));
    assert_eq!(survey.progress(), (0, 2));
    assert!(survey.current_question().is_some());
}
