use std::collections::BTreeSet;

use crate::answers::{AnswerRecord, ValidationError, ValidationResult};
use crate::spec::question::{QuestionKind, QuestionSpec};
use crate::spec::quiz::QuizSpec;

/// Check a (possibly partial) answer record against the quiz definition.
/// Every question is required; the classifier stays total regardless, so
/// this is advisory for callers that want to surface problems early.
pub fn validate(spec: &QuizSpec, answers: &AnswerRecord) -> ValidationResult {
    let mut errors = Vec::new();
    let mut missing_required = Vec::new();

    for question in &spec.questions {
        match answers.get(&question.id) {
            None => missing_required.push(question.id.clone()),
            Some(value) => {
                if let Some(error) = validate_value(question, value) {
                    errors.push(error);
                }
            }
        }
    }

    let all_ids: BTreeSet<&str> = spec
        .questions
        .iter()
        .map(|question| question.id.as_str())
        .collect();
    let unknown_fields: Vec<String> = answers
        .keys()
        .filter(|key| !all_ids.contains(key))
        .map(str::to_string)
        .collect();

    ValidationResult::from_parts(errors, missing_required, unknown_fields)
}

fn validate_value(question: &QuestionSpec, value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(base_error(question, "answer is empty", "empty_answer"));
    }

    if matches!(question.kind, QuestionKind::Choice)
        && let Some(options) = &question.options
        && !options.iter().any(|option| option == value)
    {
        return Some(base_error(
            question,
            "value is not one of the options",
            "option_mismatch",
        ));
    }

    None
}

fn base_error(question: &QuestionSpec, message: &str, code: &str) -> ValidationError {
    ValidationError {
        question_id: Some(question.id.clone()),
        path: Some(format!("/{}", question.id)),
        message: message.into(),
        code: Some(code.into()),
    }
}
