use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::spec::question::{QuestionKind, QuestionSpec};

const DEFAULT_QUIZ: &str = include_str!("../../forms/blum-intake.form.json");

/// Presentation hints for the quiz shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuizPresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Top-level quiz definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuizSpec {
    pub id: String,
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation: Option<QuizPresentation>,
    pub questions: Vec<QuestionSpec>,
}

/// Errors raised while loading a quiz definition.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to parse quiz definition: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("quiz definition has no questions")]
    Empty,
    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(String),
    #[error("choice question '{0}' has no options")]
    MissingOptions(String),
}

impl QuizSpec {
    /// Parse a definition from JSON and check its structural invariants:
    /// at least one question, unique ids, options on every choice.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let spec: QuizSpec = serde_json::from_str(json).map_err(SpecError::Parse)?;
        if spec.questions.is_empty() {
            return Err(SpecError::Empty);
        }
        let mut seen = BTreeSet::new();
        for question in &spec.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(SpecError::DuplicateQuestion(question.id.clone()));
            }
            if matches!(question.kind, QuestionKind::Choice)
                && question
                    .options
                    .as_ref()
                    .is_none_or(|options| options.is_empty())
            {
                return Err(SpecError::MissingOptions(question.id.clone()));
            }
        }
        Ok(spec)
    }

    pub fn question(&self, id: &str) -> Option<&QuestionSpec> {
        self.questions.iter().find(|question| question.id == id)
    }
}

/// The intake quiz bundled with this crate.
pub fn default_quiz() -> Result<QuizSpec, SpecError> {
    QuizSpec::from_json(DEFAULT_QUIZ)
}
