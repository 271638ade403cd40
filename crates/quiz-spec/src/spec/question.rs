use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input kinds a question can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Choice,
    Text,
}

/// A single step of the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionSpec {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl QuestionSpec {
    /// Whether `value` counts as an answer to this question. Choice
    /// questions only accept one of their listed options; text questions
    /// accept anything non-blank.
    pub fn accepts(&self, value: &str) -> bool {
        if value.trim().is_empty() {
            return false;
        }
        match self.kind {
            QuestionKind::Text => true,
            QuestionKind::Choice => self
                .options
                .as_ref()
                .is_some_and(|options| options.iter().any(|option| option == value)),
        }
    }
}
