use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Answers captured for one session, keyed by question id.
///
/// Keys stay sorted, so serializing the same record twice yields
/// byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AnswerRecord(BTreeMap<String, String>);

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    /// Records `value` for a question, overwriting any earlier answer.
    pub fn set(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for AnswerRecord {
    fn from(entries: [(K, V); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Outcome of a shape validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<ValidationError>,
    #[serde(default)]
    pub missing_required: Vec<String>,
    #[serde(default)]
    pub unknown_fields: Vec<String>,
}

impl ValidationResult {
    pub fn from_parts(
        errors: Vec<ValidationError>,
        missing_required: Vec<String>,
        unknown_fields: Vec<String>,
    ) -> Self {
        Self {
            valid: errors.is_empty() && missing_required.is_empty() && unknown_fields.is_empty(),
            errors,
            missing_required,
            unknown_fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_is_key_ordered() {
        let mut record = AnswerRecord::new();
        record.set("phone", "+56 9 1234 5678");
        record.set("goal", "Bienestar hormonal y salud integral");
        record.set("area", "Bienestar general");

        let json = serde_json::to_string(&record).expect("serialize");
        let again = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, again);
        assert!(json.find("\"area\"").unwrap() < json.find("\"goal\"").unwrap());
        assert!(json.find("\"goal\"").unwrap() < json.find("\"phone\"").unwrap());
    }

    #[test]
    fn set_overwrites_previous_answer() {
        let mut record = AnswerRecord::new();
        record.set("concern", "Ojeras");
        record.set("concern", "Flacidez");
        assert_eq!(record.get("concern"), Some("Flacidez"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn from_parts_computes_validity() {
        let clean = ValidationResult::from_parts(vec![], vec![], vec![]);
        assert!(clean.valid);

        let missing = ValidationResult::from_parts(vec![], vec!["email".into()], vec![]);
        assert!(!missing.valid);
    }
}
