use serde_json::{Map, Value, json};

use crate::spec::{question::QuestionKind, quiz::QuizSpec};

/// JSON Schema (draft-07) describing a complete answer record for `spec`.
/// Choice questions become string enums; every question id is required.
pub fn generate(spec: &QuizSpec) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for question in &spec.questions {
        let mut property = Map::new();
        property.insert("type".into(), Value::String("string".into()));
        property.insert("title".into(), Value::String(question.label.clone()));
        if matches!(question.kind, QuestionKind::Choice)
            && let Some(options) = &question.options
        {
            property.insert(
                "enum".into(),
                Value::Array(
                    options
                        .iter()
                        .map(|option| Value::String(option.clone()))
                        .collect(),
                ),
            );
        }
        properties.insert(question.id.clone(), Value::Object(property));
        required.push(Value::String(question.id.clone()));
    }

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}
