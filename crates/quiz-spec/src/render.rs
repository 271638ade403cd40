use serde_json::{Map, Value, json};

use crate::{
    answers::AnswerRecord,
    answers_schema,
    progress::{answered_count, next_question},
    spec::{question::QuestionKind, quiz::QuizSpec},
};

/// Status labels returned by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// More input is required.
    NeedInput,
    /// Every question is answered.
    Complete,
}

impl RenderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStatus::NeedInput => "need_input",
            RenderStatus::Complete => "complete",
        }
    }
}

/// Progress counters exposed to renderers.
#[derive(Debug, Clone)]
pub struct RenderProgress {
    pub answered: usize,
    pub total: usize,
}

/// Describes a single question for render outputs.
#[derive(Debug, Clone)]
pub struct RenderQuestion {
    pub id: String,
    pub label: String,
    pub kind: QuestionKind,
    pub options: Option<Vec<String>>,
    pub current_value: Option<String>,
}

/// Collected payload used by both text and JSON renderers.
#[derive(Debug, Clone)]
pub struct RenderPayload {
    pub quiz_id: String,
    pub quiz_title: String,
    pub quiz_version: String,
    pub status: RenderStatus,
    pub next_question_id: Option<String>,
    pub progress: RenderProgress,
    pub intro: Option<String>,
    pub questions: Vec<RenderQuestion>,
    pub schema: Value,
}

/// Build the renderer payload from the definition and current answers.
pub fn build_render_payload(spec: &QuizSpec, answers: &AnswerRecord) -> RenderPayload {
    let next_question_id = next_question(spec, answers).map(|question| question.id.clone());
    let answered = answered_count(spec, answers);
    let total = spec.questions.len();

    let questions = spec
        .questions
        .iter()
        .map(|question| RenderQuestion {
            id: question.id.clone(),
            label: question.label.clone(),
            kind: question.kind,
            options: question.options.clone(),
            current_value: answers.get(&question.id).map(str::to_string),
        })
        .collect::<Vec<_>>();

    let intro = spec
        .presentation
        .as_ref()
        .and_then(|presentation| presentation.intro.clone())
        .or_else(|| spec.description.clone());

    let schema = answers_schema::generate(spec);

    let status = if next_question_id.is_some() {
        RenderStatus::NeedInput
    } else {
        RenderStatus::Complete
    };

    RenderPayload {
        quiz_id: spec.id.clone(),
        quiz_title: spec.title.clone(),
        quiz_version: spec.version.clone(),
        status,
        next_question_id,
        progress: RenderProgress { answered, total },
        intro,
        questions,
        schema,
    }
}

/// Render the payload as a structured JSON-friendly value.
pub fn render_json_ui(payload: &RenderPayload) -> Value {
    let questions = payload
        .questions
        .iter()
        .map(|question| {
            let mut map = Map::new();
            map.insert("id".into(), Value::String(question.id.clone()));
            map.insert("label".into(), Value::String(question.label.clone()));
            map.insert(
                "type".into(),
                Value::String(question_kind_label(question.kind).to_string()),
            );
            if let Some(options) = &question.options {
                map.insert(
                    "options".into(),
                    Value::Array(
                        options
                            .iter()
                            .map(|option| Value::String(option.clone()))
                            .collect(),
                    ),
                );
            }
            if let Some(current_value) = &question.current_value {
                map.insert(
                    "current_value".into(),
                    Value::String(current_value.clone()),
                );
            }
            Value::Object(map)
        })
        .collect::<Vec<_>>();

    json!({
        "quiz_id": payload.quiz_id,
        "quiz_title": payload.quiz_title,
        "quiz_version": payload.quiz_version,
        "status": payload.status.as_str(),
        "next_question_id": payload.next_question_id,
        "progress": {
            "answered": payload.progress.answered,
            "total": payload.progress.total,
        },
        "intro": payload.intro,
        "questions": questions,
        "schema": payload.schema,
    })
}

/// Render the payload as human-friendly text.
pub fn render_text(payload: &RenderPayload) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Quiz: {} ({})", payload.quiz_title, payload.quiz_id));
    lines.push(format!(
        "Status: {} ({}/{})",
        payload.status.as_str(),
        payload.progress.answered,
        payload.progress.total
    ));
    if let Some(intro) = &payload.intro {
        lines.push(format!("Intro: {}", intro));
    }

    if let Some(next_question) = &payload.next_question_id {
        lines.push(format!("Next question: {}", next_question));
        if let Some(question) = payload
            .questions
            .iter()
            .find(|question| &question.id == next_question)
        {
            lines.push(format!("  Label: {}", question.label));
            if let Some(options) = &question.options {
                for (position, option) in options.iter().enumerate() {
                    lines.push(format!("  {}. {}", position + 1, option));
                }
            }
            if let Some(value) = &question.current_value {
                lines.push(format!("  Current value: {}", value));
            }
        }
    } else {
        lines.push("All questions are answered.".to_string());
    }

    lines.push("Questions:".to_string());
    for question in &payload.questions {
        let mut entry = format!(" - {} ({})", question.id, question.label);
        if let Some(current_value) = &question.current_value {
            entry.push_str(&format!(" = {}", current_value));
        }
        lines.push(entry);
    }

    lines.join("\n")
}

fn question_kind_label(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Choice => "choice",
        QuestionKind::Text => "text",
    }
}
