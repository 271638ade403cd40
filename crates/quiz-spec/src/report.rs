use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers::AnswerRecord;
use crate::path::RecommendationPath;
use crate::score::{LeadProfile, classify};

/// Everything produced for one completed session: the record itself, the
/// classification, and the recommendation track. This is the single
/// object handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompletionReport {
    pub answers: AnswerRecord,
    pub path: RecommendationPath,
    pub summary: Vec<String>,
    #[serde(flatten)]
    pub profile: LeadProfile,
}

impl CompletionReport {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Classify the record and resolve its recommendation in one step.
pub fn complete(answers: AnswerRecord) -> CompletionReport {
    let profile = classify(&answers);
    let path = RecommendationPath::for_answers(&answers);
    let summary = path.summary().iter().map(|line| line.to_string()).collect();
    CompletionReport {
        answers,
        path,
        summary,
        profile,
    }
}
