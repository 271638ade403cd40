#![allow(missing_docs)]

pub mod answers;
pub mod answers_schema;
pub mod lead;
pub mod path;
pub mod progress;
pub mod render;
pub mod report;
pub mod score;
pub mod session;
pub mod spec;
pub mod validate;

pub use answers::{AnswerRecord, ValidationError, ValidationResult};
pub use answers_schema::generate as answers_schema;
pub use lead::LeadContact;
pub use path::RecommendationPath;
pub use progress::{answered_count, next_question};
pub use render::{
    RenderPayload, RenderProgress, RenderQuestion, RenderStatus, build_render_payload,
    render_json_ui, render_text,
};
pub use report::{CompletionReport, complete};
pub use score::{IntentFlags, LeadProfile, LeadTier, classify};
pub use session::{Advance, AnswerError, QuizSession};
pub use spec::{QuestionKind, QuestionSpec, QuizSpec, SpecError, default_quiz};
pub use validate::validate;
