pub mod question;
pub mod quiz;

pub use question::{QuestionKind, QuestionSpec};
pub use quiz::{QuizPresentation, QuizSpec, SpecError, default_quiz};
