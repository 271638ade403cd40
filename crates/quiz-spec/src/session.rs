use thiserror::Error;

use crate::answers::AnswerRecord;
use crate::report::{CompletionReport, complete};
use crate::spec::question::{QuestionKind, QuestionSpec};
use crate::spec::quiz::QuizSpec;

/// Why an answer was not recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("answer is empty")]
    Empty,
    #[error("'{value}' is not an option for question '{question_id}'")]
    UnknownOption { question_id: String, value: String },
    #[error("session is already complete")]
    SessionComplete,
}

/// What a call to [`QuizSession::advance`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved to the next question.
    Moved,
    /// The current question has no accepted answer; nothing changed.
    Refused,
    /// The last question was answered; the session is complete and the
    /// record has been classified.
    Completed(CompletionReport),
}

/// Linear walk over a quiz: one question at a time, forward only on an
/// accepted answer, back on request, one-way completion.
///
/// The cursor stays within `[0, question_count - 1]`; completion is a
/// separate flag so a finished session cannot be stepped again.
#[derive(Debug)]
pub struct QuizSession<'a> {
    spec: &'a QuizSpec,
    index: usize,
    answers: AnswerRecord,
    completed: bool,
}

impl<'a> QuizSession<'a> {
    pub fn new(spec: &'a QuizSpec) -> Self {
        Self {
            spec,
            index: 0,
            answers: AnswerRecord::new(),
            completed: false,
        }
    }

    /// Seed a session with answers collected earlier and fast-forward the
    /// cursor past the answered prefix. Completion still requires an
    /// explicit [`advance`](Self::advance), so classification happens
    /// exactly once even for a fully answered record.
    pub fn with_answers(spec: &'a QuizSpec, answers: AnswerRecord) -> Self {
        let index = spec
            .questions
            .iter()
            .position(|question| {
                !answers
                    .get(&question.id)
                    .is_some_and(|value| question.accepts(value))
            })
            .unwrap_or(spec.questions.len().saturating_sub(1));
        Self {
            spec,
            index,
            answers,
            completed: false,
        }
    }

    /// The question under the cursor. `None` only after completion.
    pub fn current_question(&self) -> Option<&'a QuestionSpec> {
        if self.completed {
            return None;
        }
        self.spec.questions.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.spec.questions.len()
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Record `value` for the current question. A rejected value leaves
    /// the session untouched so the caller can re-prompt.
    pub fn select_answer(&mut self, value: &str) -> Result<(), AnswerError> {
        let Some(question) = self.current_question() else {
            return Err(AnswerError::SessionComplete);
        };
        let value = value.trim();
        if value.is_empty() {
            return Err(AnswerError::Empty);
        }
        if matches!(question.kind, QuestionKind::Choice) && !question.accepts(value) {
            return Err(AnswerError::UnknownOption {
                question_id: question.id.clone(),
                value: value.to_string(),
            });
        }
        self.answers.set(question.id.as_str(), value);
        Ok(())
    }

    /// Move forward if the current question holds an accepted answer.
    /// At the last question this completes the session and classifies the
    /// full record.
    pub fn advance(&mut self) -> Advance {
        let Some(question) = self.current_question() else {
            return Advance::Refused;
        };
        let answered = self
            .answers
            .get(&question.id)
            .is_some_and(|value| question.accepts(value));
        if !answered {
            return Advance::Refused;
        }
        if self.index + 1 == self.spec.questions.len() {
            self.completed = true;
            return Advance::Completed(complete(self.answers.clone()));
        }
        self.index += 1;
        Advance::Moved
    }

    /// Step back one question. No-op at the first question and after
    /// completion. Recorded answers are kept.
    pub fn retreat(&mut self) {
        if !self.completed && self.index > 0 {
            self.index -= 1;
        }
    }
}
