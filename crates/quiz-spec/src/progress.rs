use crate::answers::AnswerRecord;
use crate::spec::question::QuestionSpec;
use crate::spec::quiz::QuizSpec;

fn is_answered(question: &QuestionSpec, answers: &AnswerRecord) -> bool {
    answers
        .get(&question.id)
        .is_some_and(|value| question.accepts(value))
}

/// First question, in definition order, without an accepted answer.
pub fn next_question<'a>(spec: &'a QuizSpec, answers: &AnswerRecord) -> Option<&'a QuestionSpec> {
    spec.questions
        .iter()
        .find(|question| !is_answered(question, answers))
}

/// How many questions have an accepted answer.
pub fn answered_count(spec: &QuizSpec, answers: &AnswerRecord) -> usize {
    spec.questions
        .iter()
        .filter(|question| is_answered(question, answers))
        .count()
}
