use quiz_core::model::SessionScope;

use super::service::QuizSession;

/// Submitted-answer details for a question, for correct/incorrect
/// highlighting after the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsweredView {
    pub chosen: usize,
    pub correct_index: usize,
    pub was_correct: bool,
}

/// The current question as presented: prompt, shuffled choices, and the
/// submitted answer once there is one.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub prompt: String,
    pub choices: Vec<String>,
    pub answered: Option<AnsweredView>,
}

/// Presentation-agnostic snapshot of the active session.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no layout or styling assumptions
///
/// The front-end decides choice letters, colors and copy. `position` is
/// zero-based; `current` is `None` once the run is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub scope: SessionScope,
    pub position: usize,
    pub total: usize,
    pub correct: usize,
    pub answered: usize,
    pub is_complete: bool,
    pub current: Option<QuestionView>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let current = session.current_question().map(|question| QuestionView {
            prompt: question.prompt().to_owned(),
            choices: question.choices().to_vec(),
            answered: session.pending_answer().map(|chosen| AnsweredView {
                chosen,
                correct_index: question.correct_index(),
                was_correct: question.is_correct(chosen),
            }),
        });

        let progress = session.progress();
        Self {
            scope: session.scope(),
            position: session.current_index(),
            total: progress.total,
            correct: progress.correct,
            answered: progress.answered,
            is_complete: progress.is_complete,
            current,
        }
    }
}

/// Picker line: one selectable scope and the number of questions a session
/// over it would contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeListItem {
    pub scope: SessionScope,
    pub question_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::plan::SessionBuilder;
    use quiz_core::model::{Category, QuestionBank, QuestionDraft};
    use quiz_core::time::fixed_now;

    fn build_session(count: usize) -> QuizSession {
        let bank = QuestionBank::new(
            (0..count)
                .map(|n| {
                    QuestionDraft::new(
                        Category::Formula,
                        format!("Question {n}?"),
                        format!("right {n}"),
                        [format!("a{n}"), format!("b{n}"), format!("c{n}")],
                    )
                    .validate()
                    .unwrap()
                })
                .collect(),
        );
        let plan = SessionBuilder::new(&bank, SessionScope::All).build();
        QuizSession::new(plan, fixed_now())
    }

    #[test]
    fn snapshot_is_presentation_agnostic() {
        let mut session = build_session(2);
        let snapshot = SessionSnapshot::from_session(&session);

        assert_eq!(snapshot.position, 0);
        assert_eq!(snapshot.total, 2);
        assert!(!snapshot.is_complete);
        let question = snapshot.current.as_ref().unwrap();
        assert_eq!(question.choices.len(), 4);
        assert!(question.answered.is_none());

        let correct = session.current_question().unwrap().correct_index();
        session.submit_answer(correct, fixed_now()).unwrap();
        let snapshot = SessionSnapshot::from_session(&session);
        let answered = snapshot.current.unwrap().answered.unwrap();
        assert_eq!(answered.chosen, correct);
        assert_eq!(answered.correct_index, correct);
        assert!(answered.was_correct);
        assert_eq!(snapshot.correct, 1);
        assert_eq!(snapshot.answered, 1);
    }

    #[test]
    fn completed_snapshot_has_no_current_question() {
        let mut session = build_session(1);
        let correct = session.current_question().unwrap().correct_index();
        session.submit_answer(correct, fixed_now()).unwrap();
        session.advance(fixed_now()).unwrap();

        let snapshot = SessionSnapshot::from_session(&session);
        assert!(snapshot.is_complete);
        assert!(snapshot.current.is_none());
        assert_eq!(snapshot.correct, 1);
    }
}
