use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{AnswerRecord, SessionScope, SessionSummary};

use super::plan::{SessionPlan, SessionQuestion};
use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Where a session stands in its answer/advance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an answer to the question at this index.
    AwaitingAnswer(usize),
    /// The question at this index has a recorded answer; feedback is
    /// showing and the session waits for an advance.
    AnswerSubmitted(usize),
    /// The user advanced past the last question.
    Complete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run over a scoped, shuffled question list.
///
/// The question list is frozen at construction. Stepping through it is a
/// strict two-beat cycle per question: submit exactly one answer, then
/// advance. The current index only ever moves forward.
pub struct QuizSession {
    scope: SessionScope,
    questions: Vec<SessionQuestion>,
    current: usize,
    pending: Option<usize>,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session from a plan.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic. A plan with no questions produces a session that is
    /// complete from the start, so an empty scope renders as "nothing to
    /// study" rather than an error.
    #[must_use]
    pub fn new(plan: SessionPlan, started_at: DateTime<Utc>) -> Self {
        let completed_at = plan.questions.is_empty().then_some(started_at);
        Self {
            scope: plan.scope,
            questions: plan.questions,
            current: 0,
            pending: None,
            answers: Vec::new(),
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn scope(&self) -> SessionScope {
        self.scope
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions with a recorded answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of recorded answers that were correct.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.was_correct).count()
    }

    /// Number of questions not answered yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.answers.len())
    }

    /// Running score as `(correct, answered)`.
    #[must_use]
    pub fn score(&self) -> (usize, usize) {
        (self.correct_count(), self.answered_count())
    }

    /// Zero-based index of the question currently presented. Stays on the
    /// last question once the session completes.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The choice submitted for the current question, if any.
    #[must_use]
    pub fn pending_answer(&self) -> Option<usize> {
        self.pending
    }

    #[must_use]
    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// The question being presented, or `None` once the session is
    /// complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&SessionQuestion> {
        if self.is_complete() {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Complete
        } else if self.pending.is_some() {
            SessionState::AnswerSubmitted(self.current)
        } else {
            SessionState::AwaitingAnswer(self.current)
        }
    }

    /// Aggregate counters for this run. Snapshots copy their totals from
    /// here.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            correct: self.correct_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Record an answer for the current question.
    ///
    /// The first submission per question wins; the score updates here and
    /// never changes for this question again.
    ///
    /// `answered_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is finished,
    /// `SessionError::AlreadyAnswered` if the current question already has
    /// an answer, and `SessionError::InvalidChoice` for an out-of-range
    /// choice index.
    pub fn submit_answer(
        &mut self,
        choice: usize,
        answered_at: DateTime<Utc>,
    ) -> Result<&AnswerRecord, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.pending.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };
        if choice >= question.choices().len() {
            return Err(SessionError::InvalidChoice { index: choice });
        }

        let was_correct = question.is_correct(choice);
        self.pending = Some(choice);
        self.answers
            .push(AnswerRecord::new(self.current, choice, was_correct, answered_at));

        self.answers.last().ok_or(SessionError::Completed)
    }

    /// Move past the current question once it has an answer.
    ///
    /// On the last question this completes the session instead of
    /// incrementing the index.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is finished and
    /// `SessionError::NotAnswered` if the current question has no answer
    /// yet.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.pending.is_none() {
            return Err(SessionError::NotAnswered);
        }

        if self.current + 1 >= self.questions.len() {
            self.completed_at = Some(at);
        } else {
            self.current += 1;
            self.pending = None;
        }
        Ok(())
    }

    /// Build the end-of-run summary.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` while the session is still in
    /// progress. Summary invariant violations propagate as
    /// `SessionError::Summary`, though a session cannot produce them
    /// through its own transitions.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::Completed)?;
        Ok(SessionSummary::from_records(
            self.scope,
            self.started_at,
            completed_at,
            self.questions.len(),
            &self.answers,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("scope", &self.scope)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("pending", &self.pending)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
