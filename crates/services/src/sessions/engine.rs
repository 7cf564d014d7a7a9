use std::fmt;
use std::iter;
use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{Category, QuestionBank, SessionScope, SessionSummary};

use super::plan::SessionBuilder;
use super::service::QuizSession;
use super::view::{ScopeListItem, SessionSnapshot};

/// Mediates every user-driven transition for at most one active session.
///
/// A rejected transition (double answer, advancing an unanswered question,
/// any command after completion) means the front-end fired a control that
/// should have been inert. The engine swallows those and hands back the
/// unchanged snapshot instead of surfacing an error.
pub struct QuizEngine {
    bank: Arc<QuestionBank>,
    clock: Clock,
    session: Option<QuizSession>,
}

impl QuizEngine {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            clock: Clock::default_clock(),
            session: None,
        }
    }

    /// Replace the time source, mainly for deterministic tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Snapshot of the active session, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(SessionSnapshot::from_session)
    }

    /// Picker lines in display order: everything, each category, then the
    /// random sample.
    #[must_use]
    pub fn scope_overview(&self) -> Vec<ScopeListItem> {
        iter::once(SessionScope::All)
            .chain(Category::ALL.into_iter().map(SessionScope::Category))
            .chain(iter::once(SessionScope::Random10))
            .map(|scope| ScopeListItem {
                scope,
                question_count: self.bank.count_for(scope),
            })
            .collect()
    }

    /// Start a fresh session over the given scope, replacing any session in
    /// progress. Selection and ordering are re-randomized on every start.
    pub fn start_session(&mut self, scope: SessionScope) -> SessionSnapshot {
        let plan = SessionBuilder::new(&self.bank, scope).build();
        let session = QuizSession::new(plan, self.clock.now());
        let snapshot = SessionSnapshot::from_session(&session);
        self.session = Some(session);
        snapshot
    }

    /// Submit an answer for the current question.
    ///
    /// Returns `None` when no session exists. Ordering slips leave the
    /// session untouched.
    pub fn submit_answer(&mut self, choice: usize) -> Option<SessionSnapshot> {
        let now = self.clock.now();
        if let Some(session) = self.session.as_mut() {
            let _ = session.submit_answer(choice, now);
        }
        self.snapshot()
    }

    /// Advance past the current question once it has an answer.
    ///
    /// Returns `None` when no session exists. Ordering slips leave the
    /// session untouched.
    pub fn advance(&mut self) -> Option<SessionSnapshot> {
        let now = self.clock.now();
        if let Some(session) = self.session.as_mut() {
            let _ = session.advance(now);
        }
        self.snapshot()
    }

    /// Start another run over the same scope. Returns `None` when no
    /// session exists to take the scope from.
    pub fn restart_session(&mut self) -> Option<SessionSnapshot> {
        let scope = self.session.as_ref().map(QuizSession::scope)?;
        Some(self.start_session(scope))
    }

    /// Discard the session; the front-end shows the scope picker again.
    pub fn return_to_picker(&mut self) {
        self.session = None;
    }

    /// Summary of the active session once it is complete.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.session
            .as_ref()
            .and_then(|session| session.summary().ok())
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("bank_len", &self.bank.len())
            .field("clock", &self.clock)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionDraft;
    use quiz_core::time::fixed_clock;
    use std::collections::HashSet;

    fn small_bank(count: usize) -> Arc<QuestionBank> {
        Arc::new(QuestionBank::new(
            (0..count)
                .map(|n| {
                    QuestionDraft::new(
                        Category::Calculation,
                        format!("Question {n}?"),
                        format!("right {n}"),
                        [format!("a{n}"), format!("b{n}"), format!("c{n}")],
                    )
                    .validate()
                    .unwrap()
                })
                .collect(),
        ))
    }

    fn builtin_engine() -> QuizEngine {
        QuizEngine::new(Arc::new(QuestionBank::builtin())).with_clock(fixed_clock())
    }

    fn current_correct_index(engine: &QuizEngine) -> usize {
        engine
            .session
            .as_ref()
            .and_then(QuizSession::current_question)
            .map(|q| q.correct_index())
            .unwrap()
    }

    #[test]
    fn formula_session_scores_one_hit_one_miss() {
        let mut engine = builtin_engine();
        let snapshot = engine.start_session(SessionScope::Category(Category::Formula));
        assert_eq!(snapshot.total, 22);
        assert_eq!(snapshot.position, 0);

        let correct = current_correct_index(&engine);
        let snapshot = engine.submit_answer(correct).unwrap();
        assert_eq!((snapshot.correct, snapshot.answered), (1, 1));

        let snapshot = engine.advance().unwrap();
        assert_eq!(snapshot.position, 1);

        let wrong = (current_correct_index(&engine) + 1) % 4;
        engine.submit_answer(wrong);
        let snapshot = engine.advance().unwrap();
        assert_eq!((snapshot.correct, snapshot.answered), (1, 2));
        assert_eq!(snapshot.position, 2);
    }

    #[test]
    fn random_challenge_draws_ten_from_the_builtin_bank() {
        let mut engine = builtin_engine();
        let snapshot = engine.start_session(SessionScope::Random10);
        assert_eq!(snapshot.total, 10);

        let prompts: HashSet<String> = engine
            .session
            .as_ref()
            .unwrap()
            .questions()
            .iter()
            .map(|q| q.prompt().to_owned())
            .collect();
        assert_eq!(prompts.len(), 10);
    }

    #[test]
    fn scope_overview_lists_every_scope_with_counts() {
        let engine = builtin_engine();
        assert_eq!(engine.bank().len(), 80);
        let overview = engine.scope_overview();

        let expected = [
            (SessionScope::All, 80),
            (SessionScope::Category(Category::Formula), 22),
            (SessionScope::Category(Category::Calculation), 17),
            (SessionScope::Category(Category::Concept), 16),
            (SessionScope::Category(Category::Distribution), 13),
            (SessionScope::Category(Category::HypothesisTest), 12),
            (SessionScope::Random10, 10),
        ];
        assert_eq!(overview.len(), expected.len());
        for (item, (scope, count)) in overview.iter().zip(expected) {
            assert_eq!(item.scope, scope);
            assert_eq!(item.question_count, count);
        }
    }

    #[test]
    fn transitions_without_a_session_return_none() {
        let mut engine = builtin_engine();
        assert!(engine.snapshot().is_none());
        assert!(engine.submit_answer(0).is_none());
        assert!(engine.advance().is_none());
        assert!(engine.restart_session().is_none());
        assert!(engine.summary().is_none());
    }

    #[test]
    fn ordering_slips_leave_the_snapshot_unchanged() {
        let mut engine = builtin_engine();
        engine.start_session(SessionScope::Random10);

        // Advancing before answering is ignored.
        let before = engine.snapshot().unwrap();
        let after = engine.advance().unwrap();
        assert_eq!(before, after);

        // A second answer is ignored.
        let correct = current_correct_index(&engine);
        engine.submit_answer(correct).unwrap();
        let before = engine.snapshot().unwrap();
        let after = engine.submit_answer((correct + 1) % 4).unwrap();
        assert_eq!(before, after);

        // An out-of-range choice is ignored.
        engine.advance();
        let before = engine.snapshot().unwrap();
        let after = engine.submit_answer(99).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn restart_keeps_the_scope_and_resets_the_run() {
        let mut engine = QuizEngine::new(small_bank(6)).with_clock(fixed_clock());
        engine.start_session(SessionScope::All);
        let correct = current_correct_index(&engine);
        engine.submit_answer(correct);
        engine.advance();

        let snapshot = engine.restart_session().unwrap();
        assert_eq!(snapshot.scope, SessionScope::All);
        assert_eq!(snapshot.position, 0);
        assert_eq!((snapshot.correct, snapshot.answered), (0, 0));
        assert!(!snapshot.is_complete);
    }

    #[test]
    fn restarts_reshuffle_independently() {
        let mut engine = QuizEngine::new(small_bank(6)).with_clock(fixed_clock());
        engine.start_session(SessionScope::All);

        let mut orders: HashSet<Vec<String>> = HashSet::new();
        for _ in 0..40 {
            engine.restart_session().unwrap();
            let order: Vec<String> = engine
                .session
                .as_ref()
                .unwrap()
                .questions()
                .iter()
                .map(|q| q.prompt().to_owned())
                .collect();
            orders.insert(order);
        }

        // Forty shuffles of six questions all but surely differ somewhere.
        assert!(orders.len() > 1);
    }

    #[test]
    fn return_to_picker_discards_the_session() {
        let mut engine = builtin_engine();
        engine.start_session(SessionScope::All);
        assert!(engine.has_session());

        engine.return_to_picker();
        assert!(!engine.has_session());
        assert!(engine.snapshot().is_none());
    }

    #[test]
    fn empty_scope_starts_an_already_complete_session() {
        let mut engine = QuizEngine::new(small_bank(3)).with_clock(fixed_clock());
        let snapshot = engine.start_session(SessionScope::Category(Category::Distribution));

        assert!(snapshot.is_complete);
        assert_eq!(snapshot.total, 0);
        assert!(snapshot.current.is_none());

        let summary = engine.summary().unwrap();
        assert_eq!(summary.total_questions(), 0);
        assert_eq!(summary.percent(), 0);
    }

    #[test]
    fn summary_appears_only_after_completion() {
        let mut engine = QuizEngine::new(small_bank(2)).with_clock(fixed_clock());
        engine.start_session(SessionScope::All);
        assert!(engine.summary().is_none());

        for _ in 0..2 {
            let correct = current_correct_index(&engine);
            engine.submit_answer(correct);
            engine.advance();
        }

        let snapshot = engine.snapshot().unwrap();
        assert!(snapshot.is_complete);
        let summary = engine.summary().unwrap();
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.percent(), 100);
    }
}
