use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{CHOICE_COUNT, QuestionBank, QuestionRecord, SessionScope};

/// One question as a session will present it: the validated record plus its
/// shuffled four-choice list.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionQuestion {
    record: QuestionRecord,
    choices: Vec<String>,
    correct_index: usize,
}

impl SessionQuestion {
    /// Freeze a record into presentation order. The shuffle happens once,
    /// here, so a question keeps the same choice layout for the whole
    /// session.
    fn from_record(record: QuestionRecord) -> Self {
        let mut order: [usize; CHOICE_COUNT] = [0, 1, 2, 3];
        let mut rng = rng();
        order.shuffle(&mut rng);

        let answers = record.answer_set();
        let choices: Vec<String> = order.iter().map(|&i| answers[i].to_owned()).collect();

        // Slot 0 of the answer set is the correct text; find where the
        // shuffle put it.
        let mut correct_index = 0;
        for (slot, &source) in order.iter().enumerate() {
            if source == 0 {
                correct_index = slot;
            }
        }

        Self {
            record,
            choices,
            correct_index,
        }
    }

    #[must_use]
    pub fn record(&self) -> &QuestionRecord {
        &self.record
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.record.prompt()
    }

    /// The four choices in presentation order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Index of the correct answer within [`SessionQuestion::choices`].
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}

/// Selection result for a session build.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub scope: SessionScope,
    pub questions: Vec<SessionQuestion>,
}

impl SessionPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when the scope matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Builds a quiz run by scoping the bank, shuffling the selection, and
/// shuffling each question's choices.
pub struct SessionBuilder<'a> {
    bank: &'a QuestionBank,
    scope: SessionScope,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(bank: &'a QuestionBank, scope: SessionScope) -> Self {
        Self { bank, scope }
    }

    /// Build a session plan.
    ///
    /// - `All` takes the whole bank, `Category` filters by tag, and
    ///   `Random10` draws up to ten distinct questions.
    /// - Presentation order is freshly shuffled on every build, so replaying
    ///   the same scope yields an independent ordering.
    /// - A scope that matches nothing yields an empty plan, not an error.
    #[must_use]
    pub fn build(self) -> SessionPlan {
        let mut rng = rng();

        let mut selected: Vec<QuestionRecord> = match self.scope {
            SessionScope::All => self.bank.records().to_vec(),
            SessionScope::Random10 => {
                let mut pool = self.bank.records().to_vec();
                pool.shuffle(&mut rng);
                pool.truncate(SessionScope::RANDOM_SAMPLE_SIZE);
                pool
            }
            SessionScope::Category(category) => self
                .bank
                .records()
                .iter()
                .filter(|record| record.category() == category)
                .cloned()
                .collect(),
        };

        selected.shuffle(&mut rng);

        SessionPlan {
            scope: self.scope,
            questions: selected.into_iter().map(SessionQuestion::from_record).collect(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Category, QuestionDraft};
    use std::collections::HashSet;

    fn build_record(category: Category, n: usize) -> QuestionRecord {
        QuestionDraft::new(
            category,
            format!("Question {n}?"),
            format!("right {n}"),
            [format!("a{n}"), format!("b{n}"), format!("c{n}")],
        )
        .validate()
        .unwrap()
    }

    fn build_bank(count: usize) -> QuestionBank {
        QuestionBank::new((0..count).map(|n| build_record(Category::Formula, n)).collect())
    }

    #[test]
    fn choices_are_a_permutation_of_the_answer_set() {
        let bank = build_bank(5);
        let plan = SessionBuilder::new(&bank, SessionScope::All).build();

        for question in &plan.questions {
            let mut expected: Vec<&str> = question.record().answer_set().to_vec();
            expected.sort_unstable();
            let mut actual: Vec<&str> = question.choices().iter().map(String::as_str).collect();
            actual.sort_unstable();
            assert_eq!(actual, expected);
            assert_eq!(question.choices().len(), CHOICE_COUNT);
        }
    }

    #[test]
    fn correct_index_points_at_the_correct_text() {
        let bank = build_bank(8);
        let plan = SessionBuilder::new(&bank, SessionScope::All).build();

        for question in &plan.questions {
            let text = &question.choices()[question.correct_index()];
            assert_eq!(text, question.record().correct_answer());
            assert!(question.is_correct(question.correct_index()));
            assert!(!question.is_correct((question.correct_index() + 1) % CHOICE_COUNT));
        }
    }

    #[test]
    fn all_scope_selects_every_question_exactly_once() {
        let bank = build_bank(12);
        let plan = SessionBuilder::new(&bank, SessionScope::All).build();

        assert_eq!(plan.total(), 12);
        let prompts: HashSet<&str> = plan.questions.iter().map(SessionQuestion::prompt).collect();
        assert_eq!(prompts.len(), 12);
    }

    #[test]
    fn category_scope_filters_by_tag() {
        let mut records: Vec<_> = (0..4).map(|n| build_record(Category::Calculation, n)).collect();
        records.extend((10..13).map(|n| build_record(Category::Distribution, n)));
        let bank = QuestionBank::new(records);

        let plan =
            SessionBuilder::new(&bank, SessionScope::Category(Category::Distribution)).build();

        assert_eq!(plan.total(), 3);
        assert!(plan
            .questions
            .iter()
            .all(|q| q.record().category() == Category::Distribution));
    }

    #[test]
    fn random_scope_draws_ten_distinct_questions() {
        let bank = build_bank(82);
        let plan = SessionBuilder::new(&bank, SessionScope::Random10).build();

        assert_eq!(plan.total(), 10);
        let prompts: HashSet<&str> = plan.questions.iter().map(SessionQuestion::prompt).collect();
        assert_eq!(prompts.len(), 10, "sampled questions must be distinct");
    }

    #[test]
    fn random_scope_on_a_small_bank_takes_everything() {
        let bank = build_bank(4);
        let plan = SessionBuilder::new(&bank, SessionScope::Random10).build();
        assert_eq!(plan.total(), 4);
    }

    #[test]
    fn empty_selection_builds_an_empty_plan() {
        let bank = build_bank(6);
        let plan = SessionBuilder::new(&bank, SessionScope::Category(Category::Concept)).build();
        assert!(plan.is_empty());
        assert_eq!(plan.total(), 0);
    }

    #[test]
    fn rebuilds_produce_independent_orderings() {
        let bank = build_bank(6);

        let mut seen: HashSet<Vec<String>> = HashSet::new();
        for _ in 0..40 {
            let plan = SessionBuilder::new(&bank, SessionScope::All).build();
            let order: Vec<String> = plan
                .questions
                .iter()
                .map(|q| q.prompt().to_owned())
                .collect();
            seen.insert(order);
        }

        // 40 independent shuffles of six questions virtually never agree.
        assert!(seen.len() > 1);
    }
}
