use crate::model::builtin;
use crate::model::{Category, QuestionRecord, SessionScope};

/// Immutable pool of validated questions a session draws from.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    /// The bank that ships with the crate: 80 statistics questions across
    /// the five categories.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin::records())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Number of questions tagged with the given category.
    #[must_use]
    pub fn count_in(&self, category: Category) -> usize {
        self.records
            .iter()
            .filter(|record| record.category() == category)
            .count()
    }

    /// Number of questions a session over the given scope will contain.
    ///
    /// The random sample never exceeds the bank, so a small bank yields a
    /// correspondingly small "random 10".
    #[must_use]
    pub fn count_for(&self, scope: SessionScope) -> usize {
        match scope {
            SessionScope::All => self.len(),
            SessionScope::Random10 => SessionScope::RANDOM_SAMPLE_SIZE.min(self.len()),
            SessionScope::Category(category) => self.count_in(category),
        }
    }
}
