use chrono::{DateTime, Utc};

/// Record of one submitted answer within a session.
///
/// Indices refer to the session's shuffled presentation order, not to the
/// bank. Kept for score aggregation and end-of-run summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub chosen: usize,
    pub was_correct: bool,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(
        question_index: usize,
        chosen: usize,
        was_correct: bool,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            question_index,
            chosen,
            was_correct,
            answered_at,
        }
    }
}
