use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerRecord, SessionScope};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },

    #[error("answered count ({answered}) exceeds question count ({total})")]
    AnsweredExceedsTotal { answered: u32, total: u32 },

    #[error("correct count ({correct}) exceeds answered count ({answered})")]
    CorrectExceedsAnswered { correct: u32, answered: u32 },
}

/// Aggregate result of a completed quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    scope: SessionScope,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_questions: u32,
    answered: u32,
    correct: u32,
}

impl SessionSummary {
    /// Assemble a summary from already-aggregated counts.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, and the count-ordering variants when
    /// `correct <= answered <= total_questions` does not hold.
    pub fn from_parts(
        scope: SessionScope,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total_questions: u32,
        answered: u32,
        correct: u32,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if answered > total_questions {
            return Err(SummaryError::AnsweredExceedsTotal {
                answered,
                total: total_questions,
            });
        }
        if correct > answered {
            return Err(SummaryError::CorrectExceedsAnswered { correct, answered });
        }

        Ok(Self {
            scope,
            started_at,
            completed_at,
            total_questions,
            answered,
            correct,
        })
    }

    /// Build a summary by counting a session's answer records.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`. Returns `SummaryError::TooManyQuestions` if a count
    /// cannot fit in `u32`.
    pub fn from_records(
        scope: SessionScope,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total_questions: usize,
        records: &[AnswerRecord],
    ) -> Result<Self, SummaryError> {
        let total = u32::try_from(total_questions).map_err(|_| SummaryError::TooManyQuestions {
            len: total_questions,
        })?;
        let answered = u32::try_from(records.len()).map_err(|_| SummaryError::TooManyQuestions {
            len: records.len(),
        })?;

        let mut correct = 0_u32;
        for record in records {
            if record.was_correct {
                correct = correct.saturating_add(1);
            }
        }

        Self::from_parts(scope, started_at, completed_at, total, answered, correct)
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
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Correct answers as a share of the whole question list, rounded to a
    /// whole percent. An empty session scores zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (f64::from(self.correct) * 100.0 / f64::from(self.total_questions)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn record(index: usize, was_correct: bool) -> AnswerRecord {
        AnswerRecord::new(index, 0, was_correct, fixed_now())
    }

    #[test]
    fn summary_counts_records() {
        let started = fixed_now();
        let completed = started + Duration::minutes(5);
        let records = vec![
            record(0, true),
            record(1, false),
            record(2, true),
        ];

        let summary =
            SessionSummary::from_records(SessionScope::All, started, completed, 3, &records)
                .unwrap();

        assert_eq!(summary.total_questions(), 3);
        assert_eq!(summary.answered(), 3);
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.percent(), 67);
    }

    #[test]
    fn reversed_time_range_is_rejected() {
        let started = fixed_now();
        let err = SessionSummary::from_records(
            SessionScope::All,
            started,
            started - Duration::seconds(1),
            1,
            &[],
        )
        .unwrap_err();
        assert_eq!(err, SummaryError::InvalidTimeRange);
    }

    #[test]
    fn correct_may_not_exceed_answered() {
        let now = fixed_now();
        let err = SessionSummary::from_parts(SessionScope::All, now, now, 10, 4, 5).unwrap_err();
        assert_eq!(
            err,
            SummaryError::CorrectExceedsAnswered {
                correct: 5,
                answered: 4
            }
        );
    }

    #[test]
    fn answered_may_not_exceed_total() {
        let now = fixed_now();
        let err = SessionSummary::from_parts(SessionScope::All, now, now, 3, 4, 2).unwrap_err();
        assert_eq!(
            err,
            SummaryError::AnsweredExceedsTotal {
                answered: 4,
                total: 3
            }
        );
    }

    #[test]
    fn percent_rounds_to_nearest_whole() {
        let now = fixed_now();
        let one_third = SessionSummary::from_parts(SessionScope::All, now, now, 3, 3, 1).unwrap();
        assert_eq!(one_third.percent(), 33);

        let empty = SessionSummary::from_parts(SessionScope::All, now, now, 0, 0, 0).unwrap();
        assert_eq!(empty.percent(), 0);
    }
}
