use thiserror::Error;

use crate::model::category::Category;

/// Choices shown per question: one correct answer plus three distractors.
pub const CHOICE_COUNT: usize = 4;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as authored or imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub category: Category,
    pub prompt: String,
    pub correct_answer: String,
    pub distractors: [String; 3],
}

impl QuestionDraft {
    #[must_use]
    pub fn new<S>(
        category: Category,
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        distractors: [S; 3],
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            category,
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            distractors: distractors.map(Into::into),
        }
    }

    /// Checks the draft and freezes it into a [`QuestionRecord`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionValidationError::BlankPrompt` or `BlankAnswer` when a
    /// field is empty or whitespace-only, and `DuplicateAnswer` when two of
    /// the four answer texts collide. Duplicates would make a shuffled choice
    /// list ambiguous, so they are rejected up front.
    pub fn validate(self) -> Result<QuestionRecord, QuestionValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionValidationError::BlankPrompt);
        }
        if self.correct_answer.trim().is_empty() {
            return Err(QuestionValidationError::BlankAnswer);
        }
        for distractor in &self.distractors {
            if distractor.trim().is_empty() {
                return Err(QuestionValidationError::BlankAnswer);
            }
        }

        let texts = [
            self.correct_answer.as_str(),
            self.distractors[0].as_str(),
            self.distractors[1].as_str(),
            self.distractors[2].as_str(),
        ];
        for (i, a) in texts.iter().enumerate() {
            for b in &texts[i + 1..] {
                if a == b {
                    return Err(QuestionValidationError::DuplicateAnswer {
                        text: (*a).to_owned(),
                    });
                }
            }
        }

        Ok(QuestionRecord {
            category: self.category,
            prompt: self.prompt,
            correct_answer: self.correct_answer,
            distractors: self.distractors,
        })
    }
}

/// Validated four-choice question.
///
/// Fields are private so a record can only exist through
/// [`QuestionDraft::validate`]; holders can rely on non-blank, duplicate-free
/// answer texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    category: Category,
    prompt: String,
    correct_answer: String,
    distractors: [String; 3],
}

impl QuestionRecord {
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn distractors(&self) -> &[String; 3] {
        &self.distractors
    }

    /// All four answer texts with the correct one first.
    ///
    /// Presentation must shuffle this before showing it; the fixed order is
    /// only a transport convenience.
    #[must_use]
    pub fn answer_set(&self) -> [&str; CHOICE_COUNT] {
        [
            self.correct_answer.as_str(),
            self.distractors[0].as_str(),
            self.distractors[1].as_str(),
            self.distractors[2].as_str(),
        ]
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    #[error("question prompt is blank")]
    BlankPrompt,

    #[error("answer text is blank")]
    BlankAnswer,

    #[error("duplicate answer text: {text}")]
    DuplicateAnswer { text: String },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
