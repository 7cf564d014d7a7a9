#![forbid(unsafe_code)]

//! Domain types for a statistics exam-prep quiz: the question bank, session
//! scopes, score summaries and the small pieces of arithmetic the exams
//! drill (standardization, standard errors, critical values).
//!
//! Everything here is pure and synchronous. Session orchestration lives in
//! the `services` crate.

pub mod model;
pub mod stats;
pub mod time;

pub use time::Clock;

pub use model::{
    AnswerRecord, CHOICE_COUNT, Category, ParseCategoryError, ParseScopeError, QuestionBank,
    QuestionDraft, QuestionRecord, QuestionValidationError, SessionScope, SessionSummary,
    SummaryError,
};
