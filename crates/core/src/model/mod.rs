mod answer;
mod bank;
pub(crate) mod builtin;
mod category;
mod question;
mod scope;
mod summary;

pub use answer::AnswerRecord;
pub use bank::QuestionBank;
pub use category::{Category, ParseCategoryError};
pub use question::{CHOICE_COUNT, QuestionDraft, QuestionRecord, QuestionValidationError};
pub use scope::{ParseScopeError, SessionScope};
pub use summary::{SessionSummary, SummaryError};
