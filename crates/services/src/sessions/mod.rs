mod engine;
mod plan;
mod progress;
mod service;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use engine::QuizEngine;
pub use plan::{SessionBuilder, SessionPlan, SessionQuestion};
pub use progress::SessionProgress;
pub use service::{QuizSession, SessionState};
pub use view::{AnsweredView, QuestionView, ScopeListItem, SessionSnapshot};
