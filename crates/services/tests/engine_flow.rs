use std::sync::Arc;

use quiz_core::model::{Category, QuestionBank, SessionScope};
use quiz_core::time::fixed_clock;
use services::QuizEngine;

#[test]
fn full_run_over_the_builtin_bank_reaches_a_summary() {
    let mut engine = QuizEngine::new(Arc::new(QuestionBank::builtin())).with_clock(fixed_clock());

    let mut snapshot = engine.start_session(SessionScope::All);
    assert_eq!(snapshot.total, 80);

    let mut expected_correct = 0;
    while !snapshot.is_complete {
        snapshot = engine.submit_answer(0).expect("session active");
        let answered = snapshot
            .current
            .as_ref()
            .and_then(|question| question.answered)
            .expect("answer just recorded");
        if answered.was_correct {
            expected_correct += 1;
        }
        assert_eq!(snapshot.correct, expected_correct);

        snapshot = engine.advance().expect("session active");
    }

    assert_eq!(snapshot.answered, 80);
    let summary = engine.summary().expect("complete session has a summary");
    assert_eq!(summary.total_questions(), 80);
    assert_eq!(summary.correct(), u32::try_from(expected_correct).unwrap());
}

#[test]
fn picker_roundtrip_switches_scopes() {
    let mut engine = QuizEngine::new(Arc::new(QuestionBank::builtin())).with_clock(fixed_clock());

    let snapshot = engine.start_session(SessionScope::Category(Category::Calculation));
    assert_eq!(snapshot.total, 17);

    engine.return_to_picker();
    assert!(engine.snapshot().is_none());

    let snapshot = engine.start_session(SessionScope::Category(Category::HypothesisTest));
    assert_eq!(snapshot.total, 12);
    assert_eq!(
        snapshot.scope,
        SessionScope::Category(Category::HypothesisTest)
    );
}
