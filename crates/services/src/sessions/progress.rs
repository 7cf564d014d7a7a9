/// Aggregate counters for one session run.
///
/// Snapshots take their totals from here; `remaining` counts the questions
/// not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
