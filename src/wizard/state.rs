//! Wizard steps and the values transitions report.

use crate::error::Result;
use crate::models::AttemptId;
use crate::render::RawJson;

/// Position in the linear quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    SelectingCourse,
    SelectingTest,
    /// Index of the question on screen.
    AnsweringQuestion(usize),
    /// Terminal until restarted.
    Finished,
}

/// Result of asking the server to score an attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Score { label: String, raw: RawJson },
    /// Shown in place of the score; finishing is never retried.
    Failed(String),
}

/// What an `advance` request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question.
    Moved,
    /// Nothing selected: the user must confirm skipping first.
    ConfirmSkip,
    /// Moved past the last question.
    Finished,
    /// Not answering a question; nothing happened.
    Ignored,
}

/// Completion of one detached answer submission.
#[derive(Debug)]
pub struct SubmissionReport {
    pub attempt_id: AttemptId,
    pub question_id: i64,
    pub result: Result<String>,
}

impl SubmissionReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
