//! Quiz-taking flow.

mod flow;
mod state;

pub use flow::QuizWizard;
pub use state::{Advance, Outcome, Step, SubmissionReport};
