//! The quiz wizard: course → test → questions → result.
//!
//! All scoring happens on the server. The wizard only tracks where the user
//! is, what they answered, and the attempt those answers belong to.

use std::collections::BTreeMap;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::error::{Error, Result};
use crate::models::{Answer, AttemptId, Question};
use crate::protocol::{questions_from_test, FinishedAttempt, StartedAttempt, TestAnswerSubmission};
use crate::render::{render, Kind, Panel, RawJson, RenderOptions};

use super::state::{Advance, Outcome, Step, SubmissionReport};

pub struct QuizWizard {
    step: Step,
    /// Course picker contents.
    pub courses: Panel,
    /// Test picker contents for the chosen course.
    pub tests: Panel,
    attempt_id: Option<AttemptId>,
    questions: Vec<Question>,
    index: usize,
    answers: BTreeMap<i64, Answer>,
    selection: Option<Answer>,
    outcome: Option<Outcome>,
    notice: Option<String>,
    failed_submissions: usize,
    reports_tx: mpsc::UnboundedSender<SubmissionReport>,
    reports_rx: mpsc::UnboundedReceiver<SubmissionReport>,
}

impl Default for QuizWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizWizard {
    pub fn new() -> Self {
        let (reports_tx, reports_rx) = mpsc::unbounded_channel();
        Self {
            step: Step::SelectingCourse,
            courses: Panel::Blank,
            tests: Panel::Blank,
            attempt_id: None,
            questions: Vec::new(),
            index: 0,
            answers: BTreeMap::new(),
            selection: None,
            outcome: None,
            notice: None,
            failed_submissions: 0,
            reports_tx,
            reports_rx,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn attempt_id(&self) -> Option<&AttemptId> {
        self.attempt_id.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn answers(&self) -> &BTreeMap<i64, Answer> {
        &self.answers
    }

    pub fn selection(&self) -> Option<&Answer> {
        self.selection.as_ref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Inline message about the last failed action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn failed_submissions(&self) -> usize {
        self.failed_submissions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.step {
            Step::AnsweringQuestion(index) => self.questions.get(index),
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        matches!(self.step, Step::AnsweringQuestion(index) if index + 1 == self.questions.len())
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Fill the course picker.
    pub async fn load_courses(&mut self, api: &ApiClient) {
        let result = match api.list_courses().await {
            Ok(text) => render(&text, Kind::Courses, RenderOptions::interactive()),
            Err(e) => Err(e),
        };
        self.courses = Panel::from_list(result);
    }

    /// Fetch the tests of `course_id` and move to the test picker.
    ///
    /// On failure the step is unchanged and the error becomes the notice.
    pub async fn load_tests(&mut self, api: &ApiClient, course_id: i64) -> bool {
        if !matches!(self.step, Step::SelectingCourse | Step::SelectingTest) {
            return false;
        }

        let result = match api.course_tests(course_id).await {
            Ok(text) => render(&text, Kind::Tests, RenderOptions::interactive()),
            Err(e) => Err(e),
        };
        match result {
            Ok(view) => {
                self.tests = Panel::List(view);
                self.notice = None;
                self.step = Step::SelectingTest;
                true
            }
            Err(e) => {
                tracing::debug!(course_id, error = %e, "loading tests failed");
                self.notice = Some(format!("Failed to load tests: {}", e));
                false
            }
        }
    }

    /// Open an attempt for `test_id` and show its first question.
    ///
    /// Both the attempt id and the question list must arrive; otherwise the
    /// step is unchanged and the error becomes the notice.
    pub async fn start_test(&mut self, api: &ApiClient, test_id: i64) -> bool {
        if !matches!(self.step, Step::SelectingCourse | Step::SelectingTest) {
            return false;
        }

        let (attempt_id, questions) = match open_attempt(api, test_id).await {
            Ok(opened) => opened,
            Err(e) => {
                tracing::debug!(test_id, error = %e, "starting test failed");
                self.notice = Some(format!("Could not start the test: {}", e));
                return false;
            }
        };

        self.attempt_id = Some(attempt_id);
        self.questions = questions;
        self.index = 0;
        self.answers.clear();
        self.selection = None;
        self.outcome = None;
        self.notice = None;

        if self.questions.is_empty() {
            self.finish(api).await;
        } else {
            self.step = Step::AnsweringQuestion(0);
        }
        true
    }

    /// Record a selection for the question on screen.
    pub fn select(&mut self, answer: Answer) {
        if matches!(self.step, Step::AnsweringQuestion(_)) {
            self.selection = Some(answer);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Leave the current question.
    ///
    /// A selection is stored and submitted in the background. Without one,
    /// tests with more than one question ask for confirmation first.
    pub async fn advance(&mut self, api: &ApiClient) -> Advance {
        let Step::AnsweringQuestion(index) = self.step else {
            return Advance::Ignored;
        };
        let Some(question_id) = self.questions.get(index).map(|q| q.id) else {
            return self.move_next(api).await;
        };

        match self.selection.take() {
            Some(answer) => {
                self.answers.insert(question_id, answer.clone());
                self.submit(api, question_id, answer);
            }
            None if self.questions.len() > 1 => return Advance::ConfirmSkip,
            None => {}
        }
        self.move_next(api).await
    }

    /// Skip the current question without answering it.
    pub async fn confirm_skip(&mut self, api: &ApiClient) -> Advance {
        if !matches!(self.step, Step::AnsweringQuestion(_)) {
            return Advance::Ignored;
        }
        self.selection = None;
        self.move_next(api).await
    }

    /// Drop everything and go back to the course picker.
    pub fn restart(&mut self) {
        self.step = Step::SelectingCourse;
        self.courses = Panel::Blank;
        self.tests = Panel::Blank;
        self.attempt_id = None;
        self.questions = Vec::new();
        self.index = 0;
        self.answers = BTreeMap::new();
        self.selection = None;
        self.outcome = None;
        self.notice = None;
    }

    /// Collect submissions that completed since the last call.
    pub fn drain_submissions(&mut self) -> Vec<SubmissionReport> {
        let mut reports = Vec::new();
        while let Ok(report) = self.reports_rx.try_recv() {
            self.track(&report);
            reports.push(report);
        }
        reports
    }

    /// Wait for the next submission to complete.
    pub async fn next_submission(&mut self) -> Option<SubmissionReport> {
        let report = self.reports_rx.recv().await?;
        self.track(&report);
        Some(report)
    }

    pub fn toggle_result_json(&mut self) {
        if let Some(Outcome::Score { raw, .. }) = &mut self.outcome {
            raw.toggle();
        }
    }

    fn track(&mut self, report: &SubmissionReport) {
        if !report.is_ok() {
            self.failed_submissions += 1;
        }
    }

    async fn move_next(&mut self, api: &ApiClient) -> Advance {
        let next = (self.index + 1).min(self.questions.len());
        self.index = next;

        match self.questions.get(next) {
            Some(question) => {
                self.selection = self.answers.get(&question.id).cloned();
                self.step = Step::AnsweringQuestion(next);
                Advance::Moved
            }
            None => {
                self.finish(api).await;
                Advance::Finished
            }
        }
    }

    async fn finish(&mut self, api: &ApiClient) {
        if let Some(attempt_id) = &self.attempt_id {
            let result = match api.finish_test(attempt_id).await {
                Ok(text) => parse_finished(&text),
                Err(e) => Err(e),
            };
            self.outcome = Some(match result {
                Ok((finished, payload)) => Outcome::Score {
                    label: finished.score_label(),
                    raw: RawJson::new(payload),
                },
                Err(e) => {
                    tracing::debug!(%attempt_id, error = %e, "finishing attempt failed");
                    Outcome::Failed(format!("Failed to finish: {}", e))
                }
            });
        }
        self.index = self.questions.len();
        self.selection = None;
        self.step = Step::Finished;
    }

    /// Fire-and-forget: the report arrives on the wizard's channel.
    fn submit(&self, api: &ApiClient, question_id: i64, answer: Answer) {
        let Some(attempt_id) = self.attempt_id.clone() else {
            return;
        };
        let api = api.clone();
        let reports = self.reports_tx.clone();

        tokio::spawn(async move {
            let submission = TestAnswerSubmission {
                attempt_id,
                question_id,
                selected_option: answer,
            };
            let result = api.submit_test_answer(&submission).await;
            if let Err(e) = &result {
                tracing::warn!(question_id, error = %e, "answer submission failed");
            }
            let _ = reports.send(SubmissionReport {
                attempt_id: submission.attempt_id,
                question_id,
                result,
            });
        });
    }
}

async fn open_attempt(api: &ApiClient, test_id: i64) -> Result<(AttemptId, Vec<Question>)> {
    let started: StartedAttempt = serde_json::from_str(&api.start_test(test_id).await?)?;
    let attempt_id = started.attempt_id().ok_or(Error::MissingField("attempt_id"))?;
    let questions = questions_from_test(&api.get_test(test_id).await?)?;
    Ok((attempt_id, questions))
}

fn parse_finished(text: &str) -> Result<(FinishedAttempt, Value)> {
    let payload: Value = serde_json::from_str(text)?;
    let finished = serde_json::from_value(payload.clone())?;
    Ok((finished, payload))
}
