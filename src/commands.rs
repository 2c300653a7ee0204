//! Command line surface: one subcommand per API route.
//!
//! List routes print rendered cards, everything else prints the response
//! text as the server sent it.

use clap::{ArgGroup, Subcommand};

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::Answer;
use crate::protocol::{CreateCourse, CreateQuestion, CreateTest, ReorderQuestions, UpdateQuestion};
use crate::render::{render, Kind, Panel, RenderOptions};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Take a test interactively (default)
    Quiz,
    /// Check that the server is reachable
    Health,
    /// List available courses
    Courses,
    /// List the questions of a course
    CourseQuestions { course_id: i64 },
    /// List the tests of a course
    CourseTests { course_id: i64 },
    /// Grade a single answer without an attempt
    #[command(group(ArgGroup::new("value").required(true).args(["option", "text"])))]
    Answer {
        #[arg(long)]
        question_id: i64,
        /// Zero-based option index
        #[arg(long)]
        option: Option<usize>,
        /// Free-text answer
        #[arg(long)]
        text: Option<String>,
    },
    /// Block or unblock a user
    BlockUser {
        user_id: i64,
        #[arg(long)]
        unblock: bool,
    },
    /// Rename a user
    UpdateName { user_id: i64, name: String },
    /// Create a course
    CreateCourse {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        teacher_id: i64,
    },
    /// Enroll a user in a course
    EnrollUser { course_id: i64, user_id: i64 },
    DeleteCourse { course_id: i64 },
    /// Create a question; the correct option is zero-based
    CreateQuestion {
        title: String,
        text: String,
        #[arg(long = "option", required = true)]
        options: Vec<String>,
        #[arg(long)]
        correct: usize,
    },
    UpdateQuestion {
        question_id: i64,
        text: String,
        #[arg(long = "option", required = true)]
        options: Vec<String>,
        #[arg(long)]
        correct: usize,
    },
    DeleteQuestion { question_id: i64 },
    /// List every question the caller may edit
    ListQuestions,
    /// List a course's questions with their answers
    TeacherCourseQuestions { course_id: i64 },
    /// Create a test from existing questions
    CreateTest {
        course_id: i64,
        name: String,
        #[arg(long = "question", required = true)]
        question_ids: Vec<i64>,
    },
    /// Activate or deactivate a test
    TestStatus {
        test_id: i64,
        #[arg(long)]
        inactive: bool,
    },
    /// Set the order of a test's questions
    ReorderQuestions {
        test_id: i64,
        #[arg(required = true)]
        question_ids: Vec<i64>,
    },
    /// Show the results of a test
    TestResults { test_id: i64 },
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Response to print on stdout.
    Output(Panel),
    /// Hand the terminal over to the quiz wizard.
    Quiz,
}

/// Execute a command against the API.
///
/// `raw` expands the JSON block under rendered lists.
pub async fn execute(api: &ApiClient, command: Command, raw: bool) -> Result<CommandResult> {
    let panel = match command {
        Command::Quiz => return Ok(CommandResult::Quiz),
        Command::Health => Panel::Message(api.health().await?),
        Command::Courses => list(api.list_courses().await?, Kind::Courses, raw)?,
        Command::CourseQuestions { course_id } => {
            list(api.course_questions(course_id).await?, Kind::Questions, raw)?
        }
        Command::CourseTests { course_id } => {
            list(api.course_tests(course_id).await?, Kind::Tests, raw)?
        }
        Command::Answer {
            question_id,
            option,
            text,
        } => {
            let answer = match (option, text) {
                (Some(index), _) => Answer::Option(index),
                (None, text) => Answer::Text(text.unwrap_or_default()),
            };
            let verdict = api.submit_answer(question_id, answer).await?;
            let text = if verdict.is_correct { "Correct!" } else { "Incorrect." };
            Panel::Message(text.to_string())
        }
        Command::BlockUser { user_id, unblock } => {
            Panel::Message(api.block_user(user_id, !unblock).await?)
        }
        Command::UpdateName { user_id, name } => {
            Panel::Message(api.update_user_name(user_id, &name).await?)
        }
        Command::CreateCourse {
            name,
            description,
            teacher_id,
        } => {
            let course = CreateCourse {
                name,
                description,
                teacher_id,
            };
            Panel::Message(api.create_course(&course).await?)
        }
        Command::EnrollUser { course_id, user_id } => {
            Panel::Message(api.enroll_user(course_id, user_id).await?)
        }
        Command::DeleteCourse { course_id } => Panel::Message(api.delete_course(course_id).await?),
        Command::CreateQuestion {
            title,
            text,
            options,
            correct,
        } => {
            let question = CreateQuestion {
                title,
                text,
                options,
                correct_option: correct,
            };
            Panel::Message(api.create_question(&question).await?)
        }
        Command::UpdateQuestion {
            question_id,
            text,
            options,
            correct,
        } => {
            let question = UpdateQuestion {
                id: question_id,
                text,
                options,
                correct_option: correct,
            };
            Panel::Message(api.update_question(&question).await?)
        }
        Command::DeleteQuestion { question_id } => {
            Panel::Message(api.delete_question(question_id).await?)
        }
        Command::ListQuestions => list(api.list_questions().await?, Kind::Questions, raw)?,
        Command::TeacherCourseQuestions { course_id } => list(
            api.teacher_course_questions(course_id).await?,
            Kind::Questions,
            raw,
        )?,
        Command::CreateTest {
            course_id,
            name,
            question_ids,
        } => {
            let test = CreateTest {
                course_id,
                name,
                question_ids,
            };
            Panel::Message(api.create_test(&test).await?)
        }
        Command::TestStatus { test_id, inactive } => {
            Panel::Message(api.set_test_status(test_id, !inactive).await?)
        }
        Command::ReorderQuestions {
            test_id,
            question_ids,
        } => {
            let reorder = ReorderQuestions {
                test_id,
                question_ids,
            };
            Panel::Message(api.reorder_test_questions(&reorder).await?)
        }
        Command::TestResults { test_id } => Panel::Message(api.test_results(test_id).await?),
    };

    Ok(CommandResult::Output(panel))
}

fn list(payload: String, kind: Kind, raw: bool) -> Result<Panel> {
    let mut panel = Panel::List(render(&payload, kind, RenderOptions::default())?);
    if raw {
        panel.toggle_raw();
    }
    Ok(panel)
}
