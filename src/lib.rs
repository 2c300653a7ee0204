//! # course-quiz
//!
//! Client for a course/quiz HTTP API: a request client that owns its bearer
//! credential, a renderer that turns JSON payloads into cards, and a quiz
//! wizard that walks a user from course to test to result.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use course_quiz::{ApiClient, Config, Credential};
//!
//! # async fn demo() -> course_quiz::Result<()> {
//! let config = Config::from_env()?;
//! let mut api = ApiClient::from_config(&config);
//! if let Some(credential) = Credential::new("Bearer eyJ...") {
//!     api.set_credential(credential);
//! }
//!
//! // Take over the terminal and run the wizard until the user quits.
//! course_quiz::run_quiz(api).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod commands;
pub mod config;
pub mod credential;
pub mod error;
pub mod models;
pub mod protocol;
pub mod render;
pub mod terminal;
mod ui;
pub mod wizard;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

pub use api::ApiClient;
pub use app::App;
pub use config::Config;
pub use credential::Credential;
pub use error::{Error, Result};
pub use wizard::QuizWizard;

/// How long to wait for a key before redrawing (picks up submission reports).
const TICK: Duration = Duration::from_millis(100);

/// Run the interactive quiz wizard in the terminal.
///
/// Returns when the user quits. The terminal is restored even if the event
/// loop fails.
pub async fn run_quiz(api: ApiClient) -> Result<()> {
    let mut app = App::new(api);
    let mut term = terminal::init()?;
    let result = run_event_loop(&mut term, &mut app).await;
    terminal::restore()?;
    result
}

async fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<()> {
    terminal.draw(|frame| ui::render(frame, app))?;
    app.load_courses().await;

    loop {
        for report in app.wizard.drain_submissions() {
            tracing::debug!(question_id = report.question_id, ok = report.is_ok(), "submission report");
        }
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }
            if app.handle_key(key.code).await {
                break;
            }
        }
    }

    Ok(())
}
