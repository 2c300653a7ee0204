use crossterm::event::KeyCode;

use crate::api::ApiClient;
use crate::models::Answer;
use crate::render::{CardAction, Panel, RawJson};
use crate::wizard::{Advance, Outcome, QuizWizard, Step};

/// Terminal front end around a [`QuizWizard`].
pub struct App {
    api: ApiClient,
    pub wizard: QuizWizard,
    cursor: usize,
    text_input: String,
    confirming_skip: bool,
    /// Lines scrolled into an expanded raw-JSON block.
    scroll: usize,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            wizard: QuizWizard::new(),
            cursor: 0,
            text_input: String::new(),
            confirming_skip: false,
            scroll: 0,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Card index in the pickers, option index while answering.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    pub fn confirming_skip(&self) -> bool {
        self.confirming_skip
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub async fn load_courses(&mut self) {
        self.wizard.load_courses(&self.api).await;
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Returns true if the app should exit.
    pub async fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.wizard.step() {
            Step::SelectingCourse | Step::SelectingTest => self.handle_picker_key(key).await,
            Step::AnsweringQuestion(_) => self.handle_quiz_key(key).await,
            Step::Finished => self.handle_result_key(key).await,
        }
    }

    async fn handle_picker_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::PageDown | KeyCode::Char('J') => self.scroll_down(),
            KeyCode::PageUp | KeyCode::Char('K') => self.scroll_up(),
            KeyCode::Char('v') => {
                self.active_panel_mut().toggle_raw();
                self.scroll = 0;
            }
            KeyCode::Enter => {
                self.wizard.dismiss_notice();
                let action = self
                    .active_panel()
                    .list()
                    .and_then(|view| view.action(self.cursor));
                match action {
                    Some(CardAction::OpenCourse(course_id)) => {
                        if self.wizard.load_tests(&self.api, course_id).await {
                            self.cursor = 0;
                            self.scroll = 0;
                        }
                    }
                    Some(CardAction::StartTest(test_id)) => {
                        if self.wizard.start_test(&self.api, test_id).await {
                            self.reset_question_input();
                        }
                    }
                    None => {}
                }
            }
            KeyCode::Char('r') => {
                self.wizard.restart();
                self.load_courses().await;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        }
        false
    }

    async fn handle_quiz_key(&mut self, key: KeyCode) -> bool {
        if self.confirming_skip {
            match key {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.confirming_skip = false;
                    let advance = self.wizard.confirm_skip(&self.api).await;
                    self.after_advance(advance);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirming_skip = false;
                }
                _ => {}
            }
            return false;
        }

        let free_text = self
            .wizard
            .current_question()
            .is_some_and(|question| question.is_free_text());

        if free_text {
            match key {
                KeyCode::Char(c) => {
                    self.text_input.push(c);
                    self.sync_text_selection();
                }
                KeyCode::Backspace => {
                    self.text_input.pop();
                    self.sync_text_selection();
                }
                KeyCode::Enter => self.advance().await,
                KeyCode::Esc => return true,
                _ => {}
            }
            return false;
        }

        match key {
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Char(' ') => self.wizard.select(Answer::Option(self.cursor)),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.option_count() {
                    self.cursor = index;
                    self.wizard.select(Answer::Option(index));
                }
            }
            KeyCode::Backspace => self.wizard.clear_selection(),
            KeyCode::Enter => self.advance().await,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        }
        false
    }

    async fn handle_result_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => self.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => self.scroll_up(),
            KeyCode::Char('v') => {
                self.wizard.toggle_result_json();
                self.scroll = 0;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.wizard.restart();
                self.load_courses().await;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        }
        false
    }

    async fn advance(&mut self) {
        let advance = self.wizard.advance(&self.api).await;
        self.after_advance(advance);
    }

    fn after_advance(&mut self, advance: Advance) {
        match advance {
            Advance::ConfirmSkip => self.confirming_skip = true,
            Advance::Moved => self.reset_question_input(),
            Advance::Finished | Advance::Ignored => {}
        }
    }

    fn reset_question_input(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
        self.text_input.clear();
        match self.wizard.selection() {
            Some(Answer::Option(index)) => self.cursor = *index,
            Some(Answer::Text(text)) => self.text_input = text.clone(),
            None => {}
        }
    }

    fn sync_text_selection(&mut self) {
        if self.text_input.trim().is_empty() {
            self.wizard.clear_selection();
        } else {
            self.wizard.select(Answer::Text(self.text_input.trim().to_string()));
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = match self.wizard.step() {
            Step::AnsweringQuestion(_) => self.option_count(),
            _ => self
                .active_panel()
                .list()
                .map_or(0, |view| view.cards().len()),
        };
        self.scroll = 0;
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn scroll_down(&mut self) {
        let max_scroll = self
            .active_raw()
            .and_then(RawJson::block)
            .map_or(0, |block| block.lines().count().saturating_sub(1));
        self.scroll = (self.scroll + 1).min(max_scroll);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Raw-JSON block of the screen on display.
    fn active_raw(&self) -> Option<&RawJson> {
        match self.wizard.step() {
            Step::SelectingCourse | Step::SelectingTest => {
                self.active_panel().list().map(|view| &view.raw)
            }
            Step::Finished => match self.wizard.outcome() {
                Some(Outcome::Score { raw, .. }) => Some(raw),
                _ => None,
            },
            Step::AnsweringQuestion(_) => None,
        }
    }

    fn option_count(&self) -> usize {
        self.wizard
            .current_question()
            .map_or(0, |question| question.options.len())
    }

    fn active_panel(&self) -> &Panel {
        match self.wizard.step() {
            Step::SelectingTest => &self.wizard.tests,
            _ => &self.wizard.courses,
        }
    }

    fn active_panel_mut(&mut self) -> &mut Panel {
        match self.wizard.step() {
            Step::SelectingTest => &mut self.wizard.tests,
            _ => &mut self.wizard.courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, Kind, RenderOptions};

    fn app() -> App {
        App::new(ApiClient::new(url::Url::parse("http://127.0.0.1:9").unwrap()))
    }

    #[tokio::test]
    async fn test_quit_keys_on_picker() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q')).await);
        assert!(app.handle_key(KeyCode::Esc).await);
        assert!(!app.handle_key(KeyCode::Char('x')).await);
    }

    #[tokio::test]
    async fn test_cursor_stays_put_on_empty_picker() {
        let mut app = app();
        app.handle_key(KeyCode::Down).await;
        assert_eq!(app.cursor(), 0);
    }

    #[tokio::test]
    async fn test_enter_without_cards_does_nothing() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Enter).await);
        assert_eq!(app.wizard.step(), Step::SelectingCourse);
    }

    #[tokio::test]
    async fn test_scroll_reaches_expanded_json_on_picker() {
        let mut app = app();
        let payload = r#"{"courses":[{"id":1,"name":"Math"}],"page":{"size":1}}"#;
        app.wizard.courses =
            Panel::from_list(render(payload, Kind::Courses, RenderOptions::interactive()));

        app.handle_key(KeyCode::PageDown).await;
        assert_eq!(app.scroll(), 0, "collapsed JSON has nothing to scroll");

        app.handle_key(KeyCode::Char('v')).await;
        let block_lines = app.wizard.courses.list().unwrap().raw.block().unwrap().lines().count();
        for _ in 0..block_lines + 5 {
            app.handle_key(KeyCode::PageDown).await;
        }
        assert_eq!(app.scroll(), block_lines - 1);

        app.handle_key(KeyCode::PageUp).await;
        assert_eq!(app.scroll(), block_lines - 2);

        app.handle_key(KeyCode::Char('v')).await;
        assert_eq!(app.scroll(), 0);
    }

    #[tokio::test]
    async fn test_moving_cursor_resets_scroll() {
        let mut app = app();
        app.wizard.courses = Panel::from_list(render(
            r#"[{"id":1},{"id":2}]"#,
            Kind::Courses,
            RenderOptions::interactive(),
        ));
        app.handle_key(KeyCode::Char('v')).await;
        app.handle_key(KeyCode::Char('J')).await;
        assert_eq!(app.scroll(), 1);

        app.handle_key(KeyCode::Down).await;
        assert_eq!(app.cursor(), 1);
        assert_eq!(app.scroll(), 0);
    }
}
