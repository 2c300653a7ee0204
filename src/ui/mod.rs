mod list;
mod picker;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::wizard::Step;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.wizard.step() {
        Step::SelectingCourse => picker::render(frame, area, app, " Courses ", &app.wizard.courses),
        Step::SelectingTest => picker::render(frame, area, app, " Tests ", &app.wizard.tests),
        Step::AnsweringQuestion(_) => quiz::render(frame, area, app),
        Step::Finished => result::render(frame, area, app),
    }
}
