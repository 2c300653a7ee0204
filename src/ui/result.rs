use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::wizard::Outcome;

use super::list::raw_json_lines;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[0], app);
    render_details(frame, chunks[1], app.wizard.outcome(), app.scroll());
    render_controls(frame, chunks[2]);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let answered = app.wizard.answers().len();
    let total = app.wizard.questions().len();

    let score_line = match app.wizard.outcome() {
        Some(Outcome::Score { label, .. }) => Line::from(Span::styled(
            format!("Score: {}", label),
            Style::default().fg(Color::Green).bold(),
        )),
        Some(Outcome::Failed(message)) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).bold(),
        )),
        None => Line::from(""),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TEST FINISHED",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        score_line,
        Line::from(Span::styled(
            format!("{} of {} questions answered", answered, total),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_details(frame: &mut Frame, area: Rect, outcome: Option<&Outcome>, scroll: usize) {
    let Some(Outcome::Score { raw, .. }) = outcome else {
        return;
    };
    let mut lines = Vec::new();
    raw_json_lines(&mut lines, raw);

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  v json  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
