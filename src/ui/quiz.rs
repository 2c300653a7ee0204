use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Answer, Question};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.wizard.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question);

    if question.is_free_text() {
        render_text_input(frame, chunks[2], app.text_input());
    } else {
        render_options(frame, chunks[2], question, app.cursor(), app.wizard.selection());
    }

    render_status(frame, chunks[3], app);
    render_controls(frame, chunks[4], app, question.is_free_text());
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let mut progress = format!(
        "Question {} of {}",
        app.wizard.index() + 1,
        app.wizard.questions().len()
    );
    if app.wizard.failed_submissions() > 0 {
        progress.push_str(&format!(
            "  ·  {} answer(s) not saved",
            app.wizard.failed_submissions()
        ));
    }
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &Question) {
    let text = if question.text.is_empty() {
        "No text"
    } else {
        question.text.as_str()
    };
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    cursor: usize,
    selection: Option<&Answer>,
) {
    let chosen = selection.and_then(Answer::option);
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == cursor;
        let is_chosen = chosen == Some(index);
        let style = if is_chosen {
            Style::default().fg(Color::Green).bold()
        } else if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor { ">" } else { " " };
        let radio = if is_chosen { "(*)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, radio), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_text_input(frame: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![
        Span::styled(input, Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);
    let widget = Paragraph::new(line).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Your answer ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    if app.confirming_skip() {
        let widget = Paragraph::new("No answer selected. Skip to the next question? [y/n]")
            .alignment(Alignment::Center)
            .fg(Color::Yellow)
            .bold();
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App, free_text: bool) {
    let next = if app.wizard.is_last_question() {
        "enter finish"
    } else {
        "enter next"
    };
    let help = if free_text {
        format!("type your answer  ·  {}  ·  esc quit", next)
    } else {
        format!("j/k navigate  ·  space select  ·  {}  ·  q quit", next)
    };
    let widget = Paragraph::new(help)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
