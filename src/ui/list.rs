//! Terminal adapter for rendered lists.

use ratatui::prelude::*;

use crate::render::{Card, ListBody, ListView, Panel, RawJson};

/// Lines for a panel, highlighting the card at `cursor`.
pub fn panel_lines(panel: &Panel, cursor: Option<usize>) -> Vec<Line<'static>> {
    match panel {
        Panel::Blank => vec![Line::from("Loading...".fg(Color::DarkGray))],
        Panel::Message(text) => text.lines().map(|l| Line::from(l.to_string())).collect(),
        Panel::List(view) => list_lines(view, cursor),
        Panel::Error(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).bold(),
        ))],
    }
}

pub fn list_lines(view: &ListView, cursor: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match &view.body {
        ListBody::Empty(placeholder) => {
            lines.push(Line::from(Span::styled(
                *placeholder,
                Style::default().fg(Color::DarkGray),
            )));
        }
        ListBody::Cards(cards) => {
            for (index, card) in cards.iter().enumerate() {
                card_lines(&mut lines, card, cursor == Some(index));
                lines.push(Line::from(""));
            }
        }
    }

    raw_json_lines(&mut lines, &view.raw);
    lines
}

fn card_lines(lines: &mut Vec<Line<'static>>, card: &Card, selected: bool) {
    let style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let marker = if selected { "> " } else { "  " };

    lines.push(Line::from(vec![
        Span::styled(marker, style),
        Span::styled(card.title.clone(), style),
    ]));
    for field in &card.fields {
        lines.push(Line::from(vec![
            Span::styled(format!("    {}: ", field.label), Style::default().fg(Color::DarkGray)),
            Span::styled(field.value.clone(), Style::default().fg(Color::Gray)),
        ]));
    }
    for option in &card.options {
        let (symbol, color) = if option.correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("      {} ", symbol), Style::default().fg(color)),
            Span::styled(option.text.clone(), Style::default().fg(color)),
        ]));
    }
}

pub fn raw_json_lines(lines: &mut Vec<Line<'static>>, raw: &RawJson) {
    lines.push(Line::from(Span::styled(
        format!("[v] {}", raw.label()),
        Style::default().fg(Color::Yellow),
    )));
    if let Some(block) = raw.block() {
        for line in block.lines() {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
}
