//! Course and test picker screens.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::render::Panel;

use super::list::panel_lines;

pub fn render(frame: &mut Frame, area: Rect, app: &App, title: &str, panel: &Panel) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);
    render_panel(frame, chunks[1], title, panel, app.cursor(), app.scroll());
    render_notice(frame, chunks[2], app.wizard.notice());
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let widget = Paragraph::new(app.api().base_url().to_string())
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    panel: &Panel,
    cursor: usize,
    json_scroll: usize,
) {
    let lines = panel_lines(panel, Some(cursor));
    let scroll = scroll_for_cursor(&lines, area.height, json_scroll);

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(title.to_string())
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

/// Keep the highlighted card inside the visible area, then move on by
/// `json_scroll` lines into the raw-JSON block.
fn scroll_for_cursor(lines: &[Line], height: u16, json_scroll: usize) -> u16 {
    let visible = height.saturating_sub(2) as usize;
    let selected = lines
        .iter()
        .position(|line| line.spans.first().is_some_and(|span| span.content == "> "))
        .unwrap_or(0);
    let base = selected.saturating_sub(visible.saturating_sub(4));
    let max = lines.len().saturating_sub(1);
    (base + json_scroll).min(max) as u16
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    let Some(notice) = notice else {
        return;
    };
    let widget = Paragraph::new(notice.to_string())
        .wrap(Wrap { trim: true })
        .fg(Color::Red);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter open  ·  v json  ·  J/K scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(marked: usize, total: usize) -> Vec<Line<'static>> {
        (0..total)
            .map(|i| {
                let marker = if i == marked { "> " } else { "  " };
                Line::from(vec![Span::raw(marker), Span::raw(format!("line {}", i))])
            })
            .collect()
    }

    #[test]
    fn test_scroll_follows_cursor() {
        assert_eq!(scroll_for_cursor(&lines(0, 40), 12, 0), 0);
        assert_eq!(scroll_for_cursor(&lines(20, 40), 12, 0), 14);
    }

    #[test]
    fn test_json_scroll_moves_past_cursor_and_stops_at_end() {
        assert_eq!(scroll_for_cursor(&lines(0, 40), 12, 25), 25);
        assert_eq!(scroll_for_cursor(&lines(0, 40), 12, 100), 39);
    }
}
