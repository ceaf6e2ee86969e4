use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::APP_TITLE;
use crate::formatting::truncate;
use crate::interactive::app::InteractiveApp;

pub fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;

    let left = vec![
        Span::styled(
            format!(" {} ", truncate(APP_TITLE, width / 2)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {}", app.page.title()),
            Style::default().fg(Color::White),
        ),
    ];

    // Right: session counters
    let right_parts = vec![
        Span::styled(
            format!("eventos:{}", app.store.events().len()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" inscrições:{} ", app.store.enrollments().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let right_text_len: usize = right_parts.iter().map(|s| s.content.chars().count()).sum();
    let left_text_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_text_len + right_text_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right_parts);

    let header = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Rgb(11, 18, 32)));
    frame.render_widget(header, inner);
}
