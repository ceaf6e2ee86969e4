use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::{APP_TITLE, SUBTITLE};
use crate::interactive::app::InteractiveApp;

pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let muted = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(Span::styled(APP_TITLE, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(SUBTITLE, muted)),
        Line::from(""),
        Line::from(Span::styled("Próximos eventos", Style::default().fg(Color::White).add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];

    if app.store.events().is_empty() {
        lines.push(Line::from(Span::styled("Nenhum evento cadastrado.", muted)));
    }

    for event in app.store.events() {
        lines.push(Line::from(Span::styled(
            event.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "  Local: {} • Data: {} • Categoria: {}",
                event.venue, event.date, event.category
            ),
            muted,
        )));
        lines.push(Line::from(""));
    }

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Início ").border_style(muted));
    frame.render_widget(page, area);
}
