use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::interactive::app::{Focus, InteractiveApp, Page};

/// Page menu on top, the two session actions underneath.
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Page::ALL.len() as u16 + 2),
            Constraint::Min(4),
        ])
        .split(area);

    let border_color = if app.focus == Focus::Menu { Color::Cyan } else { Color::DarkGray };

    let items: Vec<ListItem> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let selected = *page == app.page;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(page.title(), style),
            ]))
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Menu ")
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(menu, chunks[0]);

    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);
    let actions = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" c ", key_style),
            Span::styled("Limpar inscrições", desc_style),
        ]),
        Line::from(vec![
            Span::styled(" r ", key_style),
            Span::styled("Restaurar eventos", desc_style),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sessão ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(actions, chunks[1]);
}
