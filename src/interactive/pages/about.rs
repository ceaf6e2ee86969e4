use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::ABOUT_CAPTION;
use crate::interactive::app::InteractiveApp;

pub fn draw(frame: &mut Frame, area: Rect, _app: &InteractiveApp) {
    let muted = Style::default().fg(Color::DarkGray);
    let bold = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("Sobre o Projeto", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(vec![
            Span::raw("Protótipo acadêmico baseado no "),
            Span::styled("PDTI da SMEL", bold),
        ]),
        Line::from(vec![
            Span::raw("Aplicação de terminal — "),
            Span::styled("sem banco de dados", bold),
            Span::raw(", os dados valem apenas para a sessão atual."),
        ]),
        Line::from("Permite cadastrar eventos, fazer inscrições e exportar dados."),
        Line::from(""),
        Line::from(Span::styled(ABOUT_CAPTION, muted)),
    ];

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Sobre ").border_style(muted));
    frame.render_widget(page, area);
}
