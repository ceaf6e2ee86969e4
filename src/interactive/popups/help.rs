use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;

/// Draw the keyboard shortcuts overlay.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width: u16 = 64;
    let height: u16 = 16;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Atalhos ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let xlsx_desc = if app.capabilities.spreadsheet { "Exportar XLSX" } else { "XLSX indisponível" };

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("{:<30}", "Navegação"), header_style),
            Span::styled("Ações", header_style),
        ]),
        build_help_row("1-5", "Ir para página", "c", "Limpar inscrições", key_style, desc_style),
        build_help_row("Tab", "Próxima página", "r", "Restaurar eventos", key_style, desc_style),
        build_help_row("j/k", "Página abaixo/acima", "e", "Exportar CSV", key_style, desc_style),
        build_help_row("Enter", "Abrir formulário", "x", xlsx_desc, key_style, desc_style),
        build_help_row("Esc", "Fechar avisos", "q", "Sair", key_style, desc_style),
        Line::from(""),
        Line::from(Span::styled("Formulário", header_style)),
        build_help_row("Tab", "Próximo campo", "Enter", "Salvar", key_style, desc_style),
        build_help_row("←/→", "Cursor / opção", "Esc", "Voltar ao menu", key_style, desc_style),
        build_help_row("^L", "Limpar inscrições", "^R", "Restaurar eventos", key_style, desc_style),
    ];

    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        "Pressione ? ou Esc para fechar",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, footer_area);
}

/// One row across the two columns.
fn build_help_row<'a>(
    left_key: &'a str,
    left_desc: &'a str,
    right_key: &'a str,
    right_desc: &'a str,
    key_style: Style,
    desc_style: Style,
) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<7}", left_key), key_style),
        Span::styled(format!("{:<23}", left_desc), desc_style),
        Span::styled(format!("{:<7}", right_key), key_style),
        Span::styled(right_desc, desc_style),
    ])
}
