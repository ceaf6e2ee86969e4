use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::export::ExportFormat;
use crate::interactive::app::InteractiveApp;

pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let muted = Style::default().fg(Color::DarkGray);
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let count = app.store.enrollments().len();

    let mut lines = vec![
        Line::from(Span::styled(
            "Exportar inscrições",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if count == 0 {
        lines.push(Line::from(Span::styled(
            "ⓘ Nenhuma inscrição para exportar.",
            Style::default().fg(Color::Blue),
        )));
    } else {
        lines.push(Line::from(format!("{} inscrição(ões) prontas para exportar.", count)));
        lines.push(Line::from(""));
        lines.push(format_action("e", ExportFormat::Csv, key_style, muted));

        if app.capabilities.spreadsheet {
            lines.push(format_action("x", ExportFormat::Xlsx, key_style, muted));
        } else {
            lines.push(Line::from(Span::styled(
                "ⓘ Compile com a feature 'xlsx' se quiser exportar XLSX (opcional).",
                Style::default().fg(Color::Blue),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Destino: ", muted),
            Span::raw(app.export_dir.display().to_string()),
        ]));
    }

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Exportar ").border_style(muted));
    frame.render_widget(page, area);
}

fn format_action(key: &'static str, format: ExportFormat, key_style: Style, muted: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {} ", key), key_style),
        Span::styled(format!("Baixar {} ", format.label()), Style::default().fg(Color::White)),
        Span::styled(format!("{} ({})", format.file_name(), format.mime_type()), muted),
    ])
}
