use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::form::{FieldKind, Form};

/// Draw a form as one row per field. The active field is marked and, when
/// the form has focus, shows its cursor.
pub fn draw_form(frame: &mut Frame, area: Rect, form: &Form, title: &str, focused: bool) {
    let border_color = if focused { Color::Green } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let label_width = form.fields.iter().map(|f| f.label.chars().count()).max().unwrap_or(0) + 2;
    let max_value_width = (inner.width as usize).saturating_sub(label_width + 4);

    for (i, field) in form.fields.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height.saturating_sub(1) {
            break;
        }

        let is_active = focused && i == form.active_field;

        let label_style = if is_active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if is_active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let indicator = if is_active { "\u{25b6} " } else { "  " };
        let mut spans = vec![
            Span::styled(indicator, label_style),
            Span::styled(format!("{:<width$}", field.label, width = label_width), label_style),
        ];

        match &field.kind {
            FieldKind::Text(input) if is_active => {
                let (before, current, rest) = input.split_at_cursor();
                spans.push(Span::styled(before.to_string(), value_style));
                spans.push(Span::styled(
                    current.unwrap_or(' ').to_string(),
                    Style::default().fg(Color::Rgb(0, 0, 0)).bg(Color::White),
                ));
                spans.push(Span::styled(rest.to_string(), value_style));
            }
            FieldKind::Text(input) => {
                spans.push(Span::styled(truncate(&input.content, max_value_width), value_style));
            }
            FieldKind::Choice { options, .. } => {
                let value = if options.is_empty() {
                    "-".to_string()
                } else {
                    format!("\u{25c0} {} \u{25b6}", truncate(field.display_value(), max_value_width.saturating_sub(4)))
                };
                spans.push(Span::styled(value, value_style));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), Rect::new(inner.x, y, inner.width, 1));
    }

    let hints = if focused {
        "Tab: Próximo campo  ←/→: Opção  Enter: Salvar  Esc: Voltar"
    } else {
        "Enter: Preencher formulário"
    };
    let hints_area = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))),
        hints_area,
    );
}
