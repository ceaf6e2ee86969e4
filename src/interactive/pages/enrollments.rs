use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::export::to_table;
use crate::interactive::app::{Focus, InteractiveApp};
use crate::interactive::layout::form_and_list;
use super::form::draw_form;

pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let (form_area, list_area) = form_and_list(area, app.enrollment_form.fields.len() as u16);

    if app.store.events().is_empty() {
        let warning = Paragraph::new(Line::from(Span::styled(
            " Crie um evento primeiro.",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Nova inscrição ")
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(warning, form_area);
    } else {
        draw_form(frame, form_area, &app.enrollment_form, "Nova inscrição", app.focus == Focus::Form);
    }

    // Same projection as the export, so the listing shows what would be written
    let table = to_table(app.store.enrollments());

    let header = Row::new(table.headers.to_vec())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|r| Row::new(r.cells().iter().map(|c| c.to_string()).collect::<Vec<_>>()))
        .collect();

    let widget = Table::new(
        rows,
        [
            Constraint::Percentage(24),
            Constraint::Percentage(18),
            Constraint::Percentage(26),
            Constraint::Percentage(20),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Inscrições atuais ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(widget, list_area);
}
