use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use crate::interactive::app::{Focus, InteractiveApp};
use crate::interactive::layout::form_and_list;
use super::form::draw_form;

pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let (form_area, list_area) = form_and_list(area, app.event_form.fields.len() as u16);

    draw_form(frame, form_area, &app.event_form, "Criar evento", app.focus == Focus::Form);

    let header = Row::new(vec!["Id", "Nome", "Local", "Data", "Categoria"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .store
        .events()
        .iter()
        .map(|e| {
            Row::new(vec![
                e.id.to_string(),
                e.name.clone(),
                e.venue.clone(),
                e.date.clone(),
                e.category.label().to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Length(11),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Eventos atuais ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(table, list_area);
}
