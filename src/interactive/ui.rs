use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{Focus, InteractiveApp, Page};
use super::layout::{app_layout, panel_layout};
use super::notifications;
use super::pages::draw_page;
use super::panels::{header::draw_header, sidebar::draw_sidebar};
use super::popups::draw_popup;

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let area = frame.size();
    let layout = app_layout(area, app.notifications.len());

    draw_header(frame, layout.header, app);

    let panels = panel_layout(layout.main);
    draw_sidebar(frame, panels.sidebar, app);
    draw_page(frame, panels.page, app);

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);

    draw_popup(frame, area, app);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hints = match app.focus {
        Focus::Form => "Tab: Campo  Enter: Salvar  Esc: Menu  ^L: Limpar inscrições  ^R: Restaurar eventos",
        Focus::Menu if app.page == Page::Export => "1-5: Página  e: Baixar CSV  x: Baixar XLSX  c: Limpar  r: Restaurar  ?: Ajuda  q: Sair",
        Focus::Menu if app.page.has_form() => "1-5: Página  Enter: Formulário  c: Limpar  r: Restaurar  ?: Ajuda  q: Sair",
        Focus::Menu => "1-5: Página  c: Limpar inscrições  r: Restaurar eventos  ?: Ajuda  q: Sair",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", hints),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, area);
}
