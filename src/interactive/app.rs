use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use crossterm::event::KeyEvent;

use crate::constants::NOTIFICATION_TTL_SECS;
use crate::error::SmelError;
use crate::export::{ExportCapabilities, ExportFormat, to_table, write_export};
use crate::interactive::form::{Form, FormField};
use crate::interactive::keys::{Action, map_key};
use crate::logging::{log_debug, log_error, log_info};
use crate::models::Category;
use crate::store::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Events,
    Enrollments,
    Export,
    About,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Events,
        Page::Enrollments,
        Page::Export,
        Page::About,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Início",
            Page::Events => "Eventos",
            Page::Enrollments => "Inscrições",
            Page::Export => "Exportar",
            Page::About => "Sobre",
        }
    }

    pub fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    pub fn has_form(&self) -> bool {
        matches!(self, Page::Events | Page::Enrollments)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Menu,
    Form,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    /// Every kind expires after `ttl`; `Esc` clears them sooner.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

// Field positions
pub const EVENT_NAME: usize = 0;
pub const EVENT_VENUE: usize = 1;
pub const EVENT_DATE: usize = 2;
pub const EVENT_CATEGORY: usize = 3;

pub const ENROLL_NAME: usize = 0;
pub const ENROLL_TEAM: usize = 1;
pub const ENROLL_EVENT: usize = 2;
pub const ENROLL_CONTACT: usize = 3;

pub struct InteractiveApp {
    pub store: SessionStore,
    pub page: Page,
    pub focus: Focus,
    pub popup: Option<Popup>,
    pub event_form: Form,
    pub enrollment_form: Form,
    pub notifications: Vec<Notification>,
    pub capabilities: ExportCapabilities,
    pub export_dir: PathBuf,
    pub should_quit: bool,
}

impl InteractiveApp {
    pub fn new(store: SessionStore, capabilities: ExportCapabilities, export_dir: PathBuf) -> Self {
        let mut app = Self {
            store,
            page: Page::Home,
            focus: Focus::Menu,
            popup: None,
            event_form: new_event_form(),
            enrollment_form: new_enrollment_form(),
            notifications: Vec::new(),
            capabilities,
            export_dir,
            should_quit: false,
        };
        app.sync_event_choices();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key, &self.focus, &self.popup);
        self.handle_action(action);
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::GoTo(page) => self.select_page(page),
            Action::NextPage => self.select_page(self.page.next()),
            Action::PrevPage => self.select_page(self.page.prev()),

            Action::FocusForm => {
                if self.form_available() {
                    self.focus = Focus::Form;
                }
            }
            Action::LeaveForm => self.focus = Focus::Menu,

            Action::ClearEnrollments => {
                self.store.clear_enrollments();
                log_info("Enrollments cleared");
                self.notify(NotificationKind::Info, "Inscrições apagadas (sessão atual).");
            }
            Action::RestoreEvents => {
                self.store.reset_events();
                self.sync_event_choices();
                log_info("Default events restored");
                self.notify(NotificationKind::Success, "Eventos restaurados!");
            }

            Action::ExportCsv if self.page == Page::Export => self.export(ExportFormat::Csv),
            Action::ExportXlsx if self.page == Page::Export => self.export(ExportFormat::Xlsx),
            Action::ExportCsv | Action::ExportXlsx => {}

            Action::NextField => self.with_active_form(|f| f.next_field()),
            Action::PrevField => self.with_active_form(|f| f.prev_field()),
            Action::TypeChar(c) => self.with_active_form(|f| f.type_char(c)),
            Action::Backspace => self.with_active_form(|f| f.backspace()),
            Action::Delete => self.with_active_form(|f| f.delete()),
            Action::Left => self.with_active_form(|f| f.left()),
            Action::Right => self.with_active_form(|f| f.right()),
            Action::CursorHome => self.with_active_form(|f| f.cursor_home()),
            Action::CursorEnd => self.with_active_form(|f| f.cursor_end()),
            Action::Submit => match self.page {
                Page::Events => self.submit_event_form(),
                Page::Enrollments => self.submit_enrollment_form(),
                _ => {}
            },

            Action::Help => self.popup = Some(Popup::Help),
            Action::Cancel => self.popup = None,
            Action::Quit => self.should_quit = true,
            Action::DismissNotification => self.notifications.clear(),

            Action::None => {}
        }
    }

    /// Drops notifications that have been on screen long enough.
    pub fn tick(&mut self) {
        self.expire_notifications(Duration::from_secs(NOTIFICATION_TTL_SECS));
    }

    pub fn expire_notifications(&mut self, ttl: Duration) {
        self.notifications.retain(|n| !n.is_expired(ttl));
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        });
    }

    /// The enrollment form only exists while there is an event to pick.
    pub fn form_available(&self) -> bool {
        match self.page {
            Page::Events => true,
            Page::Enrollments => !self.store.events().is_empty(),
            _ => false,
        }
    }

    fn select_page(&mut self, page: Page) {
        if self.page != page {
            log_debug(&format!("Page {:?} -> {:?}", self.page, page));
        }
        self.page = page;
        self.focus = Focus::Menu;
    }

    fn with_active_form<F: FnOnce(&mut Form)>(&mut self, f: F) {
        if self.focus != Focus::Form {
            return;
        }
        match self.page {
            Page::Events => f(&mut self.event_form),
            Page::Enrollments => f(&mut self.enrollment_form),
            _ => {}
        }
    }

    fn sync_event_choices(&mut self) {
        let options = self.store.events().iter().map(|e| e.name.clone()).collect();
        self.enrollment_form.set_options(ENROLL_EVENT, options);
    }

    fn submit_event_form(&mut self) {
        let form = &self.event_form;
        let name = form.text(EVENT_NAME).trim().to_string();
        if name.is_empty() {
            return;
        }

        let raw_date = form.text(EVENT_DATE).trim().to_string();
        let date = match NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                self.notify(
                    NotificationKind::Error,
                    format!("Data inválida '{}', use AAAA-MM-DD", raw_date),
                );
                return;
            }
        };

        let category = form
            .selected(EVENT_CATEGORY)
            .and_then(|i| Category::ALL.get(i).copied())
            .unwrap_or(Category::General);
        let venue = form.text(EVENT_VENUE).to_string();

        match self.store.create_event(&name, &venue, &date.format("%Y-%m-%d").to_string(), category) {
            Ok(event) => {
                self.notify(
                    NotificationKind::Success,
                    format!("Evento '{}' criado com sucesso!", event.name),
                );
                self.event_form = new_event_form();
                self.sync_event_choices();
            }
            Err(e) => self.report(e),
        }
    }

    fn submit_enrollment_form(&mut self) {
        let form = &self.enrollment_form;
        let name = form.text(ENROLL_NAME).trim().to_string();
        if name.is_empty() {
            return;
        }

        let Some(event_id) = form
            .selected(ENROLL_EVENT)
            .and_then(|i| self.store.events().get(i))
            .map(|e| e.id)
        else {
            return;
        };

        let team = form.text(ENROLL_TEAM).to_string();
        let contact = form.text(ENROLL_CONTACT).to_string();

        match self.store.create_enrollment(&name, &team, event_id, &contact) {
            Ok(enrollment) => {
                self.notify(
                    NotificationKind::Success,
                    format!("Inscrição de {} adicionada com sucesso!", enrollment.participant_name),
                );
                let selected = self.enrollment_form.selected(ENROLL_EVENT);
                self.enrollment_form = new_enrollment_form();
                self.sync_event_choices();
                if let Some(index) = selected {
                    // keep the chosen event for the next participant
                    self.enrollment_form.select_option(ENROLL_EVENT, index);
                }
            }
            Err(e) => self.report(e),
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let table = to_table(self.store.enrollments());
        if table.is_empty() {
            self.notify(NotificationKind::Info, "Nenhuma inscrição para exportar.");
            return;
        }

        if format == ExportFormat::Xlsx && !self.capabilities.spreadsheet {
            self.notify(
                NotificationKind::Info,
                "Compile com a feature 'xlsx' se quiser exportar XLSX (opcional).",
            );
            return;
        }

        match write_export(&table, format, &self.export_dir) {
            Ok(path) => self.notify(
                NotificationKind::Success,
                format!("{} salvo em {}", format.label(), path.display()),
            ),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, error: SmelError) {
        match error {
            e if e.is_validation_skip() => {}
            SmelError::CapabilityUnavailable(msg) => self.notify(NotificationKind::Info, msg),
            SmelError::EventNotFound(id) => {
                self.notify(NotificationKind::Error, format!("Evento {} não encontrado.", id))
            }
            e => {
                log_error(&e.to_string());
                self.notify(NotificationKind::Error, e.to_string());
            }
        }
    }
}

fn new_event_form() -> Form {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    Form::new(vec![
        FormField::text("Nome do evento"),
        FormField::text("Local / Ginásio"),
        FormField::text_with("Data", today),
        FormField::choice(
            "Categoria",
            Category::ALL.iter().map(|c| c.label().to_string()).collect(),
        ),
    ])
}

fn new_enrollment_form() -> Form {
    Form::new(vec![
        FormField::text("Nome do participante"),
        FormField::text("Equipe / Escola"),
        FormField::choice("Evento", Vec::new()),
        FormField::text("Contato (telefone ou e-mail)"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CSV_FILE_NAME;

    fn app_in(dir: &std::path::Path) -> InteractiveApp {
        InteractiveApp::new(SessionStore::new(), ExportCapabilities::csv_only(), dir.to_path_buf())
    }

    fn type_text(app: &mut InteractiveApp, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::TypeChar(c));
        }
    }

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(Page::About.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::About);
        assert_eq!(Page::Events.next(), Page::Enrollments);
    }

    #[test]
    fn test_event_form_submission_creates_event() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        app.handle_action(Action::GoTo(Page::Events));
        app.handle_action(Action::FocusForm);
        type_text(&mut app, "  Torneio X ");
        app.handle_action(Action::NextField);
        type_text(&mut app, "Quadra 1");
        app.handle_action(Action::NextField);
        app.handle_action(Action::CursorEnd);
        for _ in 0..10 {
            app.handle_action(Action::Backspace);
        }
        type_text(&mut app, "2025-08-01");
        app.handle_action(Action::NextField);
        app.handle_action(Action::Left);
        app.handle_action(Action::Submit);

        let created = app.store.events().last().unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(created.name, "Torneio X");
        assert_eq!(created.venue, "Quadra 1");
        assert_eq!(created.date, "2025-08-01");
        assert_eq!(created.category, Category::Popular);
        assert_eq!(app.notifications.last().unwrap().kind, NotificationKind::Success);
        assert_eq!(app.event_form.text(EVENT_NAME), "");
    }

    #[test]
    fn test_blank_event_name_is_silently_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        app.handle_action(Action::GoTo(Page::Events));
        app.handle_action(Action::FocusForm);
        type_text(&mut app, "   ");
        app.handle_action(Action::Submit);

        assert_eq!(app.store.events().len(), 2);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_invalid_date_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        app.handle_action(Action::GoTo(Page::Events));
        app.handle_action(Action::FocusForm);
        type_text(&mut app, "Corrida");
        app.handle_action(Action::NextField);
        app.handle_action(Action::NextField);
        type_text(&mut app, "x");
        app.handle_action(Action::Submit);

        assert_eq!(app.store.events().len(), 2);
        assert_eq!(app.notifications.last().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn test_enrollment_form_uses_selected_event() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        app.handle_action(Action::GoTo(Page::Enrollments));
        app.handle_action(Action::FocusForm);
        type_text(&mut app, "Ana");
        app.handle_action(Action::NextField);
        type_text(&mut app, "Time A");
        app.handle_action(Action::NextField);
        app.handle_action(Action::Right);
        app.handle_action(Action::Submit);

        let enrollment = &app.store.enrollments()[0];
        assert_eq!(enrollment.id, 1);
        assert_eq!(enrollment.event_id, 2);
        assert_eq!(enrollment.event_name, "Circuito Escolar de Atletismo");
        assert_eq!(app.enrollment_form.selected(ENROLL_EVENT), Some(1));
    }

    #[test]
    fn test_enrollment_form_hidden_without_events() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = InteractiveApp::new(
            SessionStore::empty(),
            ExportCapabilities::csv_only(),
            dir.path().to_path_buf(),
        );

        app.handle_action(Action::GoTo(Page::Enrollments));
        app.handle_action(Action::FocusForm);
        assert_eq!(app.focus, Focus::Menu);

        app.handle_action(Action::RestoreEvents);
        app.handle_action(Action::FocusForm);
        assert_eq!(app.focus, Focus::Form);
    }

    #[test]
    fn test_sidebar_actions_from_any_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.store.create_event("Extra", "", "2025-01-01", Category::General).unwrap();
        app.store.create_enrollment("Ana", "", 1, "").unwrap();

        app.handle_action(Action::GoTo(Page::About));
        app.handle_action(Action::ClearEnrollments);
        app.handle_action(Action::RestoreEvents);

        assert!(app.store.enrollments().is_empty());
        assert_eq!(app.store.events().len(), 2);
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn test_export_without_enrollments_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        app.handle_action(Action::GoTo(Page::Export));
        app.handle_action(Action::ExportCsv);

        assert!(!dir.path().join(CSV_FILE_NAME).exists());
        assert_eq!(app.notifications[0].message, "Nenhuma inscrição para exportar.");
    }

    #[test]
    fn test_export_csv_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.store.create_enrollment("Ana", "Time A", 1, "ana@x.com").unwrap();

        app.handle_action(Action::GoTo(Page::Export));
        app.handle_action(Action::ExportCsv);

        let written = std::fs::read_to_string(dir.path().join(CSV_FILE_NAME)).unwrap();
        assert!(written.starts_with("Nome,Equipe,Evento,Contato,Data\n"));
        assert!(written.contains("Ana,Time A,Campeonato Municipal de Futebol,ana@x.com,"));
    }

    #[test]
    fn test_xlsx_without_capability_is_informational() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.store.create_enrollment("Ana", "", 1, "").unwrap();

        app.handle_action(Action::GoTo(Page::Export));
        app.handle_action(Action::ExportXlsx);

        assert_eq!(app.notifications[0].kind, NotificationKind::Info);
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_fresh_notifications_survive_tick() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.notify(NotificationKind::Error, "boom");
        app.notify(NotificationKind::Info, "old");

        app.tick();

        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn test_errors_expire_like_other_notifications() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.notify(NotificationKind::Error, "boom");
        app.notify(NotificationKind::Success, "ok");
        app.notify(NotificationKind::Info, "old");

        app.expire_notifications(Duration::ZERO);

        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_escape_dismisses_notifications() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.notify(NotificationKind::Error, "boom");

        app.handle_action(Action::DismissNotification);

        assert!(app.notifications.is_empty());
    }
}
