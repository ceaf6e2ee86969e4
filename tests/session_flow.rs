use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use smel_conectada::export::ExportCapabilities;
use smel_conectada::interactive::app::{Focus, Page};
use smel_conectada::interactive::{ui, InteractiveApp};
use smel_conectada::{to_csv_bytes, to_table, Category, SessionStore};

fn press(app: &mut InteractiveApp, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut InteractiveApp, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen_text(app: &InteractiveApp) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_create_event_enroll_and_export() {
    let mut store = SessionStore::new();

    let event = store.create_event("Torneio X", "Quadra 1", "2025-08-01", Category::Popular).unwrap();
    assert_eq!(event.id, 3);

    let enrollment = store.create_enrollment("Ana", "Time A", event.id, "ana@x.com").unwrap();
    assert_eq!(enrollment.id, 1);
    assert_eq!(enrollment.event_name, "Torneio X");

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let csv = String::from_utf8(to_csv_bytes(&to_table(store.list_enrollments())).unwrap()).unwrap();
    assert_eq!(
        csv,
        format!("Nome,Equipe,Evento,Contato,Data\nAna,Time A,Torneio X,ana@x.com,{}\n", today)
    );
}

#[test]
fn test_keyboard_session_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = InteractiveApp::new(
        SessionStore::new(),
        ExportCapabilities::csv_only(),
        dir.path().to_path_buf(),
    );

    // new event, prefilled date and first category
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.focus, Focus::Form);
    type_text(&mut app, "Torneio X");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.store.list_events().len(), 3);
    assert_eq!(app.store.list_events()[2].category, Category::General);

    // enroll Ana in the third event
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.page, Page::Enrollments);
    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Ana");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);

    let enrollments = app.store.list_enrollments();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0].participant_name, "Ana");
    assert_eq!(enrollments[0].event_name, "Torneio X");

    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('e'));

    let written = std::fs::read_to_string(dir.path().join("inscricoes_smel.csv")).unwrap();
    assert!(written.starts_with("Nome,Equipe,Evento,Contato,Data\n"));
    assert!(written.contains("Ana,,Torneio X,,"));
}

#[test]
fn test_without_events_enrollment_page_asks_for_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = InteractiveApp::new(
        SessionStore::empty(),
        ExportCapabilities::csv_only(),
        dir.path().to_path_buf(),
    );

    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('n'));

    assert_eq!(app.focus, Focus::Menu);
    assert!(screen_text(&app).contains("Crie um evento primeiro."));
}

#[test]
fn test_restore_events_from_inside_a_form() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = InteractiveApp::new(
        SessionStore::new(),
        ExportCapabilities::csv_only(),
        dir.path().to_path_buf(),
    );
    app.store.create_event("Torneio X", "", "2025-08-01", Category::Popular).unwrap();

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('n'));
    app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));

    assert_eq!(app.store.list_events(), SessionStore::new().list_events());
}
