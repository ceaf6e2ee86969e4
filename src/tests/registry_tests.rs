use chrono::NaiveDate;

use crate::error::SmelError;
use crate::models::Category;
use crate::store::SessionStore;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_event_ids_continue_after_highest() {
    let mut store = SessionStore::new();
    let event = store.create_event("Torneio X", "Quadra 1", "2025-08-01", Category::Popular).unwrap();
    assert_eq!(event.id, 3);

    let event = store.create_event("Torneio Y", "Quadra 2", "2025-08-02", Category::Child).unwrap();
    assert_eq!(event.id, 4);
    assert_eq!(store.list_events().len(), 4);
}

#[test]
fn test_first_event_in_empty_store_gets_id_one() {
    let mut store = SessionStore::empty();
    assert_eq!(store.next_event_id(), 1);

    let event = store.create_event("Corrida", "", "2025-09-10", Category::General).unwrap();
    assert_eq!(event.id, 1);
}

#[test]
fn test_event_fields_are_trimmed() {
    let mut store = SessionStore::new();
    let event = store.create_event("  Torneio X  ", " Quadra 1 ", "2025-08-01", Category::Popular).unwrap();

    assert_eq!(event.name, "Torneio X");
    assert_eq!(event.venue, "Quadra 1");
    assert_eq!(store.find_event(3), Some(&event));
}

#[test]
fn test_blank_event_name_is_skipped() {
    let mut store = SessionStore::new();
    let before = store.clone();

    let result = store.create_event("   ", "Quadra 1", "2025-08-01", Category::Popular);

    assert!(matches!(result, Err(SmelError::InvalidInput(_))));
    assert_eq!(store, before);
}

#[test]
fn test_duplicate_event_names_are_allowed() {
    let mut store = SessionStore::new();
    store.create_event("Torneio X", "", "2025-08-01", Category::Popular).unwrap();
    store.create_event("Torneio X", "", "2025-08-01", Category::Popular).unwrap();

    let count = store.list_events().iter().filter(|e| e.name == "Torneio X").count();
    assert_eq!(count, 2);
}

#[test]
fn test_enrollment_snapshots_event_name() {
    let mut store = SessionStore::new();
    let enrollment = store
        .create_enrollment_on("Ana", "Time A", 2, "ana@x.com", day(2025, 8, 1))
        .unwrap();

    assert_eq!(enrollment.id, 1);
    assert_eq!(enrollment.event_id, 2);
    assert_eq!(enrollment.event_name, "Circuito Escolar de Atletismo");
    assert_eq!(enrollment.created_on, "2025-08-01");

    store.reset_events();
    assert_eq!(store.list_enrollments()[0].event_name, "Circuito Escolar de Atletismo");
}

#[test]
fn test_enrollment_ids_restart_after_clear() {
    let mut store = SessionStore::new();
    store.create_enrollment_on("Ana", "", 1, "", day(2025, 8, 1)).unwrap();
    let second = store.create_enrollment_on("Bruno", "", 1, "", day(2025, 8, 1)).unwrap();
    assert_eq!(second.id, 2);

    store.clear_enrollments();

    let again = store.create_enrollment_on("Carla", "", 2, "", day(2025, 8, 2)).unwrap();
    assert_eq!(again.id, 1);
}

#[test]
fn test_enrollment_for_unknown_event_leaves_store_unchanged() {
    let mut store = SessionStore::new();
    let before = store.clone();

    let result = store.create_enrollment_on("Ana", "", 99, "", day(2025, 8, 1));

    match result {
        Err(SmelError::EventNotFound(id)) => assert_eq!(id, 99),
        other => panic!("Expected EventNotFound, got {:?}", other),
    }
    assert_eq!(store, before);
}

#[test]
fn test_blank_participant_name_is_skipped() {
    let mut store = SessionStore::new();

    let result = store.create_enrollment_on("  ", "Time A", 1, "", day(2025, 8, 1));

    assert!(result.unwrap_err().is_validation_skip());
    assert!(store.list_enrollments().is_empty());
}
