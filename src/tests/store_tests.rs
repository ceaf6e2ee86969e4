use crate::models::Category;
use crate::store::SessionStore;

#[test]
fn test_new_store_has_seed_events() {
    let store = SessionStore::new();
    let events = store.events();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, 1);
    assert_eq!(events[0].name, "Campeonato Municipal de Futebol");
    assert_eq!(events[0].venue, "Estádio Central");
    assert_eq!(events[0].date, "2025-06-15");
    assert_eq!(events[0].category, Category::Adult);
    assert_eq!(events[1].id, 2);
    assert_eq!(events[1].name, "Circuito Escolar de Atletismo");
    assert_eq!(events[1].venue, "Parque das Águas");
    assert_eq!(events[1].date, "2025-07-20");
    assert_eq!(events[1].category, Category::School);
    assert!(store.enrollments().is_empty());
}

#[test]
fn test_reset_events_discards_created_events() {
    let mut store = SessionStore::new();
    store.create_event("Torneio X", "Quadra 1", "2025-08-01", Category::Popular).unwrap();
    store.create_event("Torneio Y", "", "2025-08-02", Category::Child).unwrap();

    store.reset_events();

    assert_eq!(store.list_events(), SessionStore::new().list_events());
}

#[test]
fn test_reset_events_keeps_enrollments() {
    let mut store = SessionStore::new();
    store.create_enrollment("Ana", "", 1, "").unwrap();

    store.reset_events();

    assert_eq!(store.enrollments().len(), 1);
}

#[test]
fn test_clear_enrollments_empties_list() {
    let mut store = SessionStore::new();
    store.create_enrollment("Ana", "Time A", 1, "ana@x.com").unwrap();
    store.create_enrollment("Bruno", "Time B", 2, "").unwrap();

    store.clear_enrollments();

    assert!(store.list_enrollments().is_empty());
    assert_eq!(store.events().len(), 2);
}

#[test]
fn test_clear_enrollments_on_empty_list() {
    let mut store = SessionStore::new();
    store.clear_enrollments();
    assert!(store.list_enrollments().is_empty());
}
