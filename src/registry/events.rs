use crate::error::{SmelError, SmelResult};
use crate::logging::log_info;
use crate::models::{Category, Event};
use crate::store::SessionStore;

impl SessionStore {
    /// `max(id) + 1`, or `1` when there are no events.
    pub fn next_event_id(&self) -> u32 {
        self.events.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
    }

    /// Appends a new event. The date and category are taken as given; only
    /// the name is checked.
    pub fn create_event(
        &mut self,
        name: &str,
        venue: &str,
        iso_date: &str,
        category: Category,
    ) -> SmelResult<Event> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SmelError::InvalidInput("Event name is empty".to_string()));
        }

        let event = Event::new(self.next_event_id(), name, venue.trim(), iso_date, category);
        self.events.push(event.clone());
        log_info(&format!("Created event {} '{}'", event.id, event.name));

        Ok(event)
    }

    pub fn list_events(&self) -> &[Event] {
        self.events()
    }

    pub fn find_event(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}
