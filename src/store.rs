use crate::models::{Enrollment, Event, default_events};

/// Session-scoped state. Owned by whoever drives the session and handed to
/// the registries by `&mut`; nothing here outlives the process.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    pub(crate) events: Vec<Event>,
    pub(crate) enrollments: Vec<Enrollment>,
}

impl SessionStore {
    /// Fresh session with the two default events and no enrollments.
    pub fn new() -> Self {
        Self {
            events: default_events(),
            enrollments: Vec::new(),
        }
    }

    /// A session without any events, as if the user removed them all.
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            enrollments: Vec::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn reset_events(&mut self) {
        self.events = default_events();
    }

    pub fn clear_enrollments(&mut self) {
        self.enrollments.clear();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
