use chrono::{Local, NaiveDate};

use crate::error::{SmelError, SmelResult};
use crate::logging::{log_error, log_info};
use crate::models::Enrollment;
use crate::store::SessionStore;

impl SessionStore {
    /// Registers a participant for `event_id`, dated today.
    pub fn create_enrollment(
        &mut self,
        participant_name: &str,
        team: &str,
        event_id: u32,
        contact: &str,
    ) -> SmelResult<Enrollment> {
        let today = Local::now().date_naive();
        self.create_enrollment_on(participant_name, team, event_id, contact, today)
    }

    pub fn create_enrollment_on(
        &mut self,
        participant_name: &str,
        team: &str,
        event_id: u32,
        contact: &str,
        today: NaiveDate,
    ) -> SmelResult<Enrollment> {
        let participant_name = participant_name.trim();
        if participant_name.is_empty() {
            return Err(SmelError::InvalidInput("Participant name is empty".to_string()));
        }

        let event_name = match self.find_event(event_id) {
            Some(event) => event.name.clone(),
            None => {
                log_error(&format!("Enrollment for unknown event {}", event_id));
                return Err(SmelError::EventNotFound(event_id));
            }
        };

        // count + 1, not max + 1: enrollments are only ever cleared in bulk
        let id = self.enrollments.len() as u32 + 1;

        let enrollment = Enrollment {
            id,
            participant_name: participant_name.to_string(),
            team: team.trim().to_string(),
            event_id,
            event_name,
            contact: contact.trim().to_string(),
            created_on: today.format("%Y-%m-%d").to_string(),
        };

        self.enrollments.push(enrollment.clone());
        log_info(&format!(
            "Created enrollment {} for '{}' in '{}'",
            enrollment.id, enrollment.participant_name, enrollment.event_name
        ));

        Ok(enrollment)
    }

    pub fn list_enrollments(&self) -> &[Enrollment] {
        self.enrollments()
    }
}
