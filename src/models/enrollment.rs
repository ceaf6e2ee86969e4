use serde::{Deserialize, Serialize};

/// A participant's registration. `event_name` is captured when the
/// enrollment is created and never follows later changes to the event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: u32,
    pub participant_name: String,
    pub team: String,
    pub event_id: u32,
    pub event_name: String,
    pub contact: String,
    /// ISO-8601 `YYYY-MM-DD`.
    pub created_on: String,
}
