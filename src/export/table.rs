use crate::constants::EXPORT_HEADERS;
use crate::models::Enrollment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub team: String,
    pub event: String,
    pub contact: String,
    pub date: String,
}

impl ExportRow {
    /// Cells in header order.
    pub fn cells(&self) -> [&str; 5] {
        [&self.name, &self.team, &self.event, &self.contact, &self.date]
    }
}

impl From<&Enrollment> for ExportRow {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            name: enrollment.participant_name.clone(),
            team: enrollment.team.clone(),
            event: enrollment.event_name.clone(),
            contact: enrollment.contact.clone(),
            date: enrollment.created_on.clone(),
        }
    }
}

/// Fixed five-column projection of the enrollment list. The headers are
/// always present, even with no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: [&'static str; 5],
    pub rows: Vec<ExportRow>,
}

impl ExportTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn to_table(enrollments: &[Enrollment]) -> ExportTable {
    ExportTable {
        headers: EXPORT_HEADERS,
        rows: enrollments.iter().map(ExportRow::from).collect(),
    }
}
