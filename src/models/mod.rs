pub mod enrollment;
pub mod event;

// Re-export commonly used types
pub use enrollment::Enrollment;
pub use event::{Category, Event, default_events};
