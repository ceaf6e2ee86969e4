pub mod events;
pub mod utils;

pub use events::{format_category, print_capabilities, print_events};
pub use utils::{pad, truncate};
