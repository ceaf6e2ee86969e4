pub mod capabilities;
pub mod config;
pub mod events;

pub use capabilities::handle_capabilities;
pub use config::handle_config;
pub use events::handle_events;
