// Module declarations
pub mod cli_context;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod registry;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use config::{Config, get_export_dir, load_config, save_config};
pub use error::{SmelError, SmelResult};
pub use export::{ExportCapabilities, ExportFormat, ExportTable, to_csv_bytes, to_spreadsheet_bytes, to_table};
pub use models::*;
pub use store::SessionStore;
