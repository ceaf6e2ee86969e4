use std::path::PathBuf;

use crate::config::{get_export_dir, load_config, save_config};
use crate::error::{SmelError, SmelResult};
use crate::export::ExportCapabilities;

/// Settings shared by the subcommands and the interactive session.
pub struct CliContext {
    export_dir: Option<PathBuf>,
    capabilities: ExportCapabilities,
}

impl CliContext {
    /// Create a context that resolves everything lazily
    pub fn new() -> Self {
        Self {
            export_dir: None,
            capabilities: ExportCapabilities::detect(),
        }
    }

    /// Load context from the environment and saved configuration. A missing
    /// or broken config file falls back to defaults, so this cannot fail.
    pub fn load() -> Self {
        Self {
            export_dir: Some(get_export_dir()),
            capabilities: ExportCapabilities::detect(),
        }
    }

    /// Where export files are written
    pub fn export_dir(&mut self) -> &PathBuf {
        self.export_dir.get_or_insert_with(get_export_dir)
    }

    pub fn capabilities(&self) -> ExportCapabilities {
        self.capabilities
    }

    /// Set and save a new export directory
    pub fn set_export_dir(&mut self, dir: PathBuf) -> SmelResult<()> {
        let dir_str = dir
            .to_str()
            .ok_or_else(|| SmelError::ConfigError(format!("Path is not valid UTF-8: {}", dir.display())))?
            .to_string();

        let mut config = load_config();
        config.export_dir = Some(dir_str);
        save_config(&config)?;
        self.export_dir = Some(dir);
        Ok(())
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for contexts that skip the config file, used by tests and by
/// callers that already know their settings
pub struct CliContextBuilder {
    export_dir: Option<PathBuf>,
    capabilities: Option<ExportCapabilities>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            export_dir: None,
            capabilities: None,
        }
    }

    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = Some(dir);
        self
    }

    pub fn with_capabilities(mut self, capabilities: ExportCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    pub fn build(self) -> CliContext {
        let mut context = if self.export_dir.is_some() {
            CliContext::new()
        } else {
            CliContext::load()
        };

        if let Some(dir) = self.export_dir {
            context.export_dir = Some(dir);
        }
        if let Some(capabilities) = self.capabilities {
            context.capabilities = capabilities;
        }

        context
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
