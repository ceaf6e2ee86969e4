/// Export formats this build can produce, detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportCapabilities {
    pub csv: bool,
    pub spreadsheet: bool,
}

impl ExportCapabilities {
    pub fn detect() -> Self {
        Self {
            csv: true,
            spreadsheet: cfg!(feature = "xlsx"),
        }
    }

    pub fn csv_only() -> Self {
        Self {
            csv: true,
            spreadsheet: false,
        }
    }
}

impl Default for ExportCapabilities {
    fn default() -> Self {
        Self::detect()
    }
}
