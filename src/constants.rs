pub const APP_TITLE: &str = "SMEL Conectada — Protótipo Simples";
pub const SUBTITLE: &str = "Portal acadêmico • Baseado no PDTI da Secretaria de Esporte";
pub const ABOUT_CAPTION: &str = "SMEL Conectada — Trabalho acadêmico 2025";

pub const CONFIG_FILE: &str = ".smel-conectada-config.json";
pub const EXPORT_DIR_ENV: &str = "SMEL_EXPORT_DIR";
pub const APP_DIR_NAME: &str = "smel-conectada";

// Export files
pub const CSV_FILE_NAME: &str = "inscricoes_smel.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const XLSX_FILE_NAME: &str = "inscricoes_smel.xlsx";
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLSX_SHEET_NAME: &str = "Inscrições";

pub const EXPORT_HEADERS: [&str; 5] = ["Nome", "Equipe", "Evento", "Contato", "Data"];

/// Seconds a success or info notification stays on screen.
pub const NOTIFICATION_TTL_SECS: u64 = 5;
