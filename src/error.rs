use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Event {0} not found")]
    EventNotFound(u32),

    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl SmelError {
    /// Errors the shell answers by doing nothing instead of showing a notice.
    pub fn is_validation_skip(&self) -> bool {
        matches!(self, SmelError::InvalidInput(_))
    }
}

#[cfg(feature = "xlsx")]
impl From<rust_xlsxwriter::XlsxError> for SmelError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        SmelError::ExportError(err.to_string())
    }
}

pub type SmelResult<T> = Result<T, SmelError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> SmelResult<T>;
    fn with_context<F>(self, f: F) -> SmelResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> SmelResult<T> {
        self.map_err(|e| SmelError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> SmelResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SmelError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> SmelResult<T> {
        self.ok_or_else(|| SmelError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> SmelResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| SmelError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! smel_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::SmelError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::SmelError::$error_type(format!($fmt, $($arg)*))
    };
}
