use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Sheet export request returned HTTP {status}")]
    FetchError { status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Sheet export has no header row")]
    MissingHeaderError,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parsing,
    Storage,
    Configuration,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::FetchError { .. } | EtlError::ApiError(_) => ErrorCategory::Network,
            EtlError::CsvError(_)
            | EtlError::MissingHeaderError
            | EtlError::SerializationError(_) => ErrorCategory::Parsing,
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::FetchError { status } => {
                format!("Error fetching sheet: HTTP {}", status)
            }
            EtlError::ApiError(e) => format!("Could not reach the sheet export: {}", e),
            EtlError::CsvError(e) => format!("The sheet export is not valid CSV: {}", e),
            EtlError::MissingHeaderError => "The sheet export is empty".to_string(),
            EtlError::IoError(e) => format!("Could not write the snapshot: {}", e),
            EtlError::SerializationError(e) => format!("Could not encode the snapshot: {}", e),
            EtlError::ConfigError { message } => format!("Invalid configuration: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::FetchError { status: 401 | 403 } => {
                "Make sure the sheet is published or shared as 'anyone with the link'"
            }
            EtlError::FetchError { status: 404 } => "Check that the sheet id is correct",
            EtlError::FetchError { .. } | EtlError::ApiError(_) => {
                "Check your network connection and try again"
            }
            EtlError::CsvError(_) | EtlError::MissingHeaderError => {
                "Make sure the first row of the sheet holds the column headers"
            }
            EtlError::IoError(_) => "Check permissions and free space for the output directory",
            EtlError::SerializationError(_) => "Re-run the export; the data could not be encoded",
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
