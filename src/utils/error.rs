use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClauseError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog file error: {0}")]
    CatalogFileError(#[from] toml::de::Error),

    #[error("Catalog error in category '{category}': {reason}")]
    CatalogError { category: String, reason: String },

    #[error("Document error: {message}")]
    DocumentError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClauseError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClauseError::CatalogError { .. }
            | ClauseError::CatalogFileError(_)
            | ClauseError::ConfigError { .. }
            | ClauseError::InvalidConfigValueError { .. }
            | ClauseError::MissingConfigError { .. } => ErrorSeverity::Critical,
            ClauseError::DocumentError { .. } => ErrorSeverity::High,
            ClauseError::IoError(_) => ErrorSeverity::High,
            ClauseError::CsvError(_) | ClauseError::SerializationError(_) => ErrorSeverity::Medium,
            ClauseError::ProcessingError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClauseError::CatalogError { category, .. } => {
                format!("The pattern catalog entry '{}' is invalid", category)
            }
            ClauseError::CatalogFileError(_) => {
                "The catalog file could not be parsed".to_string()
            }
            ClauseError::DocumentError { .. } => {
                "We could not read this document".to_string()
            }
            ClauseError::IoError(_) => "A file could not be read or written".to_string(),
            ClauseError::CsvError(_) => "The results could not be serialized to CSV".to_string(),
            ClauseError::SerializationError(_) => {
                "The results could not be serialized to JSON".to_string()
            }
            ClauseError::ConfigError { message } => message.clone(),
            ClauseError::InvalidConfigValueError { field, .. }
            | ClauseError::MissingConfigError { field } => {
                format!("The configuration field '{}' is not usable", field)
            }
            ClauseError::ProcessingError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ClauseError::CatalogError { category, reason } => format!(
                "Fix the phrases for category '{}' in the catalog file: {}",
                category, reason
            ),
            ClauseError::CatalogFileError(_) => {
                "Check the catalog TOML file for syntax errors".to_string()
            }
            ClauseError::DocumentError { .. } => {
                "Make sure the input is a plain-text extraction of the document".to_string()
            }
            ClauseError::IoError(_) => {
                "Check that the paths exist and are readable/writable".to_string()
            }
            ClauseError::InvalidConfigValueError { reason, .. } => reason.clone(),
            ClauseError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            _ => "Re-run with --verbose for details".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClauseError>;
