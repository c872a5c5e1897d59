use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Failed to download {url}: HTTP {status}")]
    FetchError { url: String, status: u16 },

    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse {path} as JSON: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected document structure at {location}: {message}")]
    StructureError { location: String, message: String },

    #[error("State file error: {0}")]
    StateError(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    System,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl HarvestError {
    pub fn structure(location: &str, message: impl Into<String>) -> Self {
        HarvestError::StructureError {
            location: location.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HarvestError::FetchError { .. } | HarvestError::ApiError(_) => ErrorCategory::Network,
            HarvestError::ParseError { .. }
            | HarvestError::StructureError { .. }
            | HarvestError::StateError(_)
            | HarvestError::SerializationError(_) => ErrorCategory::Data,
            HarvestError::IoError(_) => ErrorCategory::System,
            HarvestError::ConfigError { .. }
            | HarvestError::ConfigValidationError { .. }
            | HarvestError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HarvestError::FetchError { url, .. } => {
                format!("Check that {} is reachable and try again", url)
            }
            HarvestError::ApiError(_) => {
                "Check your network connection and the source URL".to_string()
            }
            HarvestError::ParseError { path, .. } => {
                format!(
                    "Delete the cached document ({}) so it is downloaded again, or run with --refresh always",
                    path
                )
            }
            HarvestError::StructureError { .. } => {
                "The upstream document layout may have changed; refresh the cache with --refresh always"
                    .to_string()
            }
            HarvestError::StateError(_) => {
                "Fix or remove the state file; it must be a YAML mapping".to_string()
            }
            HarvestError::SerializationError(_) => {
                "Fix or remove the console catalog file".to_string()
            }
            HarvestError::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            HarvestError::ConfigError { .. }
            | HarvestError::ConfigValidationError { .. }
            | HarvestError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HarvestError::FetchError { status, .. } => {
                format!("Failed to download the JSON file (HTTP {}).", status)
            }
            HarvestError::ApiError(_) => "Failed to download the JSON file.".to_string(),
            HarvestError::ParseError { path, .. } => {
                format!("The cached document {} is not valid JSON.", path)
            }
            HarvestError::StructureError { location, .. } => {
                format!("The endpoints document has no {} entry.", location)
            }
            HarvestError::StateError(e) => format!("Could not read or write the state file: {}", e),
            HarvestError::SerializationError(e) => {
                format!("Could not read or write the console catalog: {}", e)
            }
            HarvestError::IoError(e) => format!("File system error: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
