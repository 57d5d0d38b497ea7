use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Environment variable {field} is set but is not valid UTF-8")]
    NotUnicodeError { field: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read env file {path}: {source}")]
    EnvFileError {
        path: String,
        source: dotenvy::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Server probe failed: {0}")]
    ProbeError(#[from] reqwest::Error),

    #[error("Server at {url} answered with HTTP {status}")]
    ProbeStatusError { url: String, status: u16 },

    #[error("Public configuration already initialized with server URL {existing:?}")]
    AlreadyInitialized { existing: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Environment,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 可重試
    Medium,
    /// 配置錯誤，必須修正後才能啟動
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EnvError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EnvError::MissingConfigError { .. } | EnvError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EnvError::NotUnicodeError { .. } | EnvError::EnvFileError { .. } => {
                ErrorCategory::Environment
            }
            EnvError::ProbeError(_) | EnvError::ProbeStatusError { .. } => ErrorCategory::Network,
            EnvError::SerializationError(_) | EnvError::AlreadyInitialized { .. } => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Environment => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EnvError::MissingConfigError { field } => format!(
                "Set {} in the deployment environment or in a .env file before starting the client",
                field
            ),
            EnvError::NotUnicodeError { field } => {
                format!("Re-export {} using only UTF-8 characters", field)
            }
            EnvError::InvalidConfigValueError { field, .. } => {
                format!("Check the value of {}", field)
            }
            EnvError::EnvFileError { path, .. } => format!(
                "Make sure {} exists and uses KEY=value lines",
                path
            ),
            EnvError::ProbeError(_) | EnvError::ProbeStatusError { .. } => {
                "Check that the server is running and reachable, then retry".to_string()
            }
            EnvError::SerializationError(_) => {
                "Retry; if the problem persists, report it with the log output".to_string()
            }
            EnvError::AlreadyInitialized { .. } => {
                "Initialize the public configuration exactly once at startup".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EnvError::MissingConfigError { field } => {
                format!("The client cannot start: {} is not defined", field)
            }
            EnvError::ProbeStatusError { url, status } => {
                format!("The server at {} is not healthy (HTTP {})", url, status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_fatal_configuration_error() {
        let err = EnvError::MissingConfigError {
            field: "PUBLIC_SERVER_URL".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.severity().exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Missing required configuration: PUBLIC_SERVER_URL"
        );
        assert!(err.recovery_suggestion().contains("PUBLIC_SERVER_URL"));
        assert!(err.user_friendly_message().contains("not defined"));
    }

    #[test]
    fn test_probe_status_is_retryable() {
        let err = EnvError::ProbeStatusError {
            url: "http://localhost:3000".to_string(),
            status: 503,
        };

        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity().exit_code(), 2);
        assert!(err.user_friendly_message().contains("503"));
    }

    #[test]
    fn test_already_initialized_is_critical() {
        let err = EnvError::AlreadyInitialized {
            existing: "https://a.example".to_string(),
        };

        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }
}
