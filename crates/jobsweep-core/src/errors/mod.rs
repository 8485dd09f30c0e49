use std::error::Error;

// Re-export ConfigError so callers only need jobsweep-core for error handling
pub use jobsweep_config::ConfigError;

/// Base trait for all application errors
pub trait SweepError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type SweepResult<T> = Result<T, Box<dyn SweepError>>;

impl SweepError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::KubeconfigNotFound { .. } => "KUBECONFIG_NOT_FOUND",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::KubeconfigNotFound { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}
