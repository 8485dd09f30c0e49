use crate::errors::SweepError;

/// Resource kind named in list/delete failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Job,
    Pod,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Job => f.write_str("job"),
            ResourceKind::Pod => f.write_str("pod"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("Failed to load cluster credentials: {message}")]
    CredentialLoad { message: String },

    #[error("Failed to build cluster client: {message}")]
    ClientBuild { message: String },

    #[error("Failed to list {kind}s: {message}")]
    ListFailed {
        kind: ResourceKind,
        message: String,
    },

    #[error("Failed to look up job '{name}' in namespace '{namespace}': {message}")]
    LookupFailed {
        name: String,
        namespace: String,
        message: String,
    },

    #[error("Failed to delete {kind} '{name}': {message}")]
    DeleteFailed {
        kind: ResourceKind,
        name: String,
        message: String,
    },
}

impl SweepError for ClusterError {
    fn error_code(&self) -> &'static str {
        match self {
            ClusterError::CredentialLoad { .. } => "CREDENTIAL_LOAD_FAILED",
            ClusterError::ClientBuild { .. } => "CLIENT_BUILD_FAILED",
            ClusterError::ListFailed { .. } => "LIST_FAILED",
            ClusterError::LookupFailed { .. } => "LOOKUP_FAILED",
            ClusterError::DeleteFailed { .. } => "DELETE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ClusterError::CredentialLoad { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_load_display() {
        let error = ClusterError::CredentialLoad {
            message: "no such file".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to load cluster credentials: no such file"
        );
        assert_eq!(error.error_code(), "CREDENTIAL_LOAD_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_list_failed_names_kind() {
        let error = ClusterError::ListFailed {
            kind: ResourceKind::Job,
            message: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to list jobs: connection refused");
        assert_eq!(error.error_code(), "LIST_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_delete_failed_names_resource() {
        let error = ClusterError::DeleteFailed {
            kind: ResourceKind::Pod,
            name: "batch-x7k".to_string(),
            message: "forbidden".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to delete pod 'batch-x7k': forbidden"
        );
        assert_eq!(error.error_code(), "DELETE_FAILED");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClusterError>();
    }
}
