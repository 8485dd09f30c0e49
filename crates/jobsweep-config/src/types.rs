use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_KUBECONFIG_PATH: &str = "./config";
pub const DEFAULT_AGE_THRESHOLD_DAYS: u32 = 7;

/// Settings for a single sweep invocation.
///
/// Built from CLI flags; there is no config file and no state carried
/// between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Path to the kubeconfig file (ignored when `in_cluster` is set).
    pub kubeconfig: PathBuf,
    /// Context override; `None` uses the kubeconfig's current-context.
    pub context: Option<String>,
    /// Use in-cluster service-account credentials instead of a kubeconfig.
    pub in_cluster: bool,
    /// Namespace scope; empty string means all namespaces.
    pub namespace: String,
    /// Apply mode: actually issue delete calls. Default is simulate.
    pub apply: bool,
    /// Age threshold in days for job eligibility.
    pub days: u32,
    /// Also run the orphaned-pod correlation pass.
    pub orphans: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            kubeconfig: PathBuf::from(DEFAULT_KUBECONFIG_PATH),
            context: None,
            in_cluster: false,
            namespace: String::new(),
            apply: false,
            days: DEFAULT_AGE_THRESHOLD_DAYS,
            orphans: false,
        }
    }
}

impl SweepConfig {
    /// Validate flag combinations before touching the cluster.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.in_cluster && self.context.is_some() {
            return Err(ConfigError::InvalidConfiguration {
                message: "--context cannot be combined with --in-cluster".to_string(),
            });
        }
        if !self.in_cluster && self.kubeconfig.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: "--kubeconfig path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SweepConfig::default();
        assert_eq!(config.kubeconfig, PathBuf::from("./config"));
        assert_eq!(config.context, None);
        assert!(!config.in_cluster);
        assert_eq!(config.namespace, "");
        assert!(!config.apply, "simulate mode must be the default");
        assert_eq!(config.days, 7);
        assert!(!config.orphans);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(SweepConfig::default().validate().is_ok());
    }

    #[test]
    fn test_in_cluster_rejects_context_override() {
        let config = SweepConfig {
            in_cluster: true,
            context: Some("staging".to_string()),
            ..SweepConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("--in-cluster"));
    }

    #[test]
    fn test_in_cluster_without_context_is_valid() {
        let config = SweepConfig {
            in_cluster: true,
            ..SweepConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
