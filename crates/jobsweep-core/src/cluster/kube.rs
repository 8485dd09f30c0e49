//! Kubernetes-backed implementation of `ClusterOps`.

use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, DeleteParams, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::{debug, info};

use jobsweep_config::SweepConfig;

use crate::cluster::errors::{ClusterError, ResourceKind};
use crate::cluster::traits::ClusterOps;
use crate::cluster::types::{JOB_NAME_LABEL, JobRecord, PodPhase, PodRecord};

/// Live cluster backend over the Kubernetes API.
pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    /// Build a client from a kubeconfig file (with optional context
    /// override) or from in-cluster service-account credentials.
    pub async fn connect(config: &SweepConfig) -> Result<Self, ClusterError> {
        info!(
            event = "core.cluster.connect_started",
            in_cluster = config.in_cluster,
            kubeconfig = %config.kubeconfig.display(),
            context = ?config.context,
        );

        let client_config = if config.in_cluster {
            Config::incluster().map_err(|e| ClusterError::CredentialLoad {
                message: e.to_string(),
            })?
        } else {
            let kubeconfig = Kubeconfig::read_from(&config.kubeconfig).map_err(|e| {
                ClusterError::CredentialLoad {
                    message: format!("{}: {}", config.kubeconfig.display(), e),
                }
            })?;
            let options = KubeConfigOptions {
                context: config.context.clone(),
                ..KubeConfigOptions::default()
            };
            Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(|e| ClusterError::CredentialLoad {
                    message: e.to_string(),
                })?
        };

        let client = Client::try_from(client_config).map_err(|e| ClusterError::ClientBuild {
            message: e.to_string(),
        })?;

        info!(event = "core.cluster.connect_completed");
        Ok(Self { client })
    }

    fn jobs(&self, namespace: &str) -> Api<Job> {
        if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        }
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        }
    }
}

impl ClusterOps for KubeCluster {
    async fn list_jobs(&self, namespace: &str) -> Result<Vec<JobRecord>, ClusterError> {
        debug!(event = "core.cluster.list_jobs_started", namespace = namespace);

        let jobs = self
            .jobs(namespace)
            .list(&ListParams::default())
            .await
            .map_err(|e| ClusterError::ListFailed {
                kind: ResourceKind::Job,
                message: e.to_string(),
            })?;

        let records: Vec<JobRecord> = jobs.items.into_iter().map(job_record).collect();
        debug!(
            event = "core.cluster.list_jobs_completed",
            count = records.len()
        );
        Ok(records)
    }

    async fn list_pods(
        &self,
        namespace: &str,
        label: Option<(&str, &str)>,
    ) -> Result<Vec<PodRecord>, ClusterError> {
        debug!(
            event = "core.cluster.list_pods_started",
            namespace = namespace,
            label = ?label,
        );

        let mut params = ListParams::default();
        if let Some((key, value)) = label {
            params = params.labels(&format!("{}={}", key, value));
        }

        let pods = self
            .pods(namespace)
            .list(&params)
            .await
            .map_err(|e| ClusterError::ListFailed {
                kind: ResourceKind::Pod,
                message: e.to_string(),
            })?;

        let records: Vec<PodRecord> = pods.items.into_iter().map(pod_record).collect();
        debug!(
            event = "core.cluster.list_pods_completed",
            count = records.len()
        );
        Ok(records)
    }

    async fn get_job(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<Option<JobRecord>, ClusterError> {
        // get_opt maps a 404 to None; every other failure propagates so
        // the caller never mistakes an outage for an absent job
        self.jobs(namespace)
            .get_opt(name)
            .await
            .map(|job| job.map(job_record))
            .map_err(|e| ClusterError::LookupFailed {
                name: name.to_string(),
                namespace: namespace.to_string(),
                message: e.to_string(),
            })
    }

    async fn delete_pod(&self, name: &str, namespace: &str) -> Result<(), ClusterError> {
        debug!(
            event = "core.cluster.delete_pod_started",
            pod = name,
            namespace = namespace
        );
        self.pods(namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(|e| ClusterError::DeleteFailed {
                kind: ResourceKind::Pod,
                name: name.to_string(),
                message: e.to_string(),
            })
    }

    async fn delete_job(&self, name: &str, namespace: &str) -> Result<(), ClusterError> {
        debug!(
            event = "core.cluster.delete_job_started",
            job = name,
            namespace = namespace
        );
        self.jobs(namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(|e| ClusterError::DeleteFailed {
                kind: ResourceKind::Job,
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}

fn job_record(job: Job) -> JobRecord {
    let status = job.status.unwrap_or_default();
    JobRecord {
        name: job.metadata.name.unwrap_or_default(),
        namespace: job.metadata.namespace.unwrap_or_default(),
        active: status.active,
        completion_time: status.completion_time.map(|t| t.0),
    }
}

fn pod_record(pod: Pod) -> PodRecord {
    let phase = pod
        .status
        .and_then(|s| s.phase)
        .map(|p| PodPhase::parse(&p))
        .unwrap_or(PodPhase::Unknown);
    let job_name = pod
        .metadata
        .labels
        .as_ref()
        .and_then(|labels| labels.get(JOB_NAME_LABEL))
        .cloned();
    PodRecord {
        name: pod.metadata.name.unwrap_or_default(),
        namespace: pod.metadata.namespace.unwrap_or_default(),
        phase,
        job_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::batch::v1::JobStatus;
    use k8s_openapi::api::core::v1::PodStatus;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};

    #[test]
    fn test_job_record_conversion() {
        let completion = chrono::DateTime::parse_from_rfc3339("2026-08-20T12:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let job = Job {
            metadata: ObjectMeta {
                name: Some("nightly-report".to_string()),
                namespace: Some("batch".to_string()),
                ..ObjectMeta::default()
            },
            status: Some(JobStatus {
                active: Some(0),
                completion_time: Some(Time(completion)),
                ..JobStatus::default()
            }),
            ..Job::default()
        };

        let record = job_record(job);
        assert_eq!(record.name, "nightly-report");
        assert_eq!(record.namespace, "batch");
        assert_eq!(record.active, Some(0));
        assert_eq!(record.completion_time, Some(completion));
    }

    #[test]
    fn test_job_record_without_status() {
        let job = Job {
            metadata: ObjectMeta {
                name: Some("bare".to_string()),
                ..ObjectMeta::default()
            },
            ..Job::default()
        };

        let record = job_record(job);
        assert_eq!(record.active, None);
        assert_eq!(record.completion_time, None);
        assert!(record.is_terminal());
    }

    #[test]
    fn test_pod_record_reads_job_name_label() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some("nightly-report-x7k".to_string()),
                namespace: Some("batch".to_string()),
                labels: Some(
                    [(JOB_NAME_LABEL.to_string(), "nightly-report".to_string())]
                        .into_iter()
                        .collect(),
                ),
                ..ObjectMeta::default()
            },
            status: Some(PodStatus {
                phase: Some("Succeeded".to_string()),
                ..PodStatus::default()
            }),
            ..Pod::default()
        };

        let record = pod_record(pod);
        assert_eq!(record.job_name.as_deref(), Some("nightly-report"));
        assert_eq!(record.phase, PodPhase::Succeeded);
    }

    #[test]
    fn test_pod_record_without_phase_is_unknown() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some("limbo".to_string()),
                ..ObjectMeta::default()
            },
            ..Pod::default()
        };

        let record = pod_record(pod);
        assert_eq!(record.phase, PodPhase::Unknown);
        assert_eq!(record.job_name, None);
    }
}
