use serde::{Deserialize, Serialize};

use crate::cluster::JobRecord;

/// A terminal job past the age threshold, with its computed age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibleJob {
    pub job: JobRecord,
    /// Whole days since the job's completion time.
    pub age_days: i64,
}
