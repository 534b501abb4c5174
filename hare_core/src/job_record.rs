use crate::error::{HareError, Result};
use crate::job_status::JobStatus;
use std::collections::HashMap;

/// How long a job record is kept around for the dashboard, in seconds
pub const JOB_RECORD_TTL_SECS: i64 = 60 * 60;

/// Connection name the dashboard shows for jobs pushed through Redis
pub const REDIS_CONNECTION: &str = "redis";

/// Dashboard bookkeeping record of a single job
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    /// Unique identifier for the job
    pub id: String,

    /// Display name of the job class
    pub name: String,

    /// Queue the job was pushed to
    pub queue: String,

    /// Name of the queue connection
    pub connection: String,

    /// The exact JSON envelope pushed to the queue
    pub payload: String,

    /// The current status of the job
    pub status: JobStatus,

    /// UNIX timestamp in seconds
    pub created_at: i64,

    /// UNIX timestamp in seconds
    pub updated_at: i64,
}

impl JobRecord {
    /// Record of a freshly pushed job
    pub fn pending(
        id: impl ToString,
        name: impl ToString,
        queue: impl ToString,
        payload: impl ToString,
        pushed_at: i64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            queue: queue.to_string(),
            connection: REDIS_CONNECTION.to_string(),
            payload: payload.to_string(),
            status: JobStatus::Pending,
            created_at: pushed_at,
            updated_at: pushed_at,
        }
    }

    /// Parse the stored payload into JSON
    pub fn payload_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.payload)?)
    }

    /// Flatten into Redis hash fields
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("created_at", self.created_at.to_string()),
            ("connection", self.connection.clone()),
            ("updated_at", self.updated_at.to_string()),
            ("name", self.name.clone()),
            ("id", self.id.clone()),
            ("queue", self.queue.clone()),
            ("payload", self.payload.clone()),
            ("status", self.status.to_string()),
        ]
    }

    /// Convert a Redis hash into a more structured job record
    pub fn from_hash(mut hash: HashMap<String, String>) -> Result<Self> {
        let mut take = |field: &str| {
            hash.remove(field)
                .ok_or_else(|| HareError::InvalidJob(format!("Missing {} field", field)))
        };

        let id = take("id")?;
        let name = take("name")?;
        let queue = take("queue")?;
        let connection = take("connection")?;
        let payload = take("payload")?;

        let status = take("status")?
            .parse::<JobStatus>()
            .map_err(HareError::InvalidJob)?;

        let created_at = take("created_at")?
            .parse::<i64>()
            .map_err(|_| HareError::InvalidJob("Invalid created_at".to_string()))?;

        let updated_at = take("updated_at")?
            .parse::<i64>()
            .map_err(|_| HareError::InvalidJob("Invalid updated_at".to_string()))?;

        Ok(Self {
            id,
            name,
            queue,
            connection,
            payload,
            status,
            created_at,
            updated_at,
        })
    }
}
