//! Provides functionality to look at what a producer has left in Redis.

use redis::AsyncCommands;
use std::collections::HashMap;

use crate::{Forum, HareError, HorizonKeys, JobRecord, QueueKeys, Result};

/// Interface for querying job records and queue sizes of one application
pub struct Inspector {
    forum: Forum,
    keys: HorizonKeys,
}

impl Inspector {
    pub fn new(forum: Forum, app_name: impl ToString) -> Self {
        Self {
            forum,
            keys: HorizonKeys::with_app_name(app_name),
        }
    }

    pub async fn job_exists(&self, job_id: &str) -> Result<bool> {
        let mut conn = self.forum.get_connection().await?;
        let exists: bool = conn.exists(self.keys.job_record_hash(job_id)).await?;
        Ok(exists)
    }

    pub async fn get_job_record(&self, job_id: &str) -> Result<JobRecord> {
        let mut conn = self.forum.get_connection().await?;
        let record_key = self.keys.job_record_hash(job_id);

        let hash: HashMap<String, String> = conn.hgetall(&record_key).await?;
        if hash.is_empty() {
            return Err(HareError::JobNotFound(job_id.to_string()));
        }

        JobRecord::from_hash(hash)
    }

    /// Remaining time-to-live of the job record in seconds
    pub async fn get_record_ttl(&self, job_id: &str) -> Result<i64> {
        let mut conn = self.forum.get_connection().await?;
        let ttl: i64 = conn.ttl(self.keys.job_record_hash(job_id)).await?;
        if ttl == -2 {
            return Err(HareError::JobNotFound(job_id.to_string()));
        }
        Ok(ttl)
    }

    /// Score of the job in the pending index, the negated push timestamp
    pub async fn get_pending_score(&self, job_id: &str) -> Result<Option<i64>> {
        let mut conn = self.forum.get_connection().await?;
        let score: Option<i64> = conn.zscore(self.keys.pending_jobs_set(), job_id).await?;
        Ok(score)
    }

    /// Score of the job in the recent index, the negated push timestamp
    pub async fn get_recent_score(&self, job_id: &str) -> Result<Option<i64>> {
        let mut conn = self.forum.get_connection().await?;
        let score: Option<i64> = conn.zscore(self.keys.recent_jobs_set(), job_id).await?;
        Ok(score)
    }

    /// Number of payloads waiting in the immediate queue
    pub async fn queue_length(&self, queue: &str) -> Result<usize> {
        let mut conn = self.forum.get_connection().await?;
        let length: usize = conn.llen(QueueKeys::with_queue(queue).queue_list()).await?;
        Ok(length)
    }

    /// Number of payloads waiting in the delayed set
    pub async fn delayed_length(&self, queue: &str) -> Result<usize> {
        let mut conn = self.forum.get_connection().await?;
        let length: usize = conn.zcard(QueueKeys::with_queue(queue).delayed_set()).await?;
        Ok(length)
    }
}
