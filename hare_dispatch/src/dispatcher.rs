use crate::{DispatchConfig, JobEnvelope, JobParam, encode_command};
use hare_core::*;
use std::sync::Arc;
use tracing::{debug, info};

/// Interface for pushing jobs to Horizon-style Redis queues
pub struct Dispatcher<S: Store> {
    store: S,
    clock: Arc<dyn Clock>,
    id_generator: Arc<dyn IdGenerator>,
}

impl Dispatcher<Forum> {
    /// Dispatcher over a forum configured from environment
    pub fn try_from_env() -> Result<Self> {
        Ok(Self::with_store(Forum::try_from_env()?))
    }
}

impl<S: Store> Dispatcher<S> {
    /// Dispatcher over the given store with the system clock and UUID v4 ids
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            id_generator: Arc::new(UuidGenerator),
        }
    }

    /// Replace the source of the current time
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the source of job identifiers
    pub fn with_id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Arc::new(id_generator);
        self
    }

    /// Get the store the jobs are written to
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Push a new job and record it for the dashboard, returning the job id.
    ///
    /// Writes are issued one by one and the first failure is returned as is;
    /// whatever was written before it stays in place.
    pub async fn dispatch(&self, config: &DispatchConfig, params: &[JobParam]) -> Result<String> {
        config.validate()?;

        let job_id = self.id_generator.generate();
        let pushed_at = self.clock.now();
        let run_at = config.run_at(pushed_at)?;
        let index_score = pushed_at.checked_neg().ok_or_else(|| {
            HareError::InvalidConfig(format!("push time {} is out of range", pushed_at))
        })?;

        let command = encode_command(config, params);
        let envelope = JobEnvelope::new(&job_id, &config.job_name, command, pushed_at);
        let payload = serde_json::to_string(&envelope)?;

        let queue_keys = QueueKeys::with_queue(&config.queue);
        if config.delay == 0 {
            self.store.rpush(&queue_keys.queue_list(), &payload).await?;
            self.store.rpush(&queue_keys.notify_list(), "1").await?;

            info!(
                job_id = %job_id,
                queue = %config.queue,
                "Job pushed to queue"
            );
        } else {
            self.store
                .zadd(&queue_keys.delayed_set(), &payload, run_at)
                .await?;

            info!(
                job_id = %job_id,
                queue = %config.queue,
                run_at = %run_at,
                "Job scheduled for later execution"
            );
        }

        let horizon_keys = HorizonKeys::with_app_name(&config.app_name);
        let record = JobRecord::pending(&job_id, &config.job_name, &config.queue, &payload, pushed_at);
        let record_key = horizon_keys.job_record_hash(&job_id);

        self.store
            .hset_multiple(&record_key, &record.to_fields())
            .await?;
        self.store.expire(&record_key, JOB_RECORD_TTL_SECS).await?;

        self.store
            .zadd(&horizon_keys.pending_jobs_set(), &job_id, index_score)
            .await?;
        self.store
            .zadd(&horizon_keys.recent_jobs_set(), &job_id, index_score)
            .await?;

        debug!(job_id = %job_id, record_key = %record_key, "Job recorded for dashboard");

        Ok(job_id)
    }
}
