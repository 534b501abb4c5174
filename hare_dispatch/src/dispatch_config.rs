use hare_core::*;

/// Dispatch config describes **one job class** and where its jobs should be pushed
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Application name that namespaces the dashboard bookkeeping; must not be empty
    pub app_name: String,

    /// Class name of the job, used both as display name and as the serialized class
    pub job_name: String,

    /// Queue the job is pushed to
    pub queue: String,

    /// Seconds to wait before the job becomes available or 0 to queue it right away
    pub delay: u64,
}

impl DispatchConfig {
    /// Create a new config for immediate dispatch to the "default" queue
    pub fn new(app_name: impl ToString, job_name: impl ToString) -> Self {
        Self {
            app_name: app_name.to_string(),
            job_name: job_name.to_string(),
            queue: "default".to_string(),
            delay: 0,
        }
    }

    /// Create a new config with the application name read from environment
    pub fn try_from_env(job_name: impl ToString) -> Result<Self> {
        Ok(Self::new(get_app_name()?, job_name))
    }

    /// Set the target queue
    pub fn queue(mut self, queue: impl ToString) -> Self {
        self.queue = queue.to_string();
        self
    }

    /// Delay the job by the given number of seconds
    pub fn delay(mut self, delay_secs: u64) -> Self {
        self.delay = delay_secs;
        self
    }

    /// Check everything that must hold before anything is written
    pub fn validate(&self) -> Result<()> {
        if self.app_name.is_empty() {
            return Err(HareError::InvalidConfig(
                "app name is required in config".to_string(),
            ));
        }
        if i64::try_from(self.delay).is_err() {
            return Err(HareError::InvalidConfig(format!(
                "delay of {} seconds is out of range",
                self.delay
            )));
        }
        Ok(())
    }

    /// UNIX timestamp in seconds at which a job pushed at `now` becomes available
    pub fn run_at(&self, now: i64) -> Result<i64> {
        i64::try_from(self.delay)
            .ok()
            .and_then(|delay| now.checked_add(delay))
            .ok_or_else(|| {
                HareError::InvalidConfig(format!(
                    "delay of {} seconds is out of range",
                    self.delay
                ))
            })
    }
}
