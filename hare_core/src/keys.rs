/// Redis key generator for the queue structures the consumer reads from
#[derive(Debug, Clone)]
pub struct QueueKeys {
    queue: String,
}

impl QueueKeys {
    pub fn with_queue(queue: impl ToString) -> Self {
        Self {
            queue: queue.to_string(),
        }
    }

    /// Redis key for the list that holds JSON payloads ready to be processed
    pub fn queue_list(&self) -> String {
        format!("queues:{}", self.queue)
    }

    /// Redis key for the list that wakes up blocked consumers
    pub fn notify_list(&self) -> String {
        format!("queues:{}:notify", self.queue)
    }

    /// Redis key for the sorted set that holds delayed payloads with to-be-executed timestamps as scores
    pub fn delayed_set(&self) -> String {
        format!("queues:{}:delayed", self.queue)
    }
}

/// Redis key generator for the dashboard bookkeeping of one application
#[derive(Debug, Clone)]
pub struct HorizonKeys {
    app_name: String,
    index_prefix: String,
}

impl HorizonKeys {
    /// Job records keep the application name as given, the indexes use it lower-cased
    pub fn with_app_name(app_name: impl ToString) -> Self {
        let app_name = app_name.to_string();
        Self {
            index_prefix: app_name.to_lowercase(),
            app_name,
        }
    }

    /// Redis key for the hash that holds the job record
    pub fn job_record_hash(&self, job_id: &str) -> String {
        format!("{}_horizon:{}", self.app_name, job_id)
    }

    /// Redis key for the sorted set of pending job ids with negated push timestamps as scores
    pub fn pending_jobs_set(&self) -> String {
        format!("{}_horizon:pending_jobs", self.index_prefix)
    }

    /// Redis key for the sorted set of recent job ids with negated push timestamps as scores
    pub fn recent_jobs_set(&self) -> String {
        format!("{}_horizon:recent_jobs", self.index_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keys() {
        let keys = QueueKeys::with_queue("emails");
        assert_eq!(keys.queue_list(), "queues:emails");
        assert_eq!(keys.notify_list(), "queues:emails:notify");
        assert_eq!(keys.delayed_set(), "queues:emails:delayed");
    }

    #[test]
    fn horizon_keys_lowercase_only_the_indexes() {
        let keys = HorizonKeys::with_app_name("MyApp");
        assert_eq!(keys.job_record_hash("abc"), "MyApp_horizon:abc");
        assert_eq!(keys.pending_jobs_set(), "myapp_horizon:pending_jobs");
        assert_eq!(keys.recent_jobs_set(), "myapp_horizon:recent_jobs");
    }
}
