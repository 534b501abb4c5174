use crate::{HareError, Result};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Generate a new UUID v4 for a job
pub fn generate_job_id() -> String {
    Uuid::new_v4().to_string()
}

/// Get current timestamp in seconds since UNIX epoch
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default()
}

/// A standardized way to read HARE_REDIS_URL env var with REDIS_URL as fallback
pub fn get_redis_url() -> String {
    std::env::var("HARE_REDIS_URL")
        .or_else(|_| std::env::var("REDIS_URL"))
        .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

/// A standardized way to read HARE_APP_NAME env var with APP_NAME as fallback
pub fn get_app_name() -> Result<String> {
    std::env::var("HARE_APP_NAME")
        .or_else(|_| std::env::var("APP_NAME"))
        .ok()
        .filter(|name| !name.is_empty())
        .ok_or(HareError::MissingEnvVar("HARE_APP_NAME"))
}
