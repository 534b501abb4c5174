use thiserror::Error;

/// Return for Hare operations that can succeed (OK) or fail (Err)
pub type Result<T> = std::result::Result<T, HareError>;

/// All the possible errors from Hare operations
#[derive(Debug, Error)]
pub enum HareError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Redis pool error: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    #[error("Redis pool setup error: {0}")]
    CreatePool(#[from] deadpool_redis::CreatePoolError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Message with details on what is wrong with the dispatch configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Job not found: {0}")]
    JobNotFound(String), // job id

    /// Message with details on what is invalid in a stored job record
    #[error("Invalid job: {0}")]
    InvalidJob(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
}
