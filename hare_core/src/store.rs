use crate::Result;
use std::future::Future;

/// The handful of key-value primitives a job producer needs from its backend.
///
/// Every call is expected to be atomic on its own, but nothing ties a sequence
/// of calls together; callers that issue several writes must live with partial
/// application when one of them fails.
pub trait Store: Send + Sync {
    /// Append a value to the tail of a list
    fn rpush(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;

    /// Add a member to a sorted set with the given score
    fn zadd(&self, key: &str, member: &str, score: i64) -> impl Future<Output = Result<()>> + Send;

    /// Set several fields of a hash in one call
    fn hset_multiple(
        &self,
        key: &str,
        fields: &[(&'static str, String)],
    ) -> impl Future<Output = Result<()>> + Send;

    /// Set the time-to-live of a key in seconds
    fn expire(&self, key: &str, seconds: i64) -> impl Future<Output = Result<()>> + Send;
}
