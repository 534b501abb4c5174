use crate::{Result, Store, get_redis_url};
use deadpool_redis::{Config, Connection, Pool, Runtime};
use redis::AsyncCommands;

#[cfg(feature = "runtime-async-std")]
const RUNTIME: Runtime = Runtime::AsyncStd1;
#[cfg(not(feature = "runtime-async-std"))]
const RUNTIME: Runtime = Runtime::Tokio1;

/// Central Redis connection pool shared by everything that talks to the queues
#[derive(Clone)]
pub struct Forum {
    redis_pool: Pool,
}

impl Forum {
    /// Create a new forum with the specified Redis URL
    pub fn new(redis_url: &str) -> Result<Self> {
        let redis_pool = Config::from_url(redis_url).create_pool(Some(RUNTIME))?;
        Ok(Self { redis_pool })
    }

    /// Create a forum with the Redis URL from environment
    pub fn try_from_env() -> Result<Self> {
        Self::new(&get_redis_url())
    }

    /// Get a pooled Redis connection
    pub async fn get_connection(&self) -> Result<Connection> {
        Ok(self.redis_pool.get().await?)
    }
}

impl Store for Forum {
    async fn rpush(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.get_connection().await?;
        let _: () = conn.rpush::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn zadd(&self, key: &str, member: &str, score: i64) -> Result<()> {
        let mut conn = self.get_connection().await?;
        let _: () = conn.zadd::<_, _, _, ()>(key, member, score).await?;
        Ok(())
    }

    async fn hset_multiple(&self, key: &str, fields: &[(&'static str, String)]) -> Result<()> {
        let mut conn = self.get_connection().await?;
        let _: () = conn.hset_multiple::<_, _, _, ()>(key, fields).await?;
        Ok(())
    }

    async fn expire(&self, key: &str, seconds: i64) -> Result<()> {
        let mut conn = self.get_connection().await?;
        let _: () = conn.expire::<_, ()>(key, seconds).await?;
        Ok(())
    }
}
