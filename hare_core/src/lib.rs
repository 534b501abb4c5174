//! `hare_core` provides shared utilities for the Hare job producer.
//!
//! This crate includes common functionality used across the Hare components,
//! such as the storage seam, Redis key management, job records and error types.

mod error;
mod forum;
mod inspector;
mod job_record;
mod job_status;
mod keys;
mod sources;
mod store;
mod util;

pub use error::{HareError, Result};
pub use forum::Forum;
pub use inspector::Inspector;
pub use job_record::{JOB_RECORD_TTL_SECS, JobRecord, REDIS_CONNECTION};
pub use job_status::JobStatus;
pub use keys::{HorizonKeys, QueueKeys};
pub use sources::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use store::Store;
pub use util::{current_timestamp, generate_job_id, get_app_name, get_redis_url};

pub mod prelude {
    pub use crate::{Forum, HareError, Inspector, JobRecord, JobStatus, Store};
}
