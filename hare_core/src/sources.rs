//! Injectable sources of time and job identifiers.

use crate::util::{current_timestamp, generate_job_id};

/// Source of the current UNIX time in seconds
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Source of globally unique job identifiers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Clock backed by the system wall-clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        current_timestamp()
    }
}

/// Identifier generator producing random UUID v4 strings
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        generate_job_id()
    }
}
