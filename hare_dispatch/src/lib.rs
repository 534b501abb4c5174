//! `hare_dispatch` provides the interface for pushing jobs to Horizon-style queues.
//!
//! This crate encodes job parameters into the serialized command object the
//! consumer expects, wraps it in a JSON envelope, pushes it to the immediate
//! queue or the delayed set and records it for the dashboard.

mod dispatch_config;
mod dispatcher;
mod encoder;
mod envelope;
mod job_param;

pub use dispatch_config::DispatchConfig;
pub use dispatcher::Dispatcher;
pub use encoder::{encode_command, encode_delay, encode_properties};
pub use envelope::{CommandData, JobEnvelope, QUEUED_HANDLER};
pub use job_param::{JobParam, ParamKind};

pub mod prelude {
    pub use crate::{DispatchConfig, Dispatcher, JobParam, ParamKind};
}
