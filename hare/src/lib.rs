//! Hare pushes jobs to Redis in the format Laravel Horizon workers consume.
//!
//! This is an _umbrella crate_ for re-exporting the components of the
//! producer from a single place according to the features enabled, like
//! `dispatch` for the `hare_dispatch` crate to push jobs.
//!
//! Shared utilities from `core` will always be available, regardless of
//! the features enabled.
//!
//! Read documentation for each sub-crate for more information.

pub use hare_core as core;

#[cfg(feature = "dispatch")]
pub use hare_dispatch as dispatch;

pub mod prelude {
    pub use crate::core::prelude::*;

    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::prelude::*;
}
