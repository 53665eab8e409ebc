//! Runtime module
//!
//! Provides the single-result task handle used by repository fetchers.

pub mod async_task;

pub use async_task::{AsyncTask, TaskDropped};
