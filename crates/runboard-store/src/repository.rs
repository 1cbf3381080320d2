//! Storage contract for run records.

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::Run;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the connection string was unusable.
    #[error("store connection failed: {0}")]
    Connection(String),
    /// A single store operation failed after the connection was established.
    #[error("store driver error: {0}")]
    Driver(String),
}

impl StoreError {
    /// Re-labels a failure as a connectivity failure, keeping the original
    /// `"<operation>: <cause>"` message.
    pub fn into_connection(self) -> Self {
        match self {
            StoreError::Connection(msg) | StoreError::Driver(msg) => StoreError::Connection(msg),
        }
    }
}

pub(crate) fn map_driver_err(prefix: &str, e: impl std::fmt::Display) -> StoreError {
    StoreError::Driver(format!("{prefix}: {e}"))
}

#[cfg_attr(not(feature = "mongodb"), allow(dead_code))]
pub(crate) fn map_connection_err(prefix: &str, e: impl std::fmt::Display) -> StoreError {
    StoreError::Connection(format!("{prefix}: {e}"))
}

/// Run repository contract used by the HTTP handlers.
///
/// Each call is a single atomic store operation. There are no cross-call
/// transactions; concurrent display-name updates to the same run resolve as
/// last write wins.
#[async_trait]
pub trait RunRepository: Send + Sync {
    /// Insert a run unconditionally. An existing run with the same `run_id` is
    /// neither checked for nor replaced.
    async fn insert_run(&self, run: Run) -> Result<(), StoreError>;

    /// Set `display_name` on one run whose `run_id` equals the given id.
    ///
    /// Returns the match count: 0 when no run has that id, otherwise 1 even if
    /// several runs share the id or the name was already set.
    async fn update_display_name(&self, run_id: &str, display_name: &str)
        -> Result<u64, StoreError>;

    /// Runs ordered by [crate::leaderboard_order], at most `limit` of them.
    async fn leaderboard(&self, limit: usize) -> Result<Vec<Run>, StoreError>;

    /// Round-trip to the store to confirm it is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

pub type SharedRunRepository = Arc<dyn RunRepository>;
