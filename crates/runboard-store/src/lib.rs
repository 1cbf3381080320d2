//! Persistence kernel for runboard.
//!
//! A [Run] is one finished game session. Runs are written once, may have their
//! display name changed afterwards, and are read back through the top-N
//! leaderboard query. [RunRepository] is the storage contract; the in-memory
//! and MongoDB backends both implement it.

pub mod memory;
pub mod model;
#[cfg(feature = "mongodb")]
pub mod mongo;
pub mod repository;

pub use memory::InMemoryRunRepository;
pub use model::{leaderboard_order, NewRun, Numeric, Run, ValidationError, LEADERBOARD_LIMIT};
#[cfg(feature = "mongodb")]
pub use mongo::{MongoRunRepository, DEFAULT_DATABASE, RUNS_COLLECTION};
pub use repository::{RunRepository, SharedRunRepository, StoreError};
