//! In-process run repository for tests and local development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::{leaderboard_order, Run};
use crate::repository::{map_driver_err, RunRepository, StoreError};

/// Keeps runs in insertion order behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryRunRepository {
    runs: RwLock<Vec<Run>>,
}

impl InMemoryRunRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored runs, duplicates included. Still counts after a writer
    /// panicked while holding the lock.
    pub fn len(&self) -> usize {
        match self.runs.read() {
            Ok(runs) => runs.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every stored run with the given id, in insertion order.
    pub fn runs_with_id(&self, run_id: &str) -> Result<Vec<Run>, StoreError> {
        let runs = self
            .runs
            .read()
            .map_err(|e| map_driver_err("read runs", e))?;
        Ok(runs.iter().filter(|r| r.run_id == run_id).cloned().collect())
    }
}

#[async_trait]
impl RunRepository for InMemoryRunRepository {
    async fn insert_run(&self, run: Run) -> Result<(), StoreError> {
        let mut runs = self
            .runs
            .write()
            .map_err(|e| map_driver_err("insert run", e))?;
        runs.push(run);
        Ok(())
    }

    async fn update_display_name(
        &self,
        run_id: &str,
        display_name: &str,
    ) -> Result<u64, StoreError> {
        let mut runs = self
            .runs
            .write()
            .map_err(|e| map_driver_err("update display name", e))?;
        match runs.iter_mut().find(|r| r.run_id == run_id) {
            Some(run) => {
                run.display_name = display_name.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn leaderboard(&self, limit: usize) -> Result<Vec<Run>, StoreError> {
        let runs = self
            .runs
            .read()
            .map_err(|e| map_driver_err("read leaderboard", e))?;
        let mut ranked = runs.clone();
        drop(runs);
        ranked.sort_by(leaderboard_order);
        ranked.truncate(limit);
        Ok(ranked)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
