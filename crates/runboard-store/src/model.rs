//! Run record types and the leaderboard ordering rule.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of runs returned by the leaderboard query.
pub const LEADERBOARD_LIMIT: usize = 10;

/// A numeric run metric. Whole numbers stay integers on the wire; anything
/// fractional is kept as a float.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(v) => v as f64,
            Numeric::Float(v) => v,
        }
    }

    /// Total order over the numeric value, so `100` and `100.0` compare equal.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Numeric::Integer(a), Numeric::Integer(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Integer(value)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

/// One completed game session as persisted and as served by the leaderboard.
///
/// `created_at` is assigned by the server when the run is inserted and is only
/// used to break score ties. Everything except `display_name` is immutable once
/// stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub run_id: String,
    pub display_name: String,
    pub score: Numeric,
    pub enemies_killed: Numeric,
    pub time_survived: f64,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields of a run, as posted when a game ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRun {
    pub run_id: String,
    pub display_name: String,
    pub score: Numeric,
    pub enemies_killed: Numeric,
    pub time_survived: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("runId must not be blank")]
    BlankRunId,
}

impl NewRun {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.run_id.trim().is_empty() {
            return Err(ValidationError::BlankRunId);
        }
        Ok(())
    }

    /// Stamps the creation time. The timestamp is truncated to milliseconds so
    /// every backend stores and returns the same value.
    pub fn into_run(self, created_at: DateTime<Utc>) -> Run {
        let created_at =
            DateTime::from_timestamp_millis(created_at.timestamp_millis()).unwrap_or(created_at);
        Run {
            run_id: self.run_id,
            display_name: self.display_name,
            score: self.score,
            enemies_killed: self.enemies_killed,
            time_survived: self.time_survived,
            created_at,
        }
    }
}

/// Highest score first; on equal scores the earlier run ranks higher.
pub fn leaderboard_order(a: &Run, b: &Run) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.created_at.cmp(&b.created_at))
}
