//! MongoDB-backed run repository.
//!
//! This module is feature-gated behind `mongodb`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use mongodb::options::{ClientOptions, FindOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use crate::model::{Numeric, Run};
use crate::repository::{map_connection_err, map_driver_err, RunRepository, StoreError};

/// Database selected when none is configured.
pub const DEFAULT_DATABASE: &str = "survivalGame";

/// Collection holding one document per run.
pub const RUNS_COLLECTION: &str = "runs";

const LEADERBOARD_INDEX: &str = "score_desc_created_at_asc";
const RUN_ID_INDEX: &str = "run_id";

/// Stored shape of a run. `createdAt` is a BSON date so the store sorts it
/// chronologically. Metrics accept both integer and double BSON values.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunDocument {
    run_id: String,
    display_name: String,
    score: Numeric,
    enemies_killed: Numeric,
    time_survived: f64,
    created_at: BsonDateTime,
}

fn ms_to_dt(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .unwrap_or_else(Utc::now)
}

impl From<Run> for RunDocument {
    fn from(run: Run) -> Self {
        Self {
            run_id: run.run_id,
            display_name: run.display_name,
            score: run.score,
            enemies_killed: run.enemies_killed,
            time_survived: run.time_survived,
            created_at: BsonDateTime::from_millis(run.created_at.timestamp_millis()),
        }
    }
}

impl From<RunDocument> for Run {
    fn from(doc: RunDocument) -> Self {
        Self {
            run_id: doc.run_id,
            display_name: doc.display_name,
            score: doc.score,
            enemies_killed: doc.enemies_killed,
            time_survived: doc.time_survived,
            created_at: ms_to_dt(doc.created_at.timestamp_millis()),
        }
    }
}

/// Decodes leaderboard documents one by one. Documents written without the
/// full run shape are logged and left out rather than failing the whole read.
fn decode_leaderboard(docs: Vec<Document>) -> Vec<Run> {
    docs.into_iter()
        .filter_map(|doc| {
            match mongodb::bson::from_document::<RunDocument>(doc.clone()) {
                Ok(run) => Some(Run::from(run)),
                Err(err) => {
                    tracing::warn!(
                        run_id = doc.get_str("runId").unwrap_or("<missing>"),
                        error = %err,
                        "skipping undecodable run document"
                    );
                    None
                }
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct MongoRunRepository {
    database: Database,
    runs: Collection<RunDocument>,
}

impl MongoRunRepository {
    /// Connects and pings the deployment. Fails instead of returning a handle
    /// that would only error on first use.
    pub async fn connect(
        uri: &str,
        database: &str,
        connect_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| map_connection_err("parse connection string", e))?;
        options.connect_timeout = Some(connect_timeout);
        options.server_selection_timeout = Some(connect_timeout);
        options.app_name = Some("runboard".to_string());

        let client =
            Client::with_options(options).map_err(|e| map_connection_err("build client", e))?;
        let repo = Self::with_database(client.database(database));
        repo.ping().await.map_err(StoreError::into_connection)?;
        tracing::info!(database, collection = RUNS_COLLECTION, "connected to mongodb");
        Ok(repo)
    }

    pub fn with_database(database: Database) -> Self {
        let runs = database.collection::<RunDocument>(RUNS_COLLECTION);
        Self { database, runs }
    }

    /// Creates the leaderboard and run id indexes if they are missing. Run ids
    /// are indexed but not unique.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let leaderboard = IndexModel::builder()
            .keys(doc! { "score": -1, "createdAt": 1 })
            .options(
                IndexOptions::builder()
                    .name(LEADERBOARD_INDEX.to_string())
                    .build(),
            )
            .build();
        let run_id = IndexModel::builder()
            .keys(doc! { "runId": 1 })
            .options(IndexOptions::builder().name(RUN_ID_INDEX.to_string()).build())
            .build();

        self.runs
            .create_indexes(vec![leaderboard, run_id], None)
            .await
            .map_err(|e| map_driver_err("create indexes", e))?;
        tracing::debug!(collection = RUNS_COLLECTION, "run indexes ready");
        Ok(())
    }
}

#[async_trait]
impl RunRepository for MongoRunRepository {
    async fn insert_run(&self, run: Run) -> Result<(), StoreError> {
        self.runs
            .insert_one(RunDocument::from(run), None)
            .await
            .map_err(|e| map_driver_err("insert run", e))?;
        Ok(())
    }

    async fn update_display_name(
        &self,
        run_id: &str,
        display_name: &str,
    ) -> Result<u64, StoreError> {
        let result = self
            .runs
            .update_one(
                doc! { "runId": run_id },
                doc! { "$set": { "displayName": display_name } },
                None,
            )
            .await
            .map_err(|e| map_driver_err("update display name", e))?;
        Ok(result.matched_count)
    }

    async fn leaderboard(&self, limit: usize) -> Result<Vec<Run>, StoreError> {
        let options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .sort(doc! { "score": -1, "createdAt": 1 })
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .build();
        let cursor = self
            .runs
            .clone_with_type::<Document>()
            .find(doc! {}, options)
            .await
            .map_err(|e| map_driver_err("query leaderboard", e))?;
        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| map_driver_err("read leaderboard", e))?;
        Ok(decode_leaderboard(docs))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| map_driver_err("ping", e))?;
        Ok(())
    }
}
