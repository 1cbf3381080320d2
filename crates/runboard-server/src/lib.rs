//! HTTP API server for runboard.
//!
//! Routes:
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/` | `{"ok": true}` |
//! | POST | `/runs` | 201 `{"status": "ok", "runId": ...}` |
//! | PATCH | `/runs/{id}` | 200 `{"status": "updated", "runId": ..., "matched": 0 or 1}` |
//! | PUT | `/runs/{id}` | as PATCH, or 404 `{"error": "Run not found"}` when nothing matched |
//! | GET | `/leaderboard` | top 10 runs, score descending then oldest first |

pub mod api;
pub mod config;
pub mod error;
pub mod telemetry;

pub use api::{build_router, AppState};
pub use config::ServerConfig;
pub use error::ApiError;
