//! HTTP surface: route table, shared state, and request/response bodies.

mod handlers;
pub mod types;

use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;
use runboard_store::{RunRepository, SharedRunRepository};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// State shared by every handler: the store handle opened at boot.
#[derive(Clone)]
pub struct AppState {
    repository: SharedRunRepository,
}

impl AppState {
    pub fn new(repository: SharedRunRepository) -> Self {
        Self { repository }
    }

    pub fn from_repository<R: RunRepository + 'static>(repository: R) -> Self {
        Self::new(Arc::new(repository))
    }

    pub fn repository(&self) -> &dyn RunRepository {
        self.repository.as_ref()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/runs", post(handlers::create_run))
        .route(
            "/runs/{id}",
            patch(handlers::patch_display_name).put(handlers::put_display_name),
        )
        .route("/leaderboard", get(handlers::leaderboard))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
