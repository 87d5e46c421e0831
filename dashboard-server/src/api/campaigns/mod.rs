//! Campaign ingest API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/campaigns", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::upsert))
}
