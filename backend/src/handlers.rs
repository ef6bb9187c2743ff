use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use shared::persistence::DocumentHandle;
use tracing::warn;

use crate::error::Error;
use crate::services::document_service;
use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

/// Creates one document in an allowlisted collection.
pub async fn create_document(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<DocumentHandle>), Error> {
    if !state.config.accepts_collection(&collection) {
        warn!("Rejected write to unknown collection {}", collection);
        return Err(Error::UnknownCollection(collection));
    }

    let Json(body) = body?;
    if let Err(e) = document_service::validate_document(&collection, &body) {
        warn!("Rejected document for {}: {:?}", collection, e);
        return Err(e);
    }

    let handle = document_service::insert_document(&state.pool, &collection, body).await?;
    Ok((StatusCode::CREATED, Json(handle)))
}
