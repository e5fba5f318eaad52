//! Handlers for the `/records` resource.
//!
//! Commits run the full validator under the store's write lock, so the
//! record set cannot change between the check and the insert.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use edicfg_core::records::{ConfigRecord, RecordKind};
use edicfg_core::types::NaturalKey;
use edicfg_core::validation::keys::WriteMode;
use edicfg_core::validation::rules::ValidationOutcome;
use edicfg_core::validation::validator::ConfigValidator;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/records/{kind}
pub async fn list_records(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> AppResult<Json<DataResponse<Vec<ConfigRecord>>>> {
    let kind: RecordKind = kind
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Unknown record kind '{kind}'")))?;
    let records = state.store.read().await.records_of(kind);
    Ok(Json(DataResponse { data: records }))
}

/// Request body for committing a record.
#[derive(Debug, Deserialize)]
pub struct CommitRequest {
    pub record: ConfigRecord,
    #[serde(default)]
    pub mode: WriteMode,
}

/// POST /api/v1/records
///
/// Validate and store a record. Returns 201 for a create and 200 for an
/// update; a rejected candidate returns 422 with its violations.
pub async fn commit_record(
    State(state): State<AppState>,
    Json(body): Json<CommitRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ConfigRecord>>)> {
    let kind = body.record.kind();
    let mut store = state.store.write().await;

    let outcome = ConfigValidator::new(&*store)
        .validate(&body.record, &body.mode)
        .unwrap_or_else(|never| match never {});
    if let ValidationOutcome::Rejected { violations } = outcome {
        tracing::info!(%kind, violations = violations.len(), "Commit rejected");
        return Err(AppError::Rejected(violations));
    }

    let stored = store.commit(body.record, &body.mode)?;
    tracing::info!(%kind, key = ?stored.identity(), "Record committed");

    let status = match body.mode {
        WriteMode::Create => StatusCode::CREATED,
        WriteMode::Update { .. } => StatusCode::OK,
    };
    Ok((status, Json(DataResponse { data: stored })))
}

/// Request body for the activate / de-activate action.
#[derive(Debug, Deserialize)]
pub struct ToggleActiveRequest {
    pub kind: RecordKind,
    pub keys: Vec<NaturalKey>,
}

/// Response payload for the activate / de-activate action.
#[derive(Debug, Serialize)]
pub struct ToggleActiveResponse {
    pub changed: usize,
}

/// POST /api/v1/records/activate
pub async fn toggle_active(
    State(state): State<AppState>,
    Json(body): Json<ToggleActiveRequest>,
) -> AppResult<Json<DataResponse<ToggleActiveResponse>>> {
    if body.keys.is_empty() {
        return Err(AppError::BadRequest(
            "keys array must not be empty".to_string(),
        ));
    }
    let changed = state
        .store
        .write()
        .await
        .toggle_active(body.kind, &body.keys)?;
    tracing::info!(kind = %body.kind, changed, "Toggled active flag");
    Ok(Json(DataResponse {
        data: ToggleActiveResponse { changed },
    }))
}
