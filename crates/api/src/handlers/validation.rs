//! Handlers for the `/validation` resource.
//!
//! Dry-run checks only: nothing is committed. Each endpoint answers `200`
//! with the validation outcome, accepted or rejected.

use axum::extract::State;
use axum::Json;
use edicfg_core::records::{ConfigRecord, Confirmrule, Partner, Route, Translate};
use edicfg_core::validation::evaluator;
use edicfg_core::validation::keys::WriteMode;
use edicfg_core::validation::rules::ValidationOutcome;
use edicfg_core::validation::validator::ConfigValidator;
use serde::Deserialize;

use crate::response::DataResponse;
use crate::state::AppState;

type OutcomeResponse = Json<DataResponse<ValidationOutcome>>;

/// POST /api/v1/validation/partner
pub async fn validate_partner(Json(candidate): Json<Partner>) -> OutcomeResponse {
    respond("partner", evaluator::validate_partner(&candidate))
}

/// POST /api/v1/validation/route
pub async fn validate_route(Json(candidate): Json<Route>) -> OutcomeResponse {
    respond("route", evaluator::validate_route(&candidate))
}

/// POST /api/v1/validation/confirmrule
pub async fn validate_confirmrule(Json(candidate): Json<Confirmrule>) -> OutcomeResponse {
    respond("confirmrule", evaluator::validate_confirmrule(&candidate))
}

/// POST /api/v1/validation/translate
///
/// Checks the binding key against the translations currently stored.
pub async fn validate_translate(
    State(state): State<AppState>,
    Json(candidate): Json<Translate>,
) -> OutcomeResponse {
    let store = state.store.read().await;
    let outcome = evaluator::validate_translate(&candidate, &store.snapshot().translates);
    respond("translate", outcome)
}

/// Request body for the full validation endpoint.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub record: ConfigRecord,
    #[serde(default)]
    pub mode: WriteMode,
}

/// POST /api/v1/validation/validate
///
/// Column checks, the record's own rule and key uniqueness, as a create or
/// an update.
pub async fn validate_record(
    State(state): State<AppState>,
    Json(body): Json<ValidateRequest>,
) -> OutcomeResponse {
    let store = state.store.read().await;
    let outcome = ConfigValidator::new(&*store)
        .validate(&body.record, &body.mode)
        .unwrap_or_else(|never| match never {});
    respond(body.record.kind().as_str(), outcome)
}

fn respond(kind: &str, outcome: ValidationOutcome) -> OutcomeResponse {
    match &outcome {
        ValidationOutcome::Accepted => tracing::debug!(kind, "Candidate accepted"),
        ValidationOutcome::Rejected { violations } => {
            tracing::info!(kind, violations = violations.len(), "Candidate rejected")
        }
    }
    Json(DataResponse { data: outcome })
}
