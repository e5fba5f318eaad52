//! Route definitions for the `/records` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// POST   /            -> commit_record
/// POST   /activate    -> toggle_active
/// GET    /{kind}      -> list_records
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(records::commit_record))
        .route("/activate", post(records::toggle_active))
        .route("/{kind}", get(records::list_records))
}
