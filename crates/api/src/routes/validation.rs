//! Route definitions for the `/validation` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::validation;
use crate::state::AppState;

/// Routes mounted at `/validation`.
///
/// ```text
/// POST   /partner       -> validate_partner
/// POST   /route         -> validate_route
/// POST   /confirmrule   -> validate_confirmrule
/// POST   /translate     -> validate_translate
/// POST   /validate      -> validate_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/partner", post(validation::validate_partner))
        .route("/route", post(validation::validate_route))
        .route("/confirmrule", post(validation::validate_confirmrule))
        .route("/translate", post(validation::validate_translate))
        .route("/validate", post(validation::validate_record))
}
