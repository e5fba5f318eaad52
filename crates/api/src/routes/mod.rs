pub mod health;
pub mod records;
pub mod validation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /validation/partner                  validate a partner (POST)
/// /validation/route                    validate a route (POST)
/// /validation/confirmrule              validate a confirm rule (POST)
/// /validation/translate                validate a translation vs. stored ones (POST)
/// /validation/validate                 full check of any record (POST)
///
/// /records                             validate and commit a record (POST)
/// /records/activate                    toggle active on a selection (POST)
/// /records/{kind}                      list stored records of a kind (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/validation", validation::router())
        .nest("/records", records::router())
}
