//! Route definitions for the `/cars` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cars;
use crate::state::AppState;

/// Routes mounted at `/cars`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cars::list).post(cars::create))
        .route("/{id}", get(cars::get_by_id))
}
