pub mod cars;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// JSON API routes, mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/cars", cars::router())
}

/// Server-rendered pages, mounted at the root.
///
/// ```text
/// GET /cars -> cars_page
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/cars", get(pages::cars_page))
}
