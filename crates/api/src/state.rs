/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: carlot_db::DbPool,
}
