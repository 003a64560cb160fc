//! Handlers for the `/cars` JSON resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use carlot_core::car::CarCandidate;
use carlot_core::error::CoreError;
use carlot_core::types::DbId;
use carlot_db::models::car::Car;
use carlot_db::repositories::CarRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/cars
///
/// Validate and store a car. Returns 201 with the stored row, or 422 with
/// the ordered field errors when any rule fails.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CarCandidate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Car>>)> {
    let Json(mut candidate) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let car = CarRepo::create(&state.pool, &mut candidate).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: car })))
}

/// GET /api/v1/cars
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Car>>>> {
    let cars = CarRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: cars }))
}

/// GET /api/v1/cars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Car>>> {
    let car = CarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Car", id }))?;
    Ok(Json(DataResponse { data: car }))
}
