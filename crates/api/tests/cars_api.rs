//! HTTP-level integration tests for the car endpoints and listing page.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get, post_json, post_raw};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_car_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/cars",
        serde_json::json!({
            "make": "Ford", "model": "Fusion", "year": 2015, "vin": "abcdefghijklm0099"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let car = &json["data"];
    assert!(car["id"].is_number());
    assert_eq!(car["vin"], "ABCDEFGHIJKLM0099");
    assert_eq!(car["color"], "black");
    assert_eq!(car["category"], "car");
    assert_eq!(car["cylinders"], 4);
    assert!(car["created_at"].is_string());
    assert!(car["updated_at"].is_string());
    assert_eq!(car.as_object().unwrap().len(), 13);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_missing_fields_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/cars",
        serde_json::json!({"make": "Ford", "vin": "abcd"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["errors"],
        serde_json::json!([
            {"field": "vin", "message": "invalid representation"},
            {"field": "model", "message": "can't be blank"},
            {"field": "year", "message": "can't be blank"},
            {"field": "vin", "message": "is the wrong length (should be 17 characters)"},
        ])
    );

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/v1/cars").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_vin_returns_422_taken(pool: PgPool) {
    carlot_db::seed::seed_cars(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/cars",
        serde_json::json!({
            "make": "Toyota", "model": "Camry", "year": 2015, "vin": "abcdefghijklm0012"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"],
        serde_json::json!([
            {"field": "vin", "message": "has already been taken"},
            {"field": "make", "message": "has already been taken"},
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_null_cylinders_and_category_return_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/cars",
        serde_json::json!({
            "make": "Ford", "model": "Fusion", "year": 2015, "vin": "ABCDEFGHIJKLM0099",
            "category": null, "cylinders": null
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"],
        serde_json::json!([
            {"field": "cylinders", "message": "is not a valid cylinder"},
            {"field": "category", "message": "is not a valid category"},
        ])
    );

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/v1/cars").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_integer_year_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(
        app,
        "/api/v1/cars",
        r#"{"make": "Ford", "model": "Fusion", "year": "soon", "vin": "ABCDEFGHIJKLM0099"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_car_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/cars",
            serde_json::json!({
                "make": "Ford", "model": "Fusion", "year": 2015,
                "vin": "ABCDEFGHIJKLM0099", "category": "sport", "cylinders": 6
            }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/cars/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["category"], "sport");
    assert_eq!(json["data"]["cylinders"], 6);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_car_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/cars/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_cars_in_insertion_order(pool: PgPool) {
    carlot_db::seed::seed_cars(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/cars").await).await;
    let makes: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["make"].as_str().unwrap())
        .collect();
    assert_eq!(makes, vec!["Toyota", "Dodge", "Honda"]);
}

// ---------------------------------------------------------------------------
// Listing page
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cars_page_lists_seeded_makes(pool: PgPool) {
    carlot_db::seed::seed_cars(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/cars").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("Cars"));
    assert!(html.contains("Toyota"));
    assert!(html.contains("Dodge"));
    assert!(html.contains("Honda"));
}
