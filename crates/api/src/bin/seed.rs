//! Replace the contents of the `cars` table with the fixed seed cars.

use carlot_api::config::ServerConfig;
use carlot_api::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    init_tracing(config.log_format);

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = carlot_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    carlot_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let cars = carlot_db::seed::seed_cars(&pool)
        .await
        .expect("Failed to seed cars");

    for car in &cars {
        tracing::info!(id = car.id, make = %car.make, model = %car.model, year = car.year, "Seeded car");
    }
}
