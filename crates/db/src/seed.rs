//! Fixed seed data for a fresh lot.

use carlot_core::car::CarCandidate;

use crate::error::SaveError;
use crate::models::car::Car;
use crate::repositories::CarRepo;
use crate::DbPool;

/// `(make, model, year, vin)` of every seeded car, in insertion order.
pub const SEED_CARS: [(&str, &str, i32, &str); 3] = [
    ("Toyota", "Camry", 2015, "ABCDEFGHIJKLM0012"),
    ("Dodge", "Journey", 2013, "ABCDEFGHIJKLM0011"),
    ("Honda", "Civic", 2011, "ABCDEFGHIJKLM0013"),
];

/// Clear the `cars` table and insert [`SEED_CARS`] through the validated
/// insert path. Returns the created rows.
pub async fn seed_cars(pool: &DbPool) -> Result<Vec<Car>, SaveError> {
    let removed = CarRepo::delete_all(pool).await?;
    tracing::info!(removed, "Cleared cars table");

    let mut created = Vec::with_capacity(SEED_CARS.len());
    for (make, model, year, vin) in SEED_CARS {
        let mut candidate = CarCandidate::new(make, model, year, vin);
        created.push(CarRepo::create(pool, &mut candidate).await?);
    }

    tracing::info!(count = created.len(), "Seeded cars");
    Ok(created)
}
