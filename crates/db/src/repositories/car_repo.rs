//! Repository for the `cars` table.

use carlot_core::car::{CarCandidate, ValidCar};
use carlot_core::types::DbId;
use carlot_core::validation::rules::{normalize, MSG_TAKEN};
use carlot_core::validation::{validate_car, ExistingCars, ValidationErrors};
use sqlx::PgPool;

use crate::error::SaveError;
use crate::models::car::Car;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, make, model, year, vin, color, category, cylinders, \
                       displacement, mpg, hp, created_at, updated_at";

pub const UQ_CARS_VIN: &str = "uq_cars_vin";
pub const UQ_CARS_MAKE_MODEL_YEAR: &str = "uq_cars_make_model_year";

/// Stored rows that collide with a candidate, as seen at probe time.
#[derive(Debug, Clone, Default)]
pub struct UniquenessProbe {
    pub vin_match: Option<Car>,
    pub make_model_year_match: Option<Car>,
}

impl ExistingCars for UniquenessProbe {
    fn vin_taken(&self, vin: &str) -> bool {
        self.vin_match.as_ref().is_some_and(|c| c.vin == vin)
    }

    fn make_model_year_taken(&self, make: &str, model: &str, year: i32) -> bool {
        self.make_model_year_match
            .as_ref()
            .is_some_and(|c| c.make == make && c.model == model && c.year == year)
    }
}

/// Provides lookups, validated inserts and bulk deletion for cars.
pub struct CarRepo;

impl CarRepo {
    /// Validate `candidate` and insert it, returning the created row.
    ///
    /// The candidate's VIN is uppercased in place. On rule violations no row
    /// is written and [`SaveError::Invalid`] carries the ordered errors.
    pub async fn create(pool: &PgPool, candidate: &mut CarCandidate) -> Result<Car, SaveError> {
        normalize(candidate);
        let probe = Self::probe(pool, candidate).await?;

        let car = match validate_car(candidate, &probe) {
            Ok(car) => car,
            Err(errors) => {
                tracing::debug!(%errors, "Car rejected by validation");
                return Err(SaveError::Invalid(errors));
            }
        };

        Self::insert_valid(pool, &car).await
    }

    /// Insert a car that already passed validation.
    ///
    /// Rows written since the probe can still collide; a unique violation on
    /// either car constraint comes back as the matching "taken" error.
    pub async fn insert_valid(pool: &PgPool, car: &ValidCar) -> Result<Car, SaveError> {
        let query = format!(
            "INSERT INTO cars (make, model, year, vin, color, category, cylinders, displacement, mpg, hp)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Car>(&query)
            .bind(&car.make)
            .bind(&car.model)
            .bind(car.year)
            .bind(&car.vin)
            .bind(&car.color)
            .bind(&car.category)
            .bind(car.cylinders)
            .bind(car.displacement)
            .bind(car.mpg)
            .bind(car.hp)
            .fetch_one(pool)
            .await;

        match inserted {
            Ok(row) => {
                tracing::info!(id = row.id, vin = %row.vin, "Car created");
                Ok(row)
            }
            Err(err) => match taken_error(&err) {
                Some(errors) => {
                    tracing::warn!(%errors, "Car insert lost a uniqueness race");
                    Err(SaveError::Invalid(errors))
                }
                None => Err(SaveError::Database(err)),
            },
        }
    }

    /// Look up the rows the uniqueness rules need for `candidate`.
    ///
    /// Lookups whose key is incomplete are skipped.
    pub async fn probe(
        pool: &PgPool,
        candidate: &CarCandidate,
    ) -> Result<UniquenessProbe, sqlx::Error> {
        let vin_match = match candidate.vin.as_deref() {
            Some(vin) => Self::find_by_vin(pool, vin).await?,
            None => None,
        };

        let make_model_year_match = match (
            candidate.make.as_deref(),
            candidate.model.as_deref(),
            candidate.year,
        ) {
            (Some(make), Some(model), Some(year)) => {
                Self::find_by_make_model_year(pool, make, model, year).await?
            }
            _ => None,
        };

        Ok(UniquenessProbe {
            vin_match,
            make_model_year_match,
        })
    }

    /// Find a car by VIN. The lookup uppercases `vin` first.
    pub async fn find_by_vin(pool: &PgPool, vin: &str) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE vin = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(vin.to_uppercase())
            .fetch_optional(pool)
            .await
    }

    /// Find the car sharing `(make, model, year)`, if any.
    pub async fn find_by_make_model_year(
        pool: &PgPool,
        make: &str,
        model: &str,
        year: i32,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cars WHERE make = $1 AND model = $2 AND year = $3");
        sqlx::query_as::<_, Car>(&query)
            .bind(make)
            .bind(model)
            .bind(year)
            .fetch_optional(pool)
            .await
    }

    /// Find a car by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cars in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars ORDER BY id ASC");
        sqlx::query_as::<_, Car>(&query).fetch_all(pool).await
    }

    /// Delete every car. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars").execute(pool).await?;
        Ok(result.rows_affected())
    }
}

/// Map a unique violation on one of the car constraints to the field error
/// the validator would have reported.
fn taken_error(err: &sqlx::Error) -> Option<ValidationErrors> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    // PostgreSQL unique constraint violation: error code 23505
    if db_err.code().as_deref() != Some("23505") {
        return None;
    }
    let field = match db_err.constraint()? {
        UQ_CARS_VIN => "vin",
        UQ_CARS_MAKE_MODEL_YEAR => "make",
        _ => return None,
    };
    let mut errors = ValidationErrors::new();
    errors.add(field, MSG_TAKEN);
    Some(errors)
}
