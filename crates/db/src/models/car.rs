//! Car entity model.

use carlot_core::car::ValidCar;
use carlot_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A car row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Car {
    pub id: DbId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub color: Option<String>,
    pub category: String,
    pub cylinders: i32,
    pub displacement: Option<f64>,
    pub mpg: Option<i32>,
    pub hp: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Car> for ValidCar {
    fn from(car: Car) -> Self {
        ValidCar {
            make: car.make,
            model: car.model,
            year: car.year,
            vin: car.vin,
            color: car.color,
            category: car.category,
            cylinders: car.cylinders,
            displacement: car.displacement,
            mpg: car.mpg,
            hp: car.hp,
        }
    }
}
