//! Read-only view of stored cars consulted by the uniqueness rules.

use crate::car::ValidCar;

/// Answers the two uniqueness questions the rule set asks of the store.
///
/// `vin` is always passed already normalized (uppercase).
pub trait ExistingCars {
    fn vin_taken(&self, vin: &str) -> bool;

    fn make_model_year_taken(&self, make: &str, model: &str, year: i32) -> bool;
}

impl ExistingCars for [ValidCar] {
    fn vin_taken(&self, vin: &str) -> bool {
        self.iter().any(|c| c.vin == vin)
    }

    fn make_model_year_taken(&self, make: &str, model: &str, year: i32) -> bool {
        self.iter()
            .any(|c| c.make == make && c.model == model && c.year == year)
    }
}

impl ExistingCars for Vec<ValidCar> {
    fn vin_taken(&self, vin: &str) -> bool {
        self.as_slice().vin_taken(vin)
    }

    fn make_model_year_taken(&self, make: &str, model: &str, year: i32) -> bool {
        self.as_slice().make_model_year_taken(make, model, year)
    }
}
