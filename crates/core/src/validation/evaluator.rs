//! Rule evaluator — pure logic, no database access.

use super::errors::ValidationErrors;
use super::existing::ExistingCars;
use super::rules::{normalize, CAR_RULES};
use crate::car::{CarCandidate, ValidCar};

/// Normalize `candidate` and evaluate every rule against it.
///
/// The VIN is uppercased in place before any rule runs, so the caller sees
/// the normalized value whether or not validation succeeds. All rules are
/// evaluated; the returned error list is in rule order.
pub fn validate_car(
    candidate: &mut CarCandidate,
    existing: &dyn ExistingCars,
) -> Result<ValidCar, ValidationErrors> {
    normalize(candidate);

    let mut errors = ValidationErrors::new();
    for rule in CAR_RULES {
        rule(candidate, existing, &mut errors);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    match (
        candidate.make.clone(),
        candidate.model.clone(),
        candidate.year,
        candidate.vin.clone(),
        candidate.category.clone(),
        candidate.cylinders,
    ) {
        (Some(make), Some(model), Some(year), Some(vin), Some(category), Some(cylinders)) => {
            Ok(ValidCar {
                make,
                model,
                year,
                vin,
                color: candidate.color.clone(),
                category,
                cylinders,
                displacement: candidate.displacement,
                mpg: candidate.mpg,
                hp: candidate.hp,
            })
        }
        // Presence, cylinder and category rules already reject this; kept total.
        _ => Err(errors),
    }
}
