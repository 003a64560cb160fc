//! The car rule set.
//!
//! Each rule inspects the (already normalized) candidate and appends to the
//! accumulator. Rules never stop evaluation; [`CAR_RULES`] fixes the order
//! in which they run, which is also the order of the reported errors.

use std::sync::LazyLock;

use regex::Regex;

use super::errors::ValidationErrors;
use super::existing::ExistingCars;
use crate::car::{
    CarCandidate, CATEGORIES, MAX_CYLINDERS, MAX_YEAR, MIN_CYLINDERS, MIN_YEAR, VIN_LENGTH,
};

pub const MSG_BLANK: &str = "can't be blank";
pub const MSG_VIN_REPRESENTATION: &str = "invalid representation";
pub const MSG_VIN_LENGTH: &str = "is the wrong length (should be 17 characters)";
pub const MSG_TAKEN: &str = "has already been taken";
pub const MSG_YEAR: &str = "is not a valid year";
pub const MSG_CYLINDERS: &str = "is not a valid cylinder";
pub const MSG_CATEGORY: &str = "is not a valid category";

static VIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Z]{17}$").expect("valid regex"));

/// A single validation rule.
pub type Rule = fn(&CarCandidate, &dyn ExistingCars, &mut ValidationErrors);

/// Every rule, in evaluation order.
pub const CAR_RULES: &[Rule] = &[
    check_vin_representation,
    check_presence,
    check_vin_length,
    check_vin_unique,
    check_make_model_year_unique,
    check_year,
    check_cylinders,
    check_category,
];

/// Uppercase the VIN in place. Runs before any rule.
pub fn normalize(candidate: &mut CarCandidate) {
    if let Some(vin) = candidate.vin.as_mut() {
        *vin = vin.to_uppercase();
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn check_vin_representation(
    candidate: &CarCandidate,
    _existing: &dyn ExistingCars,
    errors: &mut ValidationErrors,
) {
    if let Some(vin) = candidate.vin.as_deref() {
        if !VIN_RE.is_match(vin) {
            errors.add("vin", MSG_VIN_REPRESENTATION);
        }
    }
}

pub fn check_presence(
    candidate: &CarCandidate,
    _existing: &dyn ExistingCars,
    errors: &mut ValidationErrors,
) {
    if is_blank(candidate.make.as_deref()) {
        errors.add("make", MSG_BLANK);
    }
    if is_blank(candidate.model.as_deref()) {
        errors.add("model", MSG_BLANK);
    }
    if candidate.year.is_none() {
        errors.add("year", MSG_BLANK);
    }
    if is_blank(candidate.vin.as_deref()) {
        errors.add("vin", MSG_BLANK);
    }
}

/// A missing VIN counts as length zero.
pub fn check_vin_length(
    candidate: &CarCandidate,
    _existing: &dyn ExistingCars,
    errors: &mut ValidationErrors,
) {
    let len = candidate.vin.as_deref().map_or(0, |v| v.chars().count());
    if len != VIN_LENGTH {
        errors.add("vin", MSG_VIN_LENGTH);
    }
}

pub fn check_vin_unique(
    candidate: &CarCandidate,
    existing: &dyn ExistingCars,
    errors: &mut ValidationErrors,
) {
    if let Some(vin) = candidate.vin.as_deref() {
        if existing.vin_taken(vin) {
            errors.add("vin", MSG_TAKEN);
        }
    }
}

/// Reported on `make`; skipped unless all three values are present.
pub fn check_make_model_year_unique(
    candidate: &CarCandidate,
    existing: &dyn ExistingCars,
    errors: &mut ValidationErrors,
) {
    if let (Some(make), Some(model), Some(year)) = (
        candidate.make.as_deref(),
        candidate.model.as_deref(),
        candidate.year,
    ) {
        if existing.make_model_year_taken(make, model, year) {
            errors.add("make", MSG_TAKEN);
        }
    }
}

pub fn check_year(
    candidate: &CarCandidate,
    _existing: &dyn ExistingCars,
    errors: &mut ValidationErrors,
) {
    if let Some(year) = candidate.year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            errors.add("year", MSG_YEAR);
        }
    }
}

/// A missing count is not a valid cylinder.
pub fn check_cylinders(
    candidate: &CarCandidate,
    _existing: &dyn ExistingCars,
    errors: &mut ValidationErrors,
) {
    let valid = candidate.cylinders.is_some_and(|cylinders| {
        (MIN_CYLINDERS..=MAX_CYLINDERS).contains(&cylinders) && cylinders % 2 == 0
    });
    if !valid {
        errors.add("cylinders", MSG_CYLINDERS);
    }
}

/// A missing category is outside the enumeration.
pub fn check_category(
    candidate: &CarCandidate,
    _existing: &dyn ExistingCars,
    errors: &mut ValidationErrors,
) {
    let valid = candidate
        .category
        .as_deref()
        .is_some_and(|category| CATEGORIES.contains(&category));
    if !valid {
        errors.add("category", MSG_CATEGORY);
    }
}
