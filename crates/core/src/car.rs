//! Car candidate and validated-car types.
//!
//! A [`CarCandidate`] is what callers hand to the validator: the four
//! identifying fields are optional so that missing input can be reported,
//! and the remaining attributes carry their column defaults when omitted.
//! An explicit `null` for a defaulted attribute is kept as `None`; for
//! `category` and `cylinders` the validator rejects it.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "black";
pub const DEFAULT_CATEGORY: &str = "car";
pub const DEFAULT_CYLINDERS: i32 = 4;
pub const DEFAULT_DISPLACEMENT: f64 = 0.0;
pub const DEFAULT_MPG: i32 = 0;
pub const DEFAULT_HP: i32 = 0;

/// Accepted values for `category`.
pub const CATEGORIES: &[&str] = &["car", "sport", "suv", "truck"];

/// Required VIN length, in characters.
pub const VIN_LENGTH: usize = 17;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2020;

pub const MIN_CYLINDERS: i32 = 4;
pub const MAX_CYLINDERS: i32 = 12;

fn default_color() -> Option<String> {
    Some(DEFAULT_COLOR.to_string())
}

fn default_category() -> Option<String> {
    Some(DEFAULT_CATEGORY.to_string())
}

fn default_cylinders() -> Option<i32> {
    Some(DEFAULT_CYLINDERS)
}

fn default_displacement() -> Option<f64> {
    Some(DEFAULT_DISPLACEMENT)
}

fn default_mpg() -> Option<i32> {
    Some(DEFAULT_MPG)
}

fn default_hp() -> Option<i32> {
    Some(DEFAULT_HP)
}

/// An unsaved car as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarCandidate {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default = "default_color")]
    pub color: Option<String>,
    #[serde(default = "default_category")]
    pub category: Option<String>,
    #[serde(default = "default_cylinders")]
    pub cylinders: Option<i32>,
    #[serde(default = "default_displacement")]
    pub displacement: Option<f64>,
    #[serde(default = "default_mpg")]
    pub mpg: Option<i32>,
    #[serde(default = "default_hp")]
    pub hp: Option<i32>,
}

impl Default for CarCandidate {
    fn default() -> Self {
        Self {
            make: None,
            model: None,
            year: None,
            vin: None,
            color: default_color(),
            category: default_category(),
            cylinders: default_cylinders(),
            displacement: default_displacement(),
            mpg: default_mpg(),
            hp: default_hp(),
        }
    }
}

impl CarCandidate {
    /// Candidate with the four identifying fields set and every other
    /// attribute at its default.
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        vin: impl Into<String>,
    ) -> Self {
        Self {
            make: Some(make.into()),
            model: Some(model.into()),
            year: Some(year),
            vin: Some(vin.into()),
            ..Self::default()
        }
    }
}

/// A candidate that passed every validation rule.
///
/// Only produced by [`crate::validation::validate_car`], so the identifying
/// fields, `category` and `cylinders` are guaranteed present and the VIN is
/// already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCar {
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
}
