//! Domain types and pure logic for the car lot.
//!
//! Nothing in this crate touches the database or HTTP; the validation
//! pipeline reads existing records only through [`validation::ExistingCars`].

pub mod car;
pub mod error;
pub mod types;
pub mod validation;
