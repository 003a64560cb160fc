//! Car validation pipeline.
//!
//! Provides the field-error types, the ordered rule list, and the evaluator
//! that runs it. All pure logic; uniqueness rules consult an
//! [`ExistingCars`] view supplied by the caller.

pub mod errors;
pub mod evaluator;
pub mod existing;
pub mod rules;

pub use errors::{FieldError, ValidationErrors};
pub use evaluator::validate_car;
pub use existing::ExistingCars;
