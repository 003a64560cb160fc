//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod car_repo;

pub use car_repo::{CarRepo, UniquenessProbe};
