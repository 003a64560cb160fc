pub mod cars;
pub mod pages;
