//! Error handling for the HoopConnect core.

pub mod domain;

pub use domain::DomainError;
