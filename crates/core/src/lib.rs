//! Shared leaf types for the songmap backend: id and timestamp aliases,
//! the domain error taxonomy, and geographic primitives.

pub mod error;
pub mod geo;
pub mod types;
