//! Pure domain logic for the ladle recipe catalog.
//!
//! This crate has no async code and no I/O: filter composition, pagination
//! math, derived rating values, and payload validation all live here so they
//! can be tested in isolation and reused by the store and API layers.

pub mod error;
pub mod filter;
pub mod pagination;
pub mod rating;
pub mod recipe;
pub mod types;
pub mod validation;
