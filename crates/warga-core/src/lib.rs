//! Core types and trait definitions for the Warga population registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing heavier than
//! `chrono` and `serde`.

pub mod date;
pub mod error;
pub mod photo;
pub mod query;
pub mod record;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
