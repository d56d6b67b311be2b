//! Shared domain primitives for the Inkwell writing service.
//!
//! Everything here is free of I/O so both the store and the HTTP layer can
//! depend on it.

pub mod error;
pub mod types;
pub mod validation;
