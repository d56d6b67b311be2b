//! Entity models and their create/update DTOs.
//!
//! Field names are camelCase on the wire to match the front-end contract.

pub mod chapter;
pub mod project;
