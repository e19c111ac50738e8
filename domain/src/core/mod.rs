//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - completion models the engine can target
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod string;
