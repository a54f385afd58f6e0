//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the risk assessment domain.

mod errors;
mod ids;
mod score;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::QuestionId;
pub use score::RiskScore;
