//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Questionnaire items, answers and weighted risk scoring
//! - `report` - Layout of assessment reports, independent of output format

pub mod assessment;
pub mod foundation;
pub mod report;
