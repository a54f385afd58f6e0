//! Report module - format-independent layout of assessment reports.
//!
//! - `markup` - The inline markup vocabulary and escaping
//! - `document` - `ReportDocument` block model
//! - `builder` - Assembles documents from risk profiles

mod builder;
mod document;
pub mod markup;

pub use builder::{ReportBuilder, REPORT_TITLE};
pub use document::{Block, HeadingLevel, ReportDocument};
pub use markup::{Inline, TextStyle};
