//! AI Risk Assessment - Questionnaire scoring and reporting service
//!
//! This crate scores AI-governance questionnaire answers against a
//! spreadsheet of weighted questions, produces a risk profile, and renders
//! it as a downloadable PDF report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
