//! Jira Creative Report Library
//!
//! This library provides functionality for fetching the issues a user
//! completed in a month from Jira Cloud and writing them into a creative
//! work (tax declaration) spreadsheet.

pub mod config;
pub mod helpers;
pub mod models;
pub mod service;

pub use service::{ReportOutcome, ReportService};

// Re-export key types for convenience
pub use config::{EmployeeDetails, EnvSettings, JiraCredentials, Setting, SettingsProvider};
pub use helpers::period::ReportingPeriod;
pub use models::jira::{RichTextNode, SearchResponse};
pub use models::report::{ReportData, TaskRow};
