pub mod jira;
pub mod report;
