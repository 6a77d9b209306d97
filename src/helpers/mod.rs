pub mod excerpt;
pub mod jira;
pub mod period;
pub mod prompt;
pub mod xlsx;
