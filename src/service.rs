use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use reqwest::Client;
use std::path::PathBuf;
use tracing::{error, info};

use crate::{
    config::{EmployeeDetails, JiraCredentials, SettingsProvider},
    helpers::{jira, period::ReportingPeriod, xlsx::create_creative_tax_workbook},
    models::report::{ReportData, TaskRow},
};

/// Result of a report run.
pub enum ReportOutcome {
    /// Jira returned no issues; carries the server message or a fallback.
    NoIssues(String),
    Written { path: PathBuf, tasks: Vec<TaskRow> },
}

/// Fetches done issues from Jira and writes the creative tax workbook.
pub struct ReportService {
    pub jira_client: Client,
    pub credentials: JiraCredentials,
    pub output_dir: PathBuf,
}

impl ReportService {
    pub fn new(jira_client: Client, credentials: JiraCredentials, output_dir: PathBuf) -> Self {
        info!("Creating new ReportService instance");
        Self {
            jira_client,
            credentials,
            output_dir,
        }
    }

    pub async fn generate(
        &self,
        period: &ReportingPeriod,
        settings: &mut impl SettingsProvider,
    ) -> Result<ReportOutcome> {
        self.generate_on(period, settings, Local::now().date_naive())
            .await
    }

    /// Same as [`generate`](Self::generate) with an explicit submission date.
    pub async fn generate_on(
        &self,
        period: &ReportingPeriod,
        settings: &mut impl SettingsProvider,
        submitted_on: NaiveDate,
    ) -> Result<ReportOutcome> {
        info!("Generating report for period: {}", period);

        let search = jira::search_done_issues(&self.jira_client, &self.credentials, period).await?;

        if search.issues.is_empty() {
            let message = search.failure_message();
            error!("No issues returned by Jira: {}", message);
            return Ok(ReportOutcome::NoIssues(message));
        }

        let details = EmployeeDetails::collect(settings)?;

        let data = ReportData::build(&search.issues, &details, period, submitted_on)?;
        info!("Built report data with {} tasks", data.tasks.len());

        let workbook = create_creative_tax_workbook(&data)?;

        let path = self.output_dir.join(period.file_name());
        std::fs::write(&path, &workbook)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report saved to {}", path.display());

        Ok(ReportOutcome::Written {
            path,
            tasks: data.tasks,
        })
    }
}
