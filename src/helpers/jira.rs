use anyhow::{Context, Result, anyhow};
use reqwest::{Client, header};
use tracing::{error, info};

use crate::{config::JiraCredentials, helpers::period::ReportingPeriod, models};

pub fn jira_client_init() -> Result<Client> {
    info!("Initializing Jira client");

    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    info!("Building Jira client with headers");
    match Client::builder().default_headers(headers).build() {
        Ok(client) => {
            info!("Jira client initialized successfully");
            Ok(client)
        }
        Err(e) => {
            error!("Failed to build Jira client: {}", e);
            Err(e.into())
        }
    }
}

/// Issues assigned to the current user and done within `period`.
pub async fn search_done_issues(
    client: &Client,
    credentials: &JiraCredentials,
    period: &ReportingPeriod,
) -> Result<models::jira::SearchResponse> {
    let jql = utils::build_jql(period);
    let url = utils::search_url(&credentials.base_url);
    info!("Searching Jira issues at {} for period {}", url, period);

    let response = client
        .get(&url)
        .basic_auth(&credentials.email, Some(&credentials.api_token))
        .query(&[("jql", jql.as_str())])
        .send()
        .await
        .map_err(|e| {
            error!("Failed to send request to Jira API: {}", e);
            e
        })
        .context("Jira search request failed")?;

    let status = response.status();
    let text = response
        .text()
        .await
        .context("Failed to read Jira response body")?;
    info!(
        "Received Jira response with status {}, length: {} chars",
        status,
        text.len()
    );

    // Jira reports bad queries as a JSON body with errorMessages, so the body
    // is parsed whatever the status
    match serde_json::from_str::<models::jira::SearchResponse>(&text) {
        Ok(search) => {
            if !status.is_success() {
                error!(
                    "Jira API returned error status {}: {:?}",
                    status, search.error_messages
                );
            }
            info!(
                "Successfully parsed Jira response with {} issues",
                search.issues.len()
            );
            Ok(search)
        }
        Err(e) => {
            error!("Failed to parse Jira response: {}", e);
            error!("Raw response: {}", text);
            if status.is_success() {
                Err(anyhow!(e).context("Jira returned an unexpected search response"))
            } else {
                Err(anyhow!("Jira API returned status {}: {}", status, text))
            }
        }
    }
}

pub mod utils {
    use tracing::info;

    use crate::helpers::period::ReportingPeriod;

    pub fn search_url(base_url: &str) -> String {
        format!("{}/rest/api/3/search", base_url.trim_end_matches('/'))
    }

    pub fn build_jql(period: &ReportingPeriod) -> String {
        let jql = format!(
            r#"Assignee = currentUser() AND status = "Done" AND updatedDate >= "{start}" and updatedDate <= "{end}""#,
            start = period.start,
            end = period.end
        );

        info!("JQL created with length: {} chars", jql.len());
        jql
    }

}
