use anyhow::Result;
use chrono::Local;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use jira_creative_report::{
    EnvSettings, JiraCredentials, ReportOutcome, ReportService, helpers::jira,
    helpers::prompt::Prompter,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting Jira creative report");

    if let Err(e) = run().await {
        error!("Report failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let mut settings = EnvSettings::new(Prompter::new(io::stdin().lock(), io::stdout()));

    let period = settings
        .prompter()
        .reporting_period(Local::now().date_naive())?;
    let credentials = JiraCredentials::collect(&mut settings)?;

    let service = ReportService::new(
        jira::jira_client_init()?,
        credentials,
        std::env::current_dir()?,
    );

    match service.generate(&period, &mut settings).await? {
        ReportOutcome::NoIssues(message) => {
            println!("{}", message);
        }
        ReportOutcome::Written { path, tasks } => {
            for task in &tasks {
                println!("{}", task);
            }
            println!("{} tasks,", tasks.len());
            let keys: Vec<&str> = tasks.iter().map(|task| task.code.as_str()).collect();
            println!("{:?}", keys);
            println!("Saved {}", path.display());
        }
    }
    Ok(())
}
