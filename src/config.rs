//! Settings needed to talk to Jira and fill the report header.
//!
//! Every setting comes from its environment variable (a `.env` file is loaded
//! at startup) and falls back to an interactive prompt.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use crate::helpers::prompt::Prompter;

pub const DEFAULT_JIRA_URL: &str = "https://oandacorp.atlassian.net";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    JiraUrl,
    ApiToken,
    Email,
    EmployeeId,
    JobPosition,
}

impl Setting {
    pub fn env_var(&self) -> &'static str {
        match self {
            Setting::JiraUrl => "JIRA_URL",
            Setting::ApiToken => "JIRA_API_TOKEN",
            Setting::Email => "EMAIL",
            Setting::EmployeeId => "EMPLOYEE_ID",
            Setting::JobPosition => "JOB_POSITION",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Setting::JiraUrl => "Jira URL (leave blank for https://oandacorp.atlassian.net)",
            Setting::ApiToken => "Provide Jira API Token",
            Setting::Email => "What is your email address connected to jira?",
            Setting::EmployeeId => "Employee ID",
            Setting::JobPosition => "Stanowisko/Job position",
        }
    }
}

pub trait SettingsProvider {
    fn get(&mut self, setting: Setting) -> Result<String>;
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Environment first, prompt second.
pub struct EnvSettings<R, W> {
    prompter: Prompter<R, W>,
    lookup: EnvLookup,
}

impl<R: BufRead, W: Write> EnvSettings<R, W> {
    pub fn new(prompter: Prompter<R, W>) -> Self {
        Self::with_lookup(prompter, |name: &str| std::env::var(name).ok())
    }

    pub fn with_lookup(
        prompter: Prompter<R, W>,
        lookup: impl Fn(&str) -> Option<String> + 'static,
    ) -> Self {
        Self {
            prompter,
            lookup: Box::new(lookup),
        }
    }

    pub fn prompter(&mut self) -> &mut Prompter<R, W> {
        &mut self.prompter
    }
}

impl<R: BufRead, W: Write> SettingsProvider for EnvSettings<R, W> {
    fn get(&mut self, setting: Setting) -> Result<String> {
        match (self.lookup)(setting.env_var()).filter(|value| !value.is_empty()) {
            Some(value) => {
                info!("Read {} from environment", setting.env_var());
                Ok(value)
            }
            None => self.prompter.ask(setting.prompt()),
        }
    }
}

#[derive(Clone)]
pub struct JiraCredentials {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

impl JiraCredentials {
    pub fn collect(provider: &mut impl SettingsProvider) -> Result<Self> {
        let mut base_url = provider.get(Setting::JiraUrl)?;
        if base_url.is_empty() {
            base_url = DEFAULT_JIRA_URL.to_string();
        }

        let api_token = provider.get(Setting::ApiToken)?;
        let email = provider.get(Setting::Email)?;

        Ok(Self {
            base_url,
            email,
            api_token,
        })
    }
}

// Keeps the token out of logs
impl std::fmt::Debug for JiraCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraCredentials")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub employee_id: String,
    pub job_position: String,
}

impl EmployeeDetails {
    pub fn collect(provider: &mut impl SettingsProvider) -> Result<Self> {
        Ok(Self {
            employee_id: provider.get(Setting::EmployeeId)?,
            job_position: provider.get(Setting::JobPosition)?,
        })
    }
}
