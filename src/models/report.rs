use anyhow::{Result, bail};
use chrono::NaiveDate;
use std::fmt;

use crate::{
    config::EmployeeDetails,
    helpers::{excerpt, period::ReportingPeriod},
    models::jira::Issue,
};

pub const TASK_COLUMNS: [&str; 5] = [
    "number",
    "Kod w systemie/Code in system",
    "Nazwa zadania/Task",
    "Krótki opis (pierwsze 200 znaków)/Short description (first 200 characters)",
    "TKP: Typ utworu (możemy przygotować katalog z którego pracownik wybierze jeden typ utworu, np. kod źródłowy, dokumentacja oprogramowania, grafika itd.) (in Polish)",
];

pub const WORK_TYPE: &str = "kod źródłowy";

/// One report line per issue, numbered from 1 in search order.
pub struct TaskRow {
    pub number: usize,
    pub code: String,
    pub task: String,
    pub short_description: String,
    pub work_type: String,
}

impl TaskRow {
    pub fn from_issue(number: usize, issue: &Issue) -> Self {
        Self {
            number,
            code: issue.key.clone(),
            task: issue.fields.summary.clone(),
            short_description: excerpt::extract_value(issue.fields.description.as_ref()),
            work_type: WORK_TYPE.to_string(),
        }
    }

    /// Display values in [`TASK_COLUMNS`] order.
    pub fn values(&self) -> [String; 5] {
        [
            self.number.to_string(),
            self.code.clone(),
            self.task.clone(),
            self.short_description.clone(),
            self.work_type.clone(),
        ]
    }
}

impl fmt::Display for TaskRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (column, value)) in TASK_COLUMNS.iter().zip(self.values()).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': '{}'", column, value)?;
        }
        write!(f, "}}")
    }
}

/// Key/value rows written above the task table, in order.
pub struct ReportHeader {
    /// `(label, value)` pairs written to columns A and B.
    pub rows: Vec<(String, String)>,
}

impl ReportHeader {
    pub fn new(
        assignee: &str,
        details: &EmployeeDetails,
        period: &ReportingPeriod,
        submitted_on: NaiveDate,
    ) -> Self {
        let rows = [
            ("Imie i nazwisko/Name and surname", assignee.to_string()),
            ("Employee ID", details.employee_id.clone()),
            ("Stanowisko/Job position", details.job_position.clone()),
            ("Okres raportowania/Reporting period", period.label()),
            (
                "Data zlozenia raportu/Submission date",
                submitted_on.format("%d.%m.%Y").to_string(),
            ),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

        Self { rows }
    }
}

/// Everything the workbook is rendered from.
pub struct ReportData {
    pub header: ReportHeader,
    pub tasks: Vec<TaskRow>,
}

impl ReportData {
    pub fn build(
        issues: &[Issue],
        details: &EmployeeDetails,
        period: &ReportingPeriod,
        submitted_on: NaiveDate,
    ) -> Result<Self> {
        let Some(first) = issues.first() else {
            bail!("No issues to report");
        };
        let assignee = first.assignee_name().unwrap_or_default();

        let tasks = issues
            .iter()
            .enumerate()
            .map(|(i, issue)| TaskRow::from_issue(i + 1, issue))
            .collect();

        Ok(Self {
            header: ReportHeader::new(assignee, details, period, submitted_on),
            tasks,
        })
    }
}
