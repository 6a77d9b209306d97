use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1..=9999;

/// A calendar month used as the reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// First and last day of `month` in `year`, `None` when the month is out of range.
    pub fn resolve(month: u32, year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_month, next_year) = if month == 12 {
            (1, year.checked_add(1)?)
        } else {
            (month + 1, year)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?
            .checked_sub_days(Days::new(1))?;

        Some(Self { start, end })
    }

    /// Parses a `mm-yyyy` answer, years outside `1..=9999` are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let (month, year) = raw.trim().split_once('-')?;
        let month = month.trim().parse::<u32>().ok()?;
        let year = year.trim().parse::<u32>().ok()?;
        if !YEAR_RANGE.contains(&year) {
            return None;
        }

        Self::resolve(month, i32::try_from(year).ok()?)
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self::resolve(date.month(), date.year()).unwrap_or(Self {
            start: date,
            end: date,
        })
    }

    /// Header label, e.g. `1-31.1.2023`.
    pub fn label(&self) -> String {
        format!(
            "{}-{}.{}.{}",
            self.start.day(),
            self.end.day(),
            self.start.month(),
            self.start.year()
        )
    }

    /// Output file name, e.g. `creative-tax-2023-01-01.xlsx`.
    pub fn file_name(&self) -> String {
        format!("creative-tax-{}.xlsx", self.start)
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
