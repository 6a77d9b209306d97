use anyhow::{Result, bail};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::info;

use crate::helpers::period::ReportingPeriod;

/// Line based questions over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `message` on its own line and returns the trimmed answer.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            bail!("Input closed while waiting for: {}", message);
        }
        Ok(answer.trim().to_string())
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Asks for a `mm-yyyy` period until a valid one is given, blank means the month of `today`.
    pub fn reporting_period(&mut self, today: NaiveDate) -> Result<ReportingPeriod> {
        let default_period = ReportingPeriod::containing(today);

        loop {
            let answer = self.ask(&format!(
                "Okres raportowania/Reporting period format mm-yyyy (leave blank for date from {} to {})",
                default_period.start, default_period.end
            ))?;

            if answer.is_empty() {
                info!("Using default reporting period: {}", default_period);
                return Ok(default_period);
            }

            match ReportingPeriod::parse(&answer) {
                Some(period) => {
                    info!("Using reporting period: {}", period);
                    return Ok(period);
                }
                None => self.say(&format!("Invalid date {}, try again", answer))?,
            }
        }
    }
}
