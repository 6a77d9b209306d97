use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::models::report::{ReportData, TASK_COLUMNS};

/// Renders the creative tax report and returns the xlsx bytes.
pub fn create_creative_tax_workbook(data: &ReportData) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let mut widths = ColumnWidths::default();

    let mut row = populate_header(sheet, data, &mut widths)?;
    // one blank row between header and table
    row += 1;
    populate_body(sheet, data, row, &mut widths)?;
    widths.apply(sheet)?;

    let buffer = workbook.save_to_buffer()?;
    info!(
        "Created workbook with {} tasks, size: {} bytes",
        data.tasks.len(),
        buffer.len()
    );
    Ok(buffer)
}

fn populate_header(
    sheet: &mut Worksheet,
    data: &ReportData,
    widths: &mut ColumnWidths,
) -> Result<u32, XlsxError> {
    let mut row = 0;
    for (key, value) in &data.header.rows {
        sheet.write_string(row, 0, key)?;
        sheet.write_string(row, 1, value)?;
        widths.track(0, key);
        widths.track(1, value);
        row += 1;
    }
    Ok(row)
}

fn populate_body(
    sheet: &mut Worksheet,
    data: &ReportData,
    mut row: u32,
    widths: &mut ColumnWidths,
) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();

    for (col, column_name) in TASK_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(row, col as u16, *column_name, &bold)?;
        widths.track(col, column_name);
    }

    for task in &data.tasks {
        row += 1;
        sheet.write_number(row, 0, task.number as f64)?;
        for (col, value) in task.values().iter().enumerate() {
            if col > 0 {
                sheet.write_string(row, col as u16, value)?;
            }
            widths.track(col, value);
        }
    }
    Ok(())
}

/// Longest display value per column, in characters.
#[derive(Default)]
struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    fn track(&mut self, col: usize, value: &str) {
        if self.0.len() <= col {
            self.0.resize(col + 1, 0);
        }
        self.0[col] = self.0[col].max(value.chars().count());
    }

    fn apply(&self, sheet: &mut Worksheet) -> Result<(), XlsxError> {
        for (col, width) in self.0.iter().enumerate() {
            sheet.set_column_width(col as u16, *width as f64)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::EmployeeDetails,
        helpers::period::ReportingPeriod,
        models::{jira::Issue, report::ReportData},
    };
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn tracks_longest_value() {
        let mut widths = ColumnWidths::default();
        widths.track(2, "ab");
        widths.track(2, "żółw!");
        widths.track(0, "x");
        assert_eq!(widths.0, vec![1, 0, 5]);
    }

    #[test]
    fn renders_xlsx_archive() {
        let issue: Issue = serde_json::from_value(json!({
            "key": "W20-7",
            "fields": {"summary": "Report", "assignee": {"displayName": "Jan"}}
        }))
        .unwrap();
        let details = EmployeeDetails {
            employee_id: "E-1".to_string(),
            job_position: "Dev".to_string(),
        };
        let period = ReportingPeriod::resolve(5, 2024).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let data = ReportData::build(&[issue], &details, &period, today).unwrap();

        let bytes = create_creative_tax_workbook(&data).unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }
}
