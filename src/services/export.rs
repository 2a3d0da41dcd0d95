//! Export sinks
//!
//! Writes the combined record set to two row-oriented tabular formats with
//! the same fixed columns: `title, company, location, link`. One row per
//! record, header row present, no index column.

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::JobRecord;

const HEADERS: [&str; 4] = ["title", "company", "location", "link"];

pub struct ExportSink {
    csv_path: String,
    xlsx_path: String,
}

impl ExportSink {
    pub fn new(csv_path: impl Into<String>, xlsx_path: impl Into<String>) -> Self {
        Self {
            csv_path: csv_path.into(),
            xlsx_path: xlsx_path.into(),
        }
    }

    /// Write the records to both output files.
    pub fn export(&self, records: &[JobRecord]) -> AppResult<()> {
        self.write_csv(records)?;
        self.write_xlsx(records)?;
        Ok(())
    }

    fn write_csv(&self, records: &[JobRecord]) -> AppResult<()> {
        let mut writer = csv::Writer::from_path(&self.csv_path)
            .map_err(|e| AppError::csv_write_failed(&self.csv_path, e))?;

        writer
            .write_record(HEADERS)
            .map_err(|e| AppError::csv_write_failed(&self.csv_path, e))?;
        for record in records {
            writer
                .write_record([
                    record.title.as_str(),
                    record.company.as_str(),
                    record.location.as_str(),
                    record.link.as_str(),
                ])
                .map_err(|e| AppError::csv_write_failed(&self.csv_path, e))?;
        }
        writer
            .flush()
            .map_err(|e| AppError::csv_write_failed(&self.csv_path, e))?;

        info!("Exported data to {}", self.csv_path);
        Ok(())
    }

    fn write_xlsx(&self, records: &[JobRecord]) -> AppResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, *header)
                .map_err(|e| AppError::spreadsheet_write_failed(&self.xlsx_path, e))?;
        }
        for (row, record) in records.iter().enumerate() {
            let row = (row + 1) as u32;
            worksheet
                .write_string(row, 0, record.title.as_str())
                .and_then(|ws| ws.write_string(row, 1, record.company.as_str()))
                .and_then(|ws| ws.write_string(row, 2, record.location.as_str()))
                .and_then(|ws| ws.write_string(row, 3, record.link.as_str()))
                .map_err(|e| AppError::spreadsheet_write_failed(&self.xlsx_path, e))?;
        }

        workbook
            .save(&self.xlsx_path)
            .map_err(|e| AppError::spreadsheet_write_failed(&self.xlsx_path, e))?;

        info!("Exported data to {}", self.xlsx_path);
        Ok(())
    }
}
