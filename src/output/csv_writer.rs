use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::models::ReportRow;
use crate::report::{self, format};

pub struct CsvWriter {
    writer: csv::Writer<File>,
}

impl CsvWriter {
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let writer = csv::Writer::from_writer(file);
        Ok(Self { writer })
    }

    /// Header record plus one machine-readable record per row. An empty
    /// report still gets its header. Highlighting carries no meaning in
    /// CSV and is skipped.
    pub fn write_report(&mut self, rows: &[ReportRow]) -> Result<()> {
        self.writer.write_record(report::headers(false))?;
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        self.writer.write_record([
            row.name.clone(),
            row.symbol.clone(),
            row.price.to_string(),
            row.market_cap.to_string(),
            row.volume_24h.to_string(),
            row.potential_pct.to_string(),
            row.popularity_pct.to_string(),
            format::ratio_value(&row.ratio_1m),
            row.change_2y_pct.to_string(),
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
