use std::path::Path;

use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use crate::error::Result;
use crate::models::{DayRatio, ReportRow, MONTH_WINDOW};
use crate::report::{self, format};

const SHEET_NAME: &str = "Results";

/// Light green fill for metric cells above the highlight threshold.
const HIGHLIGHT_FILL: Color = Color::RGB(0x90EE90);
/// Tomato fill for the trend column. The trend is a categorical flag, not
/// a threshold condition, so it keeps a distinct color.
const TREND_FILL: Color = Color::RGB(0xFF6347);

pub struct ExcelWriter {
    highlight: Format,
    trend: Format,
}

impl ExcelWriter {
    pub fn new() -> Self {
        Self {
            highlight: Format::new().set_background_color(HIGHLIGHT_FILL),
            trend: Format::new().set_background_color(TREND_FILL),
        }
    }

    /// One worksheet: header row, one line per coin, machine cell values,
    /// conditional fills on the metric columns and the trend column. An
    /// empty report still writes its header row.
    pub fn write_report(&self, rows: &[ReportRow], with_months: bool, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, header) in report::headers(with_months).iter().enumerate() {
            sheet.write_string(0, col as u16, *header)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            self.write_row(sheet, idx as u32 + 1, row, with_months)?;
        }

        workbook.save(path)?;
        Ok(())
    }

    fn write_row(
        &self,
        sheet: &mut Worksheet,
        r: u32,
        row: &ReportRow,
        with_months: bool,
    ) -> Result<()> {
        sheet.write_string(r, 0, &row.name)?;
        sheet.write_string(r, 1, &row.symbol)?;
        sheet.write_number(r, 2, row.price)?;
        sheet.write_number(r, 3, row.market_cap)?;
        sheet.write_number(r, 4, row.volume_24h)?;
        self.write_metric(sheet, r, 5, row.potential_pct)?;
        self.write_metric(sheet, r, 6, row.popularity_pct)?;
        self.write_pair(sheet, r, 7, &row.ratio_1m)?;
        self.write_metric(sheet, r, 8, row.change_2y_pct)?;

        if with_months {
            for (offset, cell) in format::month_values(&row.monthly).iter().enumerate() {
                sheet.write_string(r, 9 + offset as u16, cell)?;
            }
            let trend_col = (9 + MONTH_WINDOW) as u16;
            if row.uptrend {
                sheet.write_string_with_format(r, trend_col, format::UPTREND_LABEL, &self.trend)?;
            } else {
                sheet.write_string(r, trend_col, "")?;
            }
        }
        Ok(())
    }

    fn write_metric(&self, sheet: &mut Worksheet, r: u32, col: u16, value: f64) -> Result<()> {
        if format::needs_highlight(value) {
            sheet.write_number_with_format(r, col, value, &self.highlight)?;
        } else {
            sheet.write_number(r, col, value)?;
        }
        Ok(())
    }

    fn write_pair(&self, sheet: &mut Worksheet, r: u32, col: u16, ratio: &DayRatio) -> Result<()> {
        let cell = format::ratio_value(ratio);
        if format::needs_highlight(ratio.buy_pct) || format::needs_highlight(ratio.sell_pct) {
            sheet.write_string_with_format(r, col, &cell, &self.highlight)?;
        } else {
            sheet.write_string(r, col, &cell)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyRatio;
    use chrono::NaiveDate;
    use std::fs;

    fn breakdown_row() -> ReportRow {
        let monthly: Vec<MonthlyRatio> = (1..=6u32)
            .map(|m| MonthlyRatio {
                month: NaiveDate::from_ymd_opt(2024, m, 1).unwrap(),
                ratio: DayRatio {
                    buy_pct: 60.0,
                    sell_pct: 40.0,
                },
            })
            .collect();

        ReportRow {
            name: "Cardano".to_string(),
            symbol: "ADA".to_string(),
            price: 0.5,
            market_cap: 16_000_000_000.0,
            volume_24h: 400_000_000.0,
            potential_pct: 2.5,
            popularity_pct: 130.0,
            ratio_1m: DayRatio {
                buy_pct: 60.0,
                sell_pct: 40.0,
            },
            change_2y_pct: 185.25,
            monthly,
            uptrend: true,
        }
    }

    #[test]
    fn saves_a_workbook_with_fills() {
        let path = std::env::temp_dir().join(format!("coinsift-report-{}.xlsx", std::process::id()));

        ExcelWriter::new()
            .write_report(&[breakdown_row()], true, &path)
            .unwrap();

        let meta = fs::metadata(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(meta.len() > 0);
    }

    #[test]
    fn empty_report_saves_header_only_workbook() {
        let path = std::env::temp_dir().join(format!("coinsift-empty-{}.xlsx", std::process::id()));

        ExcelWriter::new().write_report(&[], false, &path).unwrap();

        let meta = fs::metadata(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(meta.len() > 0);
    }
}
