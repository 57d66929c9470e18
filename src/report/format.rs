use crate::models::{DayRatio, MonthlyRatio, MONTH_WINDOW};

/// Values strictly above this mark get emphasized by the console and
/// spreadsheet sinks. Exactly 100 is never highlighted.
pub const HIGHLIGHT_THRESHOLD: f64 = 100.0;

/// Rendered in the trend column when six months of history lean buy-side.
pub const UPTREND_LABEL: &str = "Uptrend";

pub fn needs_highlight(value: f64) -> bool {
    value > HIGHLIGHT_THRESHOLD
}

/// Round half away from zero to the two decimals every sink shows.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Human percent cell, e.g. "%12.34".
pub fn percent_cell(value: f64) -> String {
    format!("%{value:.2}")
}

/// Human buy/sell pair, e.g. "%60.00 buy / %40.00 sell".
pub fn ratio_cell(ratio: &DayRatio) -> String {
    format!("%{:.2} buy / %{:.2} sell", ratio.buy_pct, ratio.sell_pct)
}

/// Machine buy/sell pair for CSV and spreadsheet cells.
pub fn ratio_value(ratio: &DayRatio) -> String {
    format!("{:.2} buy / {:.2} sell", ratio.buy_pct, ratio.sell_pct)
}

/// Human month cell, e.g. "Jan: %60.00 buy / %40.00 sell".
pub fn month_cell(month: &MonthlyRatio) -> String {
    format!("{}: {}", month.month.format("%b"), ratio_cell(&month.ratio))
}

/// Machine month cell, e.g. "Jan: 60.00 buy / 40.00 sell".
pub fn month_value(month: &MonthlyRatio) -> String {
    format!("{}: {}", month.month.format("%b"), ratio_value(&month.ratio))
}

/// The six month columns in human form, oldest on the left, left-padded
/// with blanks when fewer than six months of history exist.
pub fn month_cells(monthly: &[MonthlyRatio]) -> Vec<String> {
    padded(monthly, month_cell)
}

/// The six month columns in machine form, padded the same way.
pub fn month_values(monthly: &[MonthlyRatio]) -> Vec<String> {
    padded(monthly, month_value)
}

fn padded(monthly: &[MonthlyRatio], render: fn(&MonthlyRatio) -> String) -> Vec<String> {
    let mut cells = Vec::with_capacity(MONTH_WINDOW);
    cells.resize(MONTH_WINDOW.saturating_sub(monthly.len()), String::new());
    cells.extend(monthly.iter().map(render));
    cells
}
