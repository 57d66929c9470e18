use super::{DayRatio, MonthlyRatio};

/// One sink-ready report line: snapshot fields joined with the coin's
/// derived metrics. Percentages are stored pre-rounded to two decimals so
/// the console, CSV, and spreadsheet sinks render identical values.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub potential_pct: f64,
    pub popularity_pct: f64,
    pub ratio_1m: DayRatio,
    pub change_2y_pct: f64,
    /// Oldest first, at most six entries; empty unless the monthly
    /// breakdown was requested.
    pub monthly: Vec<MonthlyRatio>,
    pub uptrend: bool,
}
