use serde::Deserialize;

/// One daily OHLC bar from the historical provider.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DailyBar {
    /// Bar time, unix seconds (UTC).
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}
