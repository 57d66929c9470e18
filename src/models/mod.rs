mod bar;
mod coin;
mod metrics;
mod row;

pub use bar::DailyBar;
pub use coin::{CoinSnapshot, MarketCoin};
pub use metrics::{DayRatio, DerivedMetrics, MonthlyRatio, MONTH_WINDOW};
pub use row::ReportRow;
