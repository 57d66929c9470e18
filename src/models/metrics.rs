use chrono::NaiveDate;

/// The report tracks at most this many calendar months of ratio history.
pub const MONTH_WINDOW: usize = 6;

/// Percentage split of buy-side vs sell-side days over a window. The two
/// sides always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRatio {
    pub buy_pct: f64,
    pub sell_pct: f64,
}

impl DayRatio {
    /// The 50/50 fallback used when a coin has no usable history.
    pub const EVEN: DayRatio = DayRatio {
        buy_pct: 50.0,
        sell_pct: 50.0,
    };

    pub fn buy_heavy(&self) -> bool {
        self.buy_pct > self.sell_pct
    }
}

/// Buy/sell split for one calendar month of daily bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRatio {
    /// First day of the month, UTC. Orders entries chronologically.
    pub month: NaiveDate,
    pub ratio: DayRatio,
}

impl MonthlyRatio {
    /// Full month name, e.g. "January".
    pub fn month_name(&self) -> String {
        self.month.format("%B").to_string()
    }
}

/// Everything derived from a coin's price history, computed once per run.
#[derive(Debug, Clone)]
pub struct DerivedMetrics {
    pub change_2y_pct: f64,
    pub ratio_1m: DayRatio,
    /// Oldest first, at most [`MONTH_WINDOW`] entries; empty unless the
    /// monthly breakdown was requested.
    pub monthly: Vec<MonthlyRatio>,
    pub uptrend: bool,
}
