mod builder;
pub mod format;

pub use builder::{average_volume, build_rows, filter_by_price};

/// Column headers shared by every sink, in render order.
pub const BASE_HEADERS: [&str; 9] = [
    "Name",
    "Symbol",
    "Price($)",
    "Market Cap($)",
    "24h Volume($)",
    "Potential(%)",
    "Popularity(%)",
    "1 Month Buy/Sell Ratio",
    "2 Year Change(%)",
];

/// Extra columns appended by the monthly breakdown layout.
pub const MONTH_HEADERS: [&str; 7] = [
    "M1 Ratio", "M2 Ratio", "M3 Ratio", "M4 Ratio", "M5 Ratio", "M6 Ratio", "Trend",
];

pub fn headers(with_months: bool) -> Vec<&'static str> {
    let mut columns = BASE_HEADERS.to_vec();
    if with_months {
        columns.extend(MONTH_HEADERS);
    }
    columns
}
