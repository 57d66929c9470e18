mod ratios;

pub use ratios::{
    buy_sell_ratio, is_uptrend, monthly_ratios, two_year_change, ONE_MONTH_WINDOW_DAYS,
    SIX_MONTH_WINDOW_DAYS, TWO_YEAR_WINDOW_DAYS,
};
