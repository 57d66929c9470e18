use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate};

use crate::models::{DailyBar, DayRatio, MonthlyRatio, MONTH_WINDOW};

/// Lookback requested from the historical provider for the 2-year change.
pub const TWO_YEAR_WINDOW_DAYS: u32 = 730;
/// Lookback for the 1-month buy/sell ratio.
pub const ONE_MONTH_WINDOW_DAYS: u32 = 30;
/// Lookback for the monthly breakdown.
pub const SIX_MONTH_WINDOW_DAYS: u32 = 180;

/// Months out of six that must lean buy-side for an uptrend call.
const UPTREND_MIN_BUY_MONTHS: usize = 4;

/// Percent change between the first and last close of the series.
///
/// Returns 0 for fewer than two bars or a non-positive first close, so
/// missing history reads as "no change" rather than an error.
pub fn two_year_change(bars: &[DailyBar]) -> f64 {
    if bars.len() < 2 {
        return 0.0;
    }

    let first = bars[0].close;
    let last = bars[bars.len() - 1].close;

    if first > 0.0 {
        (last - first) / first * 100.0
    } else {
        0.0
    }
}

/// Share of buy-side vs sell-side days across the series.
///
/// A day closing above its open counts toward the buy side, below toward
/// the sell side, and a flat day splits evenly. An empty series falls
/// back to the even 50/50 split.
pub fn buy_sell_ratio(bars: &[DailyBar]) -> DayRatio {
    if bars.is_empty() {
        return DayRatio::EVEN;
    }

    let mut buy_days = 0.0_f64;
    let mut sell_days = 0.0_f64;

    for bar in bars {
        if bar.close > bar.open {
            buy_days += 1.0;
        } else if bar.close < bar.open {
            sell_days += 1.0;
        } else {
            buy_days += 0.5;
            sell_days += 0.5;
        }
    }

    let buy_pct = buy_days / (buy_days + sell_days) * 100.0;
    DayRatio {
        buy_pct,
        sell_pct: 100.0 - buy_pct,
    }
}

/// Partition the series by calendar month (UTC) and compute a buy/sell
/// ratio per month. Chronological, trimmed to the most recent
/// [`MONTH_WINDOW`] months.
pub fn monthly_ratios(bars: &[DailyBar]) -> Vec<MonthlyRatio> {
    let mut by_month: BTreeMap<(i32, u32), Vec<DailyBar>> = BTreeMap::new();

    for bar in bars {
        let Some(ts) = DateTime::from_timestamp(bar.time, 0) else {
            continue;
        };
        by_month
            .entry((ts.year(), ts.month()))
            .or_default()
            .push(*bar);
    }

    let mut months: Vec<MonthlyRatio> = by_month
        .into_iter()
        .filter_map(|((year, month), month_bars)| {
            let month = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some(MonthlyRatio {
                month,
                ratio: buy_sell_ratio(&month_bars),
            })
        })
        .collect();

    if months.len() > MONTH_WINDOW {
        months.drain(..months.len() - MONTH_WINDOW);
    }
    months
}

/// An uptrend needs a full six months of history with at least four of
/// them leaning buy-side. Shorter history never trends.
pub fn is_uptrend(monthly: &[MonthlyRatio]) -> bool {
    monthly.len() == MONTH_WINDOW
        && monthly.iter().filter(|m| m.ratio.buy_heavy()).count() >= UPTREND_MIN_BUY_MONTHS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const DAY_SECS: i64 = 86_400;

    fn bar(time: i64, open: f64, close: f64) -> DailyBar {
        DailyBar {
            time,
            open,
            high: open.max(close),
            low: open.min(close),
            close,
        }
    }

    /// One bar per day starting 2024-01-01 UTC, (open, close) pairs.
    fn daily_bars(pairs: &[(f64, f64)]) -> Vec<DailyBar> {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
            .timestamp();
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(open, close))| bar(start + i as i64 * DAY_SECS, open, close))
            .collect()
    }

    fn midday_ts(year: i32, month: u32, day: u32) -> i64 {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
            .unwrap()
            .timestamp()
    }

    fn months_with_buy_pcts(buy_pcts: &[f64]) -> Vec<MonthlyRatio> {
        buy_pcts
            .iter()
            .enumerate()
            .map(|(i, &buy_pct)| MonthlyRatio {
                month: NaiveDate::from_ymd_opt(2024, i as u32 + 1, 1).unwrap(),
                ratio: DayRatio {
                    buy_pct,
                    sell_pct: 100.0 - buy_pct,
                },
            })
            .collect()
    }

    #[test]
    fn change_from_first_to_last_close() {
        let bars = daily_bars(&[(1.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        assert!((two_year_change(&bars) - 200.0).abs() < 1e-9);

        let bars = daily_bars(&[(4.0, 4.0), (4.0, 1.0)]);
        assert!((two_year_change(&bars) - (-75.0)).abs() < 1e-9);
    }

    #[test]
    fn change_of_short_series_is_zero() {
        assert_eq!(two_year_change(&[]), 0.0);
        assert_eq!(two_year_change(&daily_bars(&[(1.0, 5.0)])), 0.0);
    }

    #[test]
    fn change_guards_zero_first_close() {
        let bars = daily_bars(&[(0.0, 0.0), (0.0, 5.0)]);
        assert_eq!(two_year_change(&bars), 0.0);
    }

    #[test]
    fn ratio_counts_up_and_down_days() {
        // three up days, one down day
        let bars = daily_bars(&[(1.0, 2.0), (2.0, 3.0), (3.0, 4.0), (4.0, 3.0)]);
        let ratio = buy_sell_ratio(&bars);

        assert!((ratio.buy_pct - 75.0).abs() < 1e-9);
        assert!((ratio.sell_pct - 25.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_sides_sum_to_one_hundred() {
        let bars = daily_bars(&[(1.0, 2.0), (2.0, 2.0), (2.0, 1.5), (1.5, 1.5), (1.5, 1.9)]);
        let ratio = buy_sell_ratio(&bars);

        assert!((ratio.buy_pct + ratio.sell_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn flat_days_split_evenly() {
        let bars = daily_bars(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]);
        let ratio = buy_sell_ratio(&bars);

        assert_eq!(ratio.buy_pct, 50.0);
        assert_eq!(ratio.sell_pct, 50.0);
    }

    #[test]
    fn empty_series_falls_back_to_even_split() {
        assert_eq!(buy_sell_ratio(&[]), DayRatio::EVEN);
    }

    #[test]
    fn months_group_by_utc_calendar_month() {
        let bars = vec![
            bar(midday_ts(2024, 1, 30), 1.0, 2.0),
            bar(midday_ts(2024, 1, 31), 2.0, 1.0),
            bar(midday_ts(2024, 2, 1), 1.0, 3.0),
        ];
        let months = monthly_ratios(&bars);

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month_name(), "January");
        assert_eq!(months[1].month_name(), "February");
        assert_eq!(months[0].ratio.buy_pct, 50.0);
        assert_eq!(months[1].ratio.buy_pct, 100.0);
    }

    #[test]
    fn months_keep_only_the_latest_six() {
        let bars: Vec<DailyBar> = (1..=8u32)
            .map(|month| bar(midday_ts(2024, month, 15), 1.0, 2.0))
            .collect();
        let months = monthly_ratios(&bars);

        assert_eq!(months.len(), MONTH_WINDOW);
        assert_eq!(months[0].month_name(), "March");
        assert_eq!(months[5].month_name(), "August");
    }

    #[test]
    fn uptrend_needs_four_of_six_buy_months() {
        assert!(is_uptrend(&months_with_buy_pcts(&[
            60.0, 60.0, 60.0, 60.0, 40.0, 40.0
        ])));
        assert!(!is_uptrend(&months_with_buy_pcts(&[
            60.0, 60.0, 60.0, 40.0, 40.0, 40.0
        ])));
    }

    #[test]
    fn short_history_never_trends() {
        assert!(!is_uptrend(&months_with_buy_pcts(&[
            100.0, 100.0, 100.0, 100.0, 100.0
        ])));
        assert!(!is_uptrend(&[]));
    }
}
