use crate::models::{CoinSnapshot, DayRatio, DerivedMetrics, ReportRow};
use crate::report::format::round2;

/// Drop every coin at or above the price ceiling. Order is preserved.
pub fn filter_by_price(coins: Vec<CoinSnapshot>, ceiling: f64) -> Vec<CoinSnapshot> {
    coins.into_iter().filter(|c| c.price < ceiling).collect()
}

/// Mean 24h volume across the filtered set. Falls back to 1.0 for an
/// empty set so the popularity division stays defined.
pub fn average_volume(coins: &[CoinSnapshot]) -> f64 {
    if coins.is_empty() {
        return 1.0;
    }
    coins.iter().map(|c| c.volume_24h).sum::<f64>() / coins.len() as f64
}

/// Join snapshots with their metrics into sink-ready rows, matched by
/// position, preserving the snapshot order. Derived percentages are
/// rounded here so every sink shows the same two-decimal values.
pub fn build_rows(coins: &[CoinSnapshot], metrics: &[DerivedMetrics]) -> Vec<ReportRow> {
    let avg_volume = average_volume(coins);

    coins
        .iter()
        .zip(metrics)
        .map(|(coin, m)| {
            let potential = if coin.market_cap > 0.0 {
                coin.volume_24h / coin.market_cap * 100.0
            } else {
                0.0
            };
            let popularity = if avg_volume > 0.0 {
                coin.volume_24h / avg_volume * 100.0
            } else {
                0.0
            };

            ReportRow {
                name: coin.name.clone(),
                symbol: coin.symbol.clone(),
                price: coin.price,
                market_cap: coin.market_cap,
                volume_24h: coin.volume_24h,
                potential_pct: round2(potential),
                popularity_pct: round2(popularity),
                ratio_1m: DayRatio {
                    buy_pct: round2(m.ratio_1m.buy_pct),
                    sell_pct: round2(m.ratio_1m.sell_pct),
                },
                change_2y_pct: round2(m.change_2y_pct),
                monthly: m.monthly.clone(),
                uptrend: m.uptrend,
            }
        })
        .collect()
}
