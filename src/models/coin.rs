use serde::Deserialize;

/// One entry of the market provider's `/coins/markets` payload. The
/// numeric fields can come back null for thin or freshly listed markets.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketCoin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
}

/// A coin that survived the reliability filter.
#[derive(Debug, Clone)]
pub struct CoinSnapshot {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
}

impl MarketCoin {
    /// The reliability filter: a null price, cap, or volume marks the
    /// listing as unreliable, and cap/volume must clear the given floors
    /// (inclusive). The symbol is uppercased for the historical provider.
    pub fn into_snapshot(self, market_cap_min: f64, volume_min: f64) -> Option<CoinSnapshot> {
        let price = self.current_price?;
        let market_cap = self.market_cap?;
        let volume_24h = self.total_volume?;

        if market_cap < market_cap_min || volume_24h < volume_min {
            return None;
        }

        Some(CoinSnapshot {
            id: self.id,
            name: self.name,
            symbol: self.symbol.to_uppercase(),
            price,
            market_cap,
            volume_24h,
        })
    }
}
