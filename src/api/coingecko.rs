use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use tracing::debug;

use crate::config::CoinGeckoConfig;
use crate::error::{AppError, Result};
use crate::models::{CoinSnapshot, MarketCoin};

/// Quote currency for every market snapshot request.
const VS_CURRENCY: &str = "usd";
/// Coins per page; the screener reads a single page.
const PER_PAGE: u32 = 250;

pub struct CoinGeckoClient {
    client: reqwest::Client,
    config: CoinGeckoConfig,
}

impl CoinGeckoClient {
    pub fn new(config: CoinGeckoConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            ),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, config }
    }

    /// One page of coins ordered by market cap descending, narrowed to
    /// the ones whose cap and 24h volume clear the given floors. Coins
    /// reporting a null price, cap, or volume are dropped as unreliable.
    ///
    /// Failures here are fatal: the snapshot is the input to everything
    /// else, so there is no per-coin fallback for it.
    pub async fn get_reliable_coins(
        &self,
        market_cap_min: f64,
        volume_min: f64,
    ) -> Result<Vec<CoinSnapshot>> {
        let url = format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1&sparkline=false",
            self.config.base_url, VS_CURRENCY, PER_PAGE
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::CoinGeckoApi(format!(
                "Status {}: {}",
                status, text
            )));
        }

        let coins: Vec<MarketCoin> = response.json().await?;
        debug!("Market snapshot returned {} coins", coins.len());

        Ok(coins
            .into_iter()
            .filter_map(|coin| coin.into_snapshot(market_cap_min, volume_min))
            .collect())
    }
}
