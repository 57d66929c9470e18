use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;
use tracing::warn;

use crate::config::CryptoCompareConfig;
use crate::models::DailyBar;

/// Quote currency for every history request.
const QUOTE_CURRENCY: &str = "USD";
/// The provider's success marker in the response envelope.
const SUCCESS: &str = "Success";

/// The `histoday` envelope: bars live under `Data.Data`, and the outer
/// `Response` field says whether they mean anything.
#[derive(Debug, Deserialize)]
struct HistodayResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "Data", default)]
    data: Option<HistodayData>,
}

#[derive(Debug, Deserialize)]
struct HistodayData {
    #[serde(rename = "Data", default)]
    bars: Vec<DailyBar>,
}

pub struct CryptoCompareClient {
    client: reqwest::Client,
    config: CryptoCompareConfig,
}

impl CryptoCompareClient {
    pub fn new(config: CryptoCompareConfig) -> Self {
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

    /// Up to `days` daily OHLC bars for `symbol`, oldest first.
    ///
    /// Every failure mode (transport error, bad status, unparseable
    /// payload, provider-side error envelope) comes back as `None`.
    /// Callers treat that as "no history" and fall back to their
    /// documented defaults instead of aborting the run.
    pub async fn daily_history(&self, symbol: &str, days: u32) -> Option<Vec<DailyBar>> {
        let url = format!(
            "{}/data/v2/histoday?fsym={}&tsym={}&limit={}",
            self.config.base_url, symbol, QUOTE_CURRENCY, days
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("History request for {} failed: {}", symbol, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "History request for {} returned {}",
                symbol,
                response.status()
            );
            return None;
        }

        let payload: HistodayResponse = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("History payload for {} did not parse: {}", symbol, e);
                return None;
            }
        };

        if payload.response != SUCCESS {
            warn!(
                "History provider rejected {}: {} {}",
                symbol, payload.response, payload.message
            );
            return None;
        }

        Some(payload.data.map(|d| d.bars).unwrap_or_default())
    }
}
