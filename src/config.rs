use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub screener: ScreenerConfig,
    pub coingecko: CoinGeckoConfig,
    pub cryptocompare: CryptoCompareConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScreenerConfig {
    pub market_cap_min: f64, // USD, coins below are unreliable
    pub volume_min: f64,     // USD over 24h, coins below are unreliable
    pub price_ceiling: f64,  // only coins strictly below enter the report
    pub top_count: usize,    // months mode: reliable coins kept before the price filter
}

#[derive(Debug, Deserialize, Clone)]
pub struct CoinGeckoConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CryptoCompareConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub csv_path: PathBuf,
    pub excel_path: PathBuf,
    pub open_when_done: bool,
}

impl Settings {
    /// Defaults, overlaid by `config/default.toml` when present, overlaid
    /// by `COINSIFT_`-prefixed environment variables (`.env` is honored).
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("COINSIFT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The built-in defaults, before any file or environment overlay.
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let builder = Config::builder()
            .set_default("screener.market_cap_min", 1_000_000_000.0)?
            .set_default("screener.volume_min", 50_000_000.0)?
            .set_default("screener.price_ceiling", 10.0)?
            .set_default("screener.top_count", 50)?
            .set_default("coingecko.base_url", "https://api.coingecko.com/api/v3")?
            .set_default("cryptocompare.base_url", "https://min-api.cryptocompare.com")?
            .set_default("output.csv_path", "results.csv")?
            .set_default("output.excel_path", "results.xlsx")?
            .set_default("output.open_when_done", true)?;
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_thresholds() {
        // built from the defaults alone, no file or environment overlay
        let settings: Settings = Settings::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.screener.market_cap_min, 1_000_000_000.0);
        assert_eq!(settings.screener.volume_min, 50_000_000.0);
        assert_eq!(settings.screener.price_ceiling, 10.0);
        assert_eq!(settings.screener.top_count, 50);
        assert_eq!(settings.output.csv_path, PathBuf::from("results.csv"));
        assert!(settings.output.open_when_done);
    }
}
