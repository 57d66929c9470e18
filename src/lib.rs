//! Crypto market screener: one CoinGecko snapshot, a reliability filter
//! and price ceiling, then per-coin CryptoCompare history distilled into
//! potential/popularity/buy-sell ratios for the console, CSV, or XLSX.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
