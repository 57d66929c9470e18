mod coingecko;
mod cryptocompare;

pub use coingecko::CoinGeckoClient;
pub use cryptocompare::CryptoCompareClient;
