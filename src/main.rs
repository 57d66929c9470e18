use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use coinsift::analysis::{
    self, ONE_MONTH_WINDOW_DAYS, SIX_MONTH_WINDOW_DAYS, TWO_YEAR_WINDOW_DAYS,
};
use coinsift::api::{CoinGeckoClient, CryptoCompareClient};
use coinsift::config::Settings;
use coinsift::models::{CoinSnapshot, DerivedMetrics};
use coinsift::output::{self, CsvWriter, ExcelWriter};
use coinsift::report;

/// Screen the crypto market for liquid, low-priced coins and report
/// potential, popularity, buy/sell ratios, and the 2-year change per coin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where the report goes besides the console
    #[arg(short, long, value_enum, default_value = "console")]
    mode: ReportMode,

    /// Minimum market cap in USD for the reliability filter
    #[arg(long)]
    market_cap_min: Option<f64>,

    /// Minimum 24h volume in USD for the reliability filter
    #[arg(long)]
    volume_min: Option<f64>,

    /// Only report coins priced strictly below this ceiling
    #[arg(long)]
    price_ceiling: Option<f64>,

    /// Keep only the first N reliable coins (excel-months mode)
    #[arg(long)]
    top_count: Option<usize>,

    /// Do not open the spreadsheet when the run finishes
    #[arg(long)]
    no_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportMode {
    /// Console table only
    Console,
    /// Console table plus a CSV file
    Csv,
    /// Console table plus a spreadsheet with highlighting
    Excel,
    /// Console table plus a spreadsheet with the six-month breakdown
    ExcelMonths,
}

impl ReportMode {
    fn with_months(self) -> bool {
        self == ReportMode::ExcelMonths
    }
}

impl Args {
    /// CLI flags take precedence over file and environment configuration.
    fn override_settings(&self, settings: &mut Settings) {
        if let Some(v) = self.market_cap_min {
            settings.screener.market_cap_min = v;
        }
        if let Some(v) = self.volume_min {
            settings.screener.volume_min = v;
        }
        if let Some(v) = self.price_ceiling {
            settings.screener.price_ceiling = v;
        }
        if let Some(v) = self.top_count {
            settings.screener.top_count = v;
        }
        if self.no_open {
            settings.output.open_when_done = false;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coinsift=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut settings = Settings::load()?;
    args.override_settings(&mut settings);

    info!(
        "Screening for market cap >= {}, 24h volume >= {}, price < {}",
        settings.screener.market_cap_min,
        settings.screener.volume_min,
        settings.screener.price_ceiling
    );

    let coingecko = CoinGeckoClient::new(settings.coingecko.clone());
    let cryptocompare = CryptoCompareClient::new(settings.cryptocompare.clone());

    run_report(args.mode, &settings, &coingecko, &cryptocompare).await
}

async fn run_report(
    mode: ReportMode,
    settings: &Settings,
    coingecko: &CoinGeckoClient,
    cryptocompare: &CryptoCompareClient,
) -> anyhow::Result<()> {
    let screener = &settings.screener;

    info!("Fetching market snapshot from CoinGecko...");
    let mut reliable = coingecko
        .get_reliable_coins(screener.market_cap_min, screener.volume_min)
        .await?;
    info!("{} coins passed the reliability filter", reliable.len());

    // The breakdown report caps the list before the price filter runs.
    if mode.with_months() {
        reliable.truncate(screener.top_count);
    }

    let cheap = report::filter_by_price(reliable, screener.price_ceiling);
    info!(
        "{} coins priced below ${}",
        cheap.len(),
        screener.price_ceiling
    );

    let metrics = collect_metrics(cryptocompare, &cheap, mode.with_months()).await;
    let rows = report::build_rows(&cheap, &metrics);

    output::print_report(&rows, mode.with_months());

    match mode {
        ReportMode::Console => {}
        ReportMode::Csv => {
            let path = &settings.output.csv_path;
            let mut writer = CsvWriter::new(path)?;
            writer.write_report(&rows)?;
            writer.flush()?;
            info!("Data saved to {}", path.display());
        }
        ReportMode::Excel | ReportMode::ExcelMonths => {
            let path = &settings.output.excel_path;
            ExcelWriter::new().write_report(&rows, mode.with_months(), path)?;
            info!("Data saved to {}", path.display());

            if settings.output.open_when_done {
                if let Err(e) = open::that(path) {
                    warn!("Could not open {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(())
}

/// Fetch each coin's history and derive its metrics, one provider call at
/// a time. A failed fetch degrades that coin to the documented fallbacks
/// instead of aborting the run.
async fn collect_metrics(
    cryptocompare: &CryptoCompareClient,
    coins: &[CoinSnapshot],
    with_months: bool,
) -> Vec<DerivedMetrics> {
    let pb = ProgressBar::new(coins.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut metrics = Vec::with_capacity(coins.len());
    for coin in coins {
        pb.set_message(coin.symbol.clone());
        metrics.push(derive_coin_metrics(cryptocompare, &coin.symbol, with_months).await);
        pb.inc(1);
    }
    pb.finish_with_message("done");

    metrics
}

async fn derive_coin_metrics(
    cryptocompare: &CryptoCompareClient,
    symbol: &str,
    with_months: bool,
) -> DerivedMetrics {
    let two_year = cryptocompare
        .daily_history(symbol, TWO_YEAR_WINDOW_DAYS)
        .await;
    let change_2y_pct = analysis::two_year_change(two_year.as_deref().unwrap_or(&[]));

    let one_month = cryptocompare
        .daily_history(symbol, ONE_MONTH_WINDOW_DAYS)
        .await;
    let ratio_1m = analysis::buy_sell_ratio(one_month.as_deref().unwrap_or(&[]));

    let monthly = if with_months {
        let half_year = cryptocompare
            .daily_history(symbol, SIX_MONTH_WINDOW_DAYS)
            .await;
        analysis::monthly_ratios(half_year.as_deref().unwrap_or(&[]))
    } else {
        Vec::new()
    };
    let uptrend = analysis::is_uptrend(&monthly);

    DerivedMetrics {
        change_2y_pct,
        ratio_1m,
        monthly,
        uptrend,
    }
}
