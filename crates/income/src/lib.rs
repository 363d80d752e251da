#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fiscaldash/income/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Income-statement dashboard data layer.
//!
//! This crate ties the workspace together: it re-exports the core types,
//! the Alpha Vantage provider (feature `alphavantage`, on by default), and
//! adds runtime configuration plus chart-series selection for the eight
//! dashboard views.
//!
//! # Example
//!
//! ```rust,ignore
//! use income::{dashboard, Config, AlphaVantageProvider, PeriodType, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> income::Result<()> {
//!     let config = Config::from_env()?;
//!     let provider = AlphaVantageProvider::new(config.api_key());
//!
//!     let table = income::fetch_income_table(
//!         &provider,
//!         &Symbol::new("AAPL"),
//!         PeriodType::Annual,
//!     )
//!     .await?;
//!
//!     let (year_min, year_max) = table.year_range().unwrap_or((0, 0));
//!     let filtered = table.filter_by_year(year_min, year_max);
//!     for view in dashboard::ChartView::ALL {
//!         let series = view.series(&filtered, &income::ExpenseCategory::ALL);
//!         println!("{}: {} series", view.title(), series.len());
//!     }
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use income_core::*;

// Providers
#[cfg(feature = "alphavantage")]
pub use income_alphavantage::AlphaVantageProvider;

mod config;
pub use config::Config;

/// Chart-series selection for the dashboard views.
pub mod dashboard;

use tracing::debug;

/// Fetches a symbol's reports from a provider and builds the sorted record
/// table.
///
/// One fetch, one transform; errors from the provider pass through
/// unchanged.
pub async fn fetch_income_table(
    provider: &dyn IncomeStatementProvider,
    symbol: &Symbol,
    period: PeriodType,
) -> Result<IncomeTable> {
    debug!(
        provider = provider.name(),
        symbol = %symbol,
        "fetching income statements"
    );
    let reports = provider.fetch_reports(symbol, period).await?;
    debug!(reports = reports.len(), "building income table");
    Ok(IncomeTable::from_reports(&reports))
}
