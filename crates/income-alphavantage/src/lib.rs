#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fiscaldash/income/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Alpha Vantage income-statement provider.
//!
//! This crate implements the income-core provider trait for the
//! [Alpha Vantage](https://www.alphavantage.co/) `INCOME_STATEMENT` endpoint.
//!
//! # Usage
//!
//! ```rust,ignore
//! use income_alphavantage::AlphaVantageProvider;
//! use income_core::{IncomeStatementProvider, IncomeTable, PeriodType, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> income_core::Result<()> {
//!     let provider = AlphaVantageProvider::new("your_api_key");
//!
//!     let symbol = Symbol::new("AAPL");
//!     let reports = provider.fetch_reports(&symbol, PeriodType::Annual).await?;
//!     let table = IncomeTable::from_reports(&reports);
//!
//!     println!("{} fiscal years", table.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use income_core::{
    DataError, IncomeStatementProvider, PeriodType, RawReport, Result, Symbol,
};
use reqwest::Client;
use std::fmt;
use tracing::debug;

/// Base URL of the Alpha Vantage query endpoint.
const AV_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Response key holding the report list for a reporting period.
const fn report_key(period: PeriodType) -> &'static str {
    match period {
        PeriodType::Annual => "annualReports",
        PeriodType::Quarterly => "quarterlyReports",
    }
}

/// Alpha Vantage income-statement provider.
///
/// Issues exactly one GET per fetch: no retry, no backoff, no caching.
/// The API key is supplied at construction; this crate never reads the
/// process environment.
#[derive(Clone)]
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for AlphaVantageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageProvider")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AlphaVantageProvider {
    /// Create a new provider with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: AV_BASE_URL.to_string(),
        }
    }

    /// Create a new provider with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: AV_BASE_URL.to_string(),
        }
    }

    /// Override the base URL, e.g. to point at a proxy or a test server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the query URL for a symbol.
    fn url(&self, symbol: &Symbol) -> String {
        format!(
            "{}?function=INCOME_STATEMENT&symbol={}&apikey={}",
            self.base_url,
            symbol.as_str(),
            self.api_key
        )
    }
}

#[async_trait]
impl IncomeStatementProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "Alpha Vantage"
    }

    fn description(&self) -> &str {
        "Alpha Vantage - stock fundamentals and market data API"
    }

    async fn fetch_reports(&self, symbol: &Symbol, period: PeriodType) -> Result<Vec<RawReport>> {
        if symbol.as_str().is_empty() {
            return Err(DataError::InvalidParameter("empty symbol".to_string()));
        }

        debug!(symbol = %symbol, ?period, "requesting income statement");

        let response = self
            .client
            .get(self.url(symbol))
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(DataError::Http { status });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DataError::Parse(e.to_string()))?;

        // Rate-limit notes and bad-symbol errors come back as 200s without
        // the report list, so key presence is the schema check.
        let key = report_key(period);
        let Some(reports) = payload.get(key) else {
            return Err(DataError::Schema(format!("response has no {key:?} field")));
        };

        serde_json::from_value(reports.clone()).map_err(|e| DataError::Parse(e.to_string()))
    }
}
