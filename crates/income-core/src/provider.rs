//! Provider trait for fetching raw income-statement reports.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::Result;
use crate::period::PeriodType;
use crate::types::{RawReport, Symbol};

/// A source of raw income-statement reports.
///
/// Implementations issue a single fetch per call: no retry, no caching.
/// The returned reports are unparsed; building the record table is the
/// caller's concern (see [`IncomeTable`](crate::table::IncomeTable)).
#[async_trait]
pub trait IncomeStatementProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "Alpha Vantage").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;

    /// Fetches all reports for a symbol and reporting period.
    ///
    /// # Errors
    ///
    /// - [`DataError::Http`](crate::error::DataError::Http) for any non-200
    ///   response.
    /// - [`DataError::Schema`](crate::error::DataError::Schema) when the
    ///   response is JSON without the expected report list.
    /// - [`DataError::Network`](crate::error::DataError::Network) and
    ///   [`DataError::Parse`](crate::error::DataError::Parse) for transport
    ///   and decode failures.
    async fn fetch_reports(&self, symbol: &Symbol, period: PeriodType) -> Result<Vec<RawReport>>;
}
