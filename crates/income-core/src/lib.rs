#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fiscaldash/income/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and transform pipeline for income-statement data.
//!
//! This crate provides the foundational pieces for working with one
//! company's income-statement history:
//!
//! - [`IncomeStatementProvider`](provider::IncomeStatementProvider) - Trait for report sources
//! - [`RawReport`](types::RawReport) - One period as received from the API
//! - [`MetricField`](schema::MetricField) - The declared numeric-field schema
//! - [`IncomeRecord`](types::IncomeRecord) - One cleaned, derived fiscal-year row
//! - [`IncomeTable`](table::IncomeTable) - The sorted table with year-range filtering

/// Error types for data operations.
pub mod error;
/// Reporting-period definitions.
pub mod period;
/// Provider trait for fetching raw reports.
pub mod provider;
/// Declared schema for the numeric metric fields.
pub mod schema;
/// The sorted record table and transform pipeline.
pub mod table;
/// Core data types (Symbol, RawReport, IncomeRecord).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DataError, Result};
pub use period::PeriodType;
pub use provider::IncomeStatementProvider;
pub use schema::{ExpenseCategory, MetricField};
pub use table::IncomeTable;
pub use types::{IncomeRecord, RawReport, Symbol};
