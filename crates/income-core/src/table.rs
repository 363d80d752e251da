//! The sorted income-record table and its transform pipeline.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{IncomeRecord, RawReport};

/// An immutable collection of [`IncomeRecord`]s sorted ascending by fiscal
/// year.
///
/// Built once per fetch via [`IncomeTable::from_reports`]. Year-range
/// filtering never mutates the table; it yields a new one, so every filter
/// change is an independent recomputation over the same sorted data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeTable {
    records: Vec<IncomeRecord>,
}

impl IncomeTable {
    /// Builds the record table from raw reports.
    ///
    /// Exactly one record is produced per report with a parseable
    /// `fiscalDateEnding`; reports without one are dropped with a logged
    /// warning. The result is stably sorted ascending by fiscal year, so
    /// duplicate years keep the upstream order.
    #[must_use]
    pub fn from_reports(reports: &[RawReport]) -> Self {
        let mut records = Vec::with_capacity(reports.len());
        for raw in reports {
            match IncomeRecord::from_raw(raw) {
                Ok(record) => records.push(record),
                Err(e) => warn!(error = %e, "dropping report"),
            }
        }
        records.sort_by_key(|r| r.fiscal_year);
        Self { records }
    }

    /// Creates a table from already-built records, restoring the sort order.
    #[must_use]
    pub fn from_records(mut records: Vec<IncomeRecord>) -> Self {
        records.sort_by_key(|r| r.fiscal_year);
        Self { records }
    }

    /// The records, ascending by fiscal year.
    #[must_use]
    pub fn records(&self) -> &[IncomeRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> impl Iterator<Item = &IncomeRecord> {
        self.records.iter()
    }

    /// Consumes the table and returns the underlying records.
    #[must_use]
    pub fn into_inner(self) -> Vec<IncomeRecord> {
        self.records
    }

    /// The observed fiscal-year bounds, `None` when the table is empty.
    ///
    /// These are the natural bounds for a year-range selector.
    #[must_use]
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.fiscal_year, last.fiscal_year))
    }

    /// Returns the records with `year_min <= fiscal_year <= year_max` as a
    /// new table.
    ///
    /// Bounds are inclusive; a range matching nothing yields an empty table.
    /// The input table is left untouched and record order is preserved.
    #[must_use]
    pub fn filter_by_year(&self, year_min: i32, year_max: i32) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| r.fiscal_year >= year_min && r.fiscal_year <= year_max)
                .cloned()
                .collect(),
        }
    }
}

impl IntoIterator for IncomeTable {
    type Item = IncomeRecord;
    type IntoIter = std::vec::IntoIter<IncomeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl FromIterator<IncomeRecord> for IncomeTable {
    fn from_iter<I: IntoIterator<Item = IncomeRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
