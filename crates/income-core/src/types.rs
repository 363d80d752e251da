//! Core data types for income-statement data.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Symbol`] - Trading symbol/ticker
//! - [`RawReport`] - One reporting period exactly as received from the API
//! - [`IncomeRecord`] - One fiscal year's cleaned, typed, derived row

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{DataError, Result};
use crate::schema::MetricField;

/// A trading symbol/ticker.
///
/// Symbols are automatically uppercased on creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().to_uppercase())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One reporting period's income statement exactly as received from the API.
///
/// Every value is transmitted as a string or null; the API also sends the
/// literal string `"None"` for metrics it has no figure for. Coercion to
/// numbers happens in [`IncomeRecord::from_raw`], not here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReport {
    /// End date of the reporting period, as sent ("YYYY-MM-DD").
    #[serde(rename = "fiscalDateEnding", default)]
    pub fiscal_date_ending: Option<String>,
    /// Every other field, keyed by its wire name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Option<String>>,
}

impl RawReport {
    /// Returns the raw string value of a metric field, if present and non-null.
    #[must_use]
    pub fn metric(&self, field: MetricField) -> Option<&str> {
        self.fields.get(field.api_name()).and_then(|v| v.as_deref())
    }
}

/// One fiscal year's cleaned income-statement row.
///
/// All metric fields are `None` when the raw value was absent, null, or not
/// a finite number. [`profit_margin_pct`](Self::profit_margin_pct) is derived
/// from net income and total revenue and is `None` whenever either input is
/// missing or revenue is zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    /// End date of the reporting period.
    pub period_end: NaiveDate,
    /// Calendar year of [`period_end`](Self::period_end).
    pub fiscal_year: i32,

    /// Gross profit.
    pub gross_profit: Option<f64>,
    /// Total revenue.
    pub total_revenue: Option<f64>,
    /// Cost of revenue.
    pub cost_of_revenue: Option<f64>,
    /// Cost of goods and services sold.
    pub cost_of_goods_and_services_sold: Option<f64>,
    /// Operating income.
    pub operating_income: Option<f64>,
    /// Selling, general and administrative expense.
    pub selling_general_and_administrative: Option<f64>,
    /// Research and development expense.
    pub research_and_development: Option<f64>,
    /// Operating expenses.
    pub operating_expenses: Option<f64>,
    /// Net investment income.
    pub investment_income_net: Option<f64>,
    /// Net interest income.
    pub net_interest_income: Option<f64>,
    /// Interest income.
    pub interest_income: Option<f64>,
    /// Interest expense.
    pub interest_expense: Option<f64>,
    /// Non-interest income.
    pub non_interest_income: Option<f64>,
    /// Other non-operating income.
    pub other_non_operating_income: Option<f64>,
    /// Depreciation.
    pub depreciation: Option<f64>,
    /// Depreciation and amortization.
    pub depreciation_and_amortization: Option<f64>,
    /// Income before tax.
    pub income_before_tax: Option<f64>,
    /// Income tax expense.
    pub income_tax_expense: Option<f64>,
    /// Interest and debt expense.
    pub interest_and_debt_expense: Option<f64>,
    /// Net income from continuing operations.
    pub net_income_from_continuing_operations: Option<f64>,
    /// Comprehensive income, net of tax.
    pub comprehensive_income_net_of_tax: Option<f64>,
    /// Earnings before interest and taxes.
    pub ebit: Option<f64>,
    /// Earnings before interest, taxes, depreciation and amortization.
    pub ebitda: Option<f64>,
    /// Net income.
    pub net_income: Option<f64>,

    /// Net profit margin in percent: `net_income / total_revenue * 100`.
    pub profit_margin_pct: Option<f64>,
}

/// Numeric coercion for a raw metric value. Anything that does not parse to
/// a finite `f64` (including the API's literal `"None"`) becomes missing.
fn parse_metric(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl IncomeRecord {
    /// Creates an empty record for the given period end.
    #[must_use]
    pub fn new(period_end: NaiveDate) -> Self {
        Self {
            period_end,
            fiscal_year: period_end.year(),
            ..Default::default()
        }
    }

    /// Builds a record from a raw report.
    ///
    /// Returns [`DataError::Parse`] when `fiscalDateEnding` is absent or not
    /// a `YYYY-MM-DD` date. Metric fields never fail the row: unparseable
    /// values are stored as missing.
    pub fn from_raw(raw: &RawReport) -> Result<Self> {
        let date_str = raw.fiscal_date_ending.as_deref().unwrap_or_default();
        let period_end = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            DataError::Parse(format!("unparseable fiscalDateEnding: {date_str:?}"))
        })?;

        let mut record = Self::new(period_end);
        for field in MetricField::ALL {
            *record.metric_mut(field) = raw.metric(field).and_then(parse_metric);
        }

        record.profit_margin_pct = match (record.net_income, record.total_revenue) {
            (Some(net), Some(revenue)) if revenue != 0.0 => Some(net / revenue * 100.0),
            _ => None,
        };

        Ok(record)
    }

    /// Returns a metric field's value by schema name.
    #[must_use]
    pub const fn metric(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::GrossProfit => self.gross_profit,
            MetricField::TotalRevenue => self.total_revenue,
            MetricField::CostOfRevenue => self.cost_of_revenue,
            MetricField::CostOfGoodsAndServicesSold => self.cost_of_goods_and_services_sold,
            MetricField::OperatingIncome => self.operating_income,
            MetricField::SellingGeneralAndAdministrative => {
                self.selling_general_and_administrative
            }
            MetricField::ResearchAndDevelopment => self.research_and_development,
            MetricField::OperatingExpenses => self.operating_expenses,
            MetricField::InvestmentIncomeNet => self.investment_income_net,
            MetricField::NetInterestIncome => self.net_interest_income,
            MetricField::InterestIncome => self.interest_income,
            MetricField::InterestExpense => self.interest_expense,
            MetricField::NonInterestIncome => self.non_interest_income,
            MetricField::OtherNonOperatingIncome => self.other_non_operating_income,
            MetricField::Depreciation => self.depreciation,
            MetricField::DepreciationAndAmortization => self.depreciation_and_amortization,
            MetricField::IncomeBeforeTax => self.income_before_tax,
            MetricField::IncomeTaxExpense => self.income_tax_expense,
            MetricField::InterestAndDebtExpense => self.interest_and_debt_expense,
            MetricField::NetIncomeFromContinuingOperations => {
                self.net_income_from_continuing_operations
            }
            MetricField::ComprehensiveIncomeNetOfTax => self.comprehensive_income_net_of_tax,
            MetricField::Ebit => self.ebit,
            MetricField::Ebitda => self.ebitda,
            MetricField::NetIncome => self.net_income,
        }
    }

    /// Mutable access to a metric field by schema name.
    pub fn metric_mut(&mut self, field: MetricField) -> &mut Option<f64> {
        match field {
            MetricField::GrossProfit => &mut self.gross_profit,
            MetricField::TotalRevenue => &mut self.total_revenue,
            MetricField::CostOfRevenue => &mut self.cost_of_revenue,
            MetricField::CostOfGoodsAndServicesSold => &mut self.cost_of_goods_and_services_sold,
            MetricField::OperatingIncome => &mut self.operating_income,
            MetricField::SellingGeneralAndAdministrative => {
                &mut self.selling_general_and_administrative
            }
            MetricField::ResearchAndDevelopment => &mut self.research_and_development,
            MetricField::OperatingExpenses => &mut self.operating_expenses,
            MetricField::InvestmentIncomeNet => &mut self.investment_income_net,
            MetricField::NetInterestIncome => &mut self.net_interest_income,
            MetricField::InterestIncome => &mut self.interest_income,
            MetricField::InterestExpense => &mut self.interest_expense,
            MetricField::NonInterestIncome => &mut self.non_interest_income,
            MetricField::OtherNonOperatingIncome => &mut self.other_non_operating_income,
            MetricField::Depreciation => &mut self.depreciation,
            MetricField::DepreciationAndAmortization => &mut self.depreciation_and_amortization,
            MetricField::IncomeBeforeTax => &mut self.income_before_tax,
            MetricField::IncomeTaxExpense => &mut self.income_tax_expense,
            MetricField::InterestAndDebtExpense => &mut self.interest_and_debt_expense,
            MetricField::NetIncomeFromContinuingOperations => {
                &mut self.net_income_from_continuing_operations
            }
            MetricField::ComprehensiveIncomeNetOfTax => &mut self.comprehensive_income_net_of_tax,
            MetricField::Ebit => &mut self.ebit,
            MetricField::Ebitda => &mut self.ebitda,
            MetricField::NetIncome => &mut self.net_income,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_from_json(value: serde_json::Value) -> RawReport {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_symbol_uppercases() {
        assert_eq!(Symbol::new("aapl").as_str(), "AAPL");
        assert_eq!("goog".parse::<Symbol>().unwrap().as_str(), "GOOG");
    }

    #[test]
    fn test_raw_report_deserializes_wire_shape() {
        let raw = raw_from_json(json!({
            "fiscalDateEnding": "2021-09-30",
            "reportedCurrency": "USD",
            "totalRevenue": "365817000000",
            "netIncome": "94680000000",
            "interestExpense": "None",
            "depreciation": null
        }));

        assert_eq!(raw.fiscal_date_ending.as_deref(), Some("2021-09-30"));
        assert_eq!(raw.metric(MetricField::TotalRevenue), Some("365817000000"));
        assert_eq!(raw.metric(MetricField::InterestExpense), Some("None"));
        assert_eq!(raw.metric(MetricField::Depreciation), None);
        assert_eq!(raw.metric(MetricField::Ebitda), None);
    }

    #[test]
    fn test_from_raw_parses_and_derives_margin() {
        let raw = raw_from_json(json!({
            "fiscalDateEnding": "2020-09-30",
            "totalRevenue": "100",
            "netIncome": "20"
        }));

        let record = IncomeRecord::from_raw(&raw).unwrap();
        assert_eq!(record.fiscal_year, 2020);
        assert_eq!(record.total_revenue, Some(100.0));
        assert_eq!(record.net_income, Some(20.0));
        assert_eq!(record.profit_margin_pct, Some(20.0));
        assert_eq!(record.gross_profit, None);
    }

    #[test]
    fn test_from_raw_rejects_bad_date() {
        let raw = raw_from_json(json!({
            "fiscalDateEnding": "not-a-date",
            "totalRevenue": "100"
        }));
        assert!(matches!(
            IncomeRecord::from_raw(&raw),
            Err(DataError::Parse(_))
        ));

        let raw = raw_from_json(json!({ "totalRevenue": "100" }));
        assert!(matches!(
            IncomeRecord::from_raw(&raw),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn test_margin_missing_on_zero_revenue() {
        let raw = raw_from_json(json!({
            "fiscalDateEnding": "2020-09-30",
            "totalRevenue": "0",
            "netIncome": "20"
        }));
        let record = IncomeRecord::from_raw(&raw).unwrap();
        assert_eq!(record.profit_margin_pct, None);
    }

    #[test]
    fn test_margin_missing_when_net_income_missing() {
        let raw = raw_from_json(json!({
            "fiscalDateEnding": "2020-09-30",
            "totalRevenue": "100",
            "netIncome": null,
            "grossProfit": "40"
        }));
        let record = IncomeRecord::from_raw(&raw).unwrap();
        assert_eq!(record.net_income, None);
        assert_eq!(record.profit_margin_pct, None);
        assert_eq!(record.gross_profit, Some(40.0));
    }

    #[test]
    fn test_metric_coercion_failures_become_missing() {
        let raw = raw_from_json(json!({
            "fiscalDateEnding": "2020-09-30",
            "ebitda": "None",
            "ebit": "",
            "depreciation": "abc",
            "interestIncome": "inf",
            "netIncome": " 42 "
        }));
        let record = IncomeRecord::from_raw(&raw).unwrap();
        assert_eq!(record.ebitda, None);
        assert_eq!(record.ebit, None);
        assert_eq!(record.depreciation, None);
        assert_eq!(record.interest_income, None);
        assert_eq!(record.net_income, Some(42.0));
    }

    #[test]
    fn test_metric_accessor_covers_schema() {
        let raw = raw_from_json(json!({
            "fiscalDateEnding": "2020-09-30",
            "grossProfit": "1", "totalRevenue": "2", "costOfRevenue": "3",
            "costofGoodsAndServicesSold": "4", "operatingIncome": "5",
            "sellingGeneralAndAdministrative": "6", "researchAndDevelopment": "7",
            "operatingExpenses": "8", "investmentIncomeNet": "9",
            "netInterestIncome": "10", "interestIncome": "11",
            "interestExpense": "12", "nonInterestIncome": "13",
            "otherNonOperatingIncome": "14", "depreciation": "15",
            "depreciationAndAmortization": "16", "incomeBeforeTax": "17",
            "incomeTaxExpense": "18", "interestAndDebtExpense": "19",
            "netIncomeFromContinuingOperations": "20",
            "comprehensiveIncomeNetOfTax": "21", "ebit": "22", "ebitda": "23",
            "netIncome": "24"
        }));
        let record = IncomeRecord::from_raw(&raw).unwrap();
        for (i, field) in MetricField::ALL.iter().enumerate() {
            assert_eq!(record.metric(*field), Some((i + 1) as f64), "{field}");
        }
    }
}
