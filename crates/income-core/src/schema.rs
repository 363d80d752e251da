//! Declared schema for the numeric metric fields of an income statement.
//!
//! Every numeric field the upstream API reports is declared once in
//! [`MetricField`]: its wire name, its display label, and its position in
//! [`MetricField::ALL`]. Parsing, field selection and tests all iterate this
//! list instead of carrying their own string column names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric metric field of an income statement.
///
/// Variants are ordered as the upstream API orders them within a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricField {
    /// Gross profit.
    GrossProfit,
    /// Total revenue.
    TotalRevenue,
    /// Cost of revenue.
    CostOfRevenue,
    /// Cost of goods and services sold.
    CostOfGoodsAndServicesSold,
    /// Operating income.
    OperatingIncome,
    /// Selling, general and administrative expense.
    SellingGeneralAndAdministrative,
    /// Research and development expense.
    ResearchAndDevelopment,
    /// Operating expenses.
    OperatingExpenses,
    /// Net investment income.
    InvestmentIncomeNet,
    /// Net interest income.
    NetInterestIncome,
    /// Interest income.
    InterestIncome,
    /// Interest expense.
    InterestExpense,
    /// Non-interest income.
    NonInterestIncome,
    /// Other non-operating income.
    OtherNonOperatingIncome,
    /// Depreciation.
    Depreciation,
    /// Depreciation and amortization.
    DepreciationAndAmortization,
    /// Income before tax.
    IncomeBeforeTax,
    /// Income tax expense.
    IncomeTaxExpense,
    /// Interest and debt expense.
    InterestAndDebtExpense,
    /// Net income from continuing operations.
    NetIncomeFromContinuingOperations,
    /// Comprehensive income, net of tax.
    ComprehensiveIncomeNetOfTax,
    /// Earnings before interest and taxes.
    Ebit,
    /// Earnings before interest, taxes, depreciation and amortization.
    Ebitda,
    /// Net income.
    NetIncome,
}

impl MetricField {
    /// All metric fields, in wire order.
    pub const ALL: [Self; 24] = [
        Self::GrossProfit,
        Self::TotalRevenue,
        Self::CostOfRevenue,
        Self::CostOfGoodsAndServicesSold,
        Self::OperatingIncome,
        Self::SellingGeneralAndAdministrative,
        Self::ResearchAndDevelopment,
        Self::OperatingExpenses,
        Self::InvestmentIncomeNet,
        Self::NetInterestIncome,
        Self::InterestIncome,
        Self::InterestExpense,
        Self::NonInterestIncome,
        Self::OtherNonOperatingIncome,
        Self::Depreciation,
        Self::DepreciationAndAmortization,
        Self::IncomeBeforeTax,
        Self::IncomeTaxExpense,
        Self::InterestAndDebtExpense,
        Self::NetIncomeFromContinuingOperations,
        Self::ComprehensiveIncomeNetOfTax,
        Self::Ebit,
        Self::Ebitda,
        Self::NetIncome,
    ];

    /// The field's name on the wire.
    ///
    /// Note `costofGoodsAndServicesSold`: the lowercase `o` is what the API
    /// actually sends.
    #[must_use]
    pub const fn api_name(&self) -> &'static str {
        match self {
            Self::GrossProfit => "grossProfit",
            Self::TotalRevenue => "totalRevenue",
            Self::CostOfRevenue => "costOfRevenue",
            Self::CostOfGoodsAndServicesSold => "costofGoodsAndServicesSold",
            Self::OperatingIncome => "operatingIncome",
            Self::SellingGeneralAndAdministrative => "sellingGeneralAndAdministrative",
            Self::ResearchAndDevelopment => "researchAndDevelopment",
            Self::OperatingExpenses => "operatingExpenses",
            Self::InvestmentIncomeNet => "investmentIncomeNet",
            Self::NetInterestIncome => "netInterestIncome",
            Self::InterestIncome => "interestIncome",
            Self::InterestExpense => "interestExpense",
            Self::NonInterestIncome => "nonInterestIncome",
            Self::OtherNonOperatingIncome => "otherNonOperatingIncome",
            Self::Depreciation => "depreciation",
            Self::DepreciationAndAmortization => "depreciationAndAmortization",
            Self::IncomeBeforeTax => "incomeBeforeTax",
            Self::IncomeTaxExpense => "incomeTaxExpense",
            Self::InterestAndDebtExpense => "interestAndDebtExpense",
            Self::NetIncomeFromContinuingOperations => "netIncomeFromContinuingOperations",
            Self::ComprehensiveIncomeNetOfTax => "comprehensiveIncomeNetOfTax",
            Self::Ebit => "ebit",
            Self::Ebitda => "ebitda",
            Self::NetIncome => "netIncome",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GrossProfit => "Gross Profit",
            Self::TotalRevenue => "Total Revenue",
            Self::CostOfRevenue => "Cost of Revenue",
            Self::CostOfGoodsAndServicesSold => "Cost of Goods and Services Sold",
            Self::OperatingIncome => "Operating Income",
            Self::SellingGeneralAndAdministrative => "Selling, General & Administrative",
            Self::ResearchAndDevelopment => "Research & Development",
            Self::OperatingExpenses => "Operating Expenses",
            Self::InvestmentIncomeNet => "Investment Income, Net",
            Self::NetInterestIncome => "Net Interest Income",
            Self::InterestIncome => "Interest Income",
            Self::InterestExpense => "Interest Expense",
            Self::NonInterestIncome => "Non-Interest Income",
            Self::OtherNonOperatingIncome => "Other Non-Operating Income",
            Self::Depreciation => "Depreciation",
            Self::DepreciationAndAmortization => "Depreciation & Amortization",
            Self::IncomeBeforeTax => "Income Before Tax",
            Self::IncomeTaxExpense => "Income Tax Expense",
            Self::InterestAndDebtExpense => "Interest & Debt Expense",
            Self::NetIncomeFromContinuingOperations => "Net Income from Continuing Operations",
            Self::ComprehensiveIncomeNetOfTax => "Comprehensive Income, Net of Tax",
            Self::Ebit => "EBIT",
            Self::Ebitda => "EBITDA",
            Self::NetIncome => "Net Income",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

/// Expense categories available for the expense-breakdown selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Selling, general and administrative expense.
    SellingGeneralAndAdministrative,
    /// Research and development expense.
    ResearchAndDevelopment,
    /// Interest expense.
    InterestExpense,
}

impl ExpenseCategory {
    /// All selectable expense categories.
    pub const ALL: [Self; 3] = [
        Self::SellingGeneralAndAdministrative,
        Self::ResearchAndDevelopment,
        Self::InterestExpense,
    ];

    /// The metric field this category reads.
    #[must_use]
    pub const fn field(&self) -> MetricField {
        match self {
            Self::SellingGeneralAndAdministrative => MetricField::SellingGeneralAndAdministrative,
            Self::ResearchAndDevelopment => MetricField::ResearchAndDevelopment,
            Self::InterestExpense => MetricField::InterestExpense,
        }
    }

    /// Short display label used in the breakdown legend.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SellingGeneralAndAdministrative => "SG&A",
            Self::ResearchAndDevelopment => "R&D",
            Self::InterestExpense => "Interest Exp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_wire_names_are_unique() {
        let names: HashSet<&str> = MetricField::ALL.iter().map(|f| f.api_name()).collect();
        assert_eq!(names.len(), MetricField::ALL.len());
    }

    #[test]
    fn test_wire_name_spelling() {
        // The one irregular wire name the API sends.
        assert_eq!(
            MetricField::CostOfGoodsAndServicesSold.api_name(),
            "costofGoodsAndServicesSold"
        );
        assert_eq!(MetricField::NetIncome.api_name(), "netIncome");
    }

    #[test]
    fn test_expense_categories_map_to_metric_fields() {
        assert_eq!(
            ExpenseCategory::SellingGeneralAndAdministrative.field(),
            MetricField::SellingGeneralAndAdministrative
        );
        assert_eq!(
            ExpenseCategory::ResearchAndDevelopment.field(),
            MetricField::ResearchAndDevelopment
        );
        assert_eq!(
            ExpenseCategory::InterestExpense.field(),
            MetricField::InterestExpense
        );
        assert_eq!(ExpenseCategory::SellingGeneralAndAdministrative.label(), "SG&A");
    }
}
