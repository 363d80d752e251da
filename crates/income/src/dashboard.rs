//! Chart-series selection for the dashboard's eight views.
//!
//! Rendering stays external: this module only decides which fields each view
//! reads and reshapes the sorted table into labeled year/value series.

use serde::{Deserialize, Serialize};

use income_core::{ExpenseCategory, IncomeRecord, IncomeTable, MetricField};

/// Ticker choices offered by the dashboard's symbol selector; any
/// user-entered symbol works too.
pub const DEFAULT_SYMBOLS: [&str; 3] = ["AAPL", "META", "GOOG"];

/// One (fiscal year, value) point of a chart series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Fiscal year on the x axis.
    pub fiscal_year: i32,
    /// Metric value on the y axis.
    pub value: f64,
}

/// A labeled chart series, points ascending by fiscal year.
///
/// Years with a missing value are skipped rather than zero-filled, so a
/// renderer shows a gap instead of a fake data point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// The data points.
    pub points: Vec<SeriesPoint>,
}

fn labeled_series(
    table: &IncomeTable,
    label: &str,
    value: impl Fn(&IncomeRecord) -> Option<f64>,
) -> Series {
    Series {
        label: label.to_string(),
        points: table
            .iter()
            .filter_map(|r| {
                value(r).map(|v| SeriesPoint {
                    fiscal_year: r.fiscal_year,
                    value: v,
                })
            })
            .collect(),
    }
}

/// Extracts one metric field as a series labeled with the field's display
/// name.
#[must_use]
pub fn metric_series(table: &IncomeTable, field: MetricField) -> Series {
    labeled_series(table, field.label(), |r| r.metric(field))
}

/// The derived profit-margin series.
#[must_use]
pub fn margin_series(table: &IncomeTable) -> Series {
    labeled_series(table, "Profit Margin (%)", |r| r.profit_margin_pct)
}

/// One series per selected expense category, in selection order.
///
/// An empty selection yields no series; the caller decides what to render
/// in that case.
#[must_use]
pub fn expense_breakdown(table: &IncomeTable, categories: &[ExpenseCategory]) -> Vec<Series> {
    categories
        .iter()
        .map(|category| labeled_series(table, category.label(), |r| r.metric(category.field())))
        .collect()
}

/// The eight dashboard views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartView {
    /// Total revenue over time (bar).
    TotalRevenue,
    /// Net income over time (line).
    NetIncome,
    /// Gross profit vs operating income (multi-line).
    GrossProfitVsOperatingIncome,
    /// EBITDA vs net income (grouped bar).
    EbitdaVsNetIncome,
    /// Selected expense categories (stacked bar).
    ExpenseBreakdown,
    /// Revenue vs cost of revenue (area).
    RevenueVsCostOfRevenue,
    /// R&D vs SG&A expenses (line).
    ResearchVsSellingExpenses,
    /// Profit margin percentage over time (line).
    ProfitMargin,
}

impl ChartView {
    /// All views, in dashboard order.
    pub const ALL: [Self; 8] = [
        Self::TotalRevenue,
        Self::NetIncome,
        Self::GrossProfitVsOperatingIncome,
        Self::EbitdaVsNetIncome,
        Self::ExpenseBreakdown,
        Self::RevenueVsCostOfRevenue,
        Self::ResearchVsSellingExpenses,
        Self::ProfitMargin,
    ];

    /// The view's title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::TotalRevenue => "Total Revenue by Fiscal Year",
            Self::NetIncome => "Net Income by Fiscal Year",
            Self::GrossProfitVsOperatingIncome => "Gross Profit vs Operating Income",
            Self::EbitdaVsNetIncome => "EBITDA vs Net Income",
            Self::ExpenseBreakdown => "Major Expense Categories (Stacked)",
            Self::RevenueVsCostOfRevenue => "Revenue vs Cost of Revenue",
            Self::ResearchVsSellingExpenses => "R&D vs SG&A Expenses",
            Self::ProfitMargin => "Net Profit Margin (%) by Year",
        }
    }

    /// The view's series for a (typically year-filtered) table.
    ///
    /// Only [`ChartView::ExpenseBreakdown`] consults `expenses`, the
    /// caller's expense-category selection.
    #[must_use]
    pub fn series(&self, table: &IncomeTable, expenses: &[ExpenseCategory]) -> Vec<Series> {
        match self {
            Self::TotalRevenue => vec![metric_series(table, MetricField::TotalRevenue)],
            Self::NetIncome => vec![metric_series(table, MetricField::NetIncome)],
            Self::GrossProfitVsOperatingIncome => vec![
                metric_series(table, MetricField::GrossProfit),
                metric_series(table, MetricField::OperatingIncome),
            ],
            Self::EbitdaVsNetIncome => vec![
                metric_series(table, MetricField::Ebitda),
                metric_series(table, MetricField::NetIncome),
            ],
            Self::ExpenseBreakdown => expense_breakdown(table, expenses),
            Self::RevenueVsCostOfRevenue => vec![
                metric_series(table, MetricField::TotalRevenue),
                metric_series(table, MetricField::CostOfRevenue),
            ],
            Self::ResearchVsSellingExpenses => expense_breakdown(
                table,
                &[
                    ExpenseCategory::ResearchAndDevelopment,
                    ExpenseCategory::SellingGeneralAndAdministrative,
                ],
            ),
            Self::ProfitMargin => vec![margin_series(table)],
        }
    }
}

/// One row of the sample-columns summary table shown above the charts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Fiscal year.
    pub fiscal_year: i32,
    /// Total revenue.
    pub total_revenue: Option<f64>,
    /// Net income.
    pub net_income: Option<f64>,
    /// Gross profit.
    pub gross_profit: Option<f64>,
    /// Derived profit margin in percent.
    pub profit_margin_pct: Option<f64>,
}

/// Projects the table onto the summary columns, one row per record.
#[must_use]
pub fn summary_rows(table: &IncomeTable) -> Vec<SummaryRow> {
    table
        .iter()
        .map(|r| SummaryRow {
            fiscal_year: r.fiscal_year,
            total_revenue: r.total_revenue,
            net_income: r.net_income,
            gross_profit: r.gross_profit,
            profit_margin_pct: r.profit_margin_pct,
        })
        .collect()
}

/// Formats a dollar amount as whole billions, e.g. `$383B`.
#[must_use]
pub fn format_billions(value: f64) -> String {
    format!("${:.0}B", value / 1e9)
}

/// Formats a plain numeric axis value with one decimal.
#[must_use]
pub fn format_plain(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use income_core::RawReport;
    use serde_json::json;

    fn table() -> IncomeTable {
        let reports: Vec<RawReport> = serde_json::from_value(json!([
            {
                "fiscalDateEnding": "2020-09-30",
                "totalRevenue": "100",
                "netIncome": "20",
                "grossProfit": "40",
                "operatingIncome": "30",
                "ebitda": "None",
                "researchAndDevelopment": "10",
                "sellingGeneralAndAdministrative": "15",
                "interestExpense": "5"
            },
            {
                "fiscalDateEnding": "2021-09-30",
                "totalRevenue": "200",
                "netIncome": "50",
                "grossProfit": "90",
                "operatingIncome": "70",
                "ebitda": "110",
                "researchAndDevelopment": "12",
                "sellingGeneralAndAdministrative": "18",
                "interestExpense": "6"
            }
        ]))
        .unwrap();
        IncomeTable::from_reports(&reports)
    }

    #[test]
    fn test_metric_series_skips_missing_values() {
        let series = metric_series(&table(), MetricField::Ebitda);
        assert_eq!(series.label, "EBITDA");
        assert_eq!(
            series.points,
            vec![SeriesPoint {
                fiscal_year: 2021,
                value: 110.0
            }]
        );
    }

    #[test]
    fn test_margin_series() {
        let series = margin_series(&table());
        assert_eq!(series.label, "Profit Margin (%)");
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].value, 20.0);
        assert_eq!(series.points[1].value, 25.0);
    }

    #[test]
    fn test_expense_breakdown_honors_selection() {
        let t = table();

        let all = expense_breakdown(&t, &ExpenseCategory::ALL);
        assert_eq!(
            all.iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
            vec!["SG&A", "R&D", "Interest Exp"]
        );

        let one = expense_breakdown(&t, &[ExpenseCategory::InterestExpense]);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].points[0].value, 5.0);

        assert!(expense_breakdown(&t, &[]).is_empty());
    }

    #[test]
    fn test_every_view_yields_series() {
        let t = table();
        for view in ChartView::ALL {
            let series = view.series(&t, &ExpenseCategory::ALL);
            assert!(!series.is_empty(), "{view:?}");
            assert!(!view.title().is_empty());
        }
        // Empty expense selection empties exactly the breakdown view.
        assert!(ChartView::ExpenseBreakdown.series(&t, &[]).is_empty());
        assert!(!ChartView::ProfitMargin.series(&t, &[]).is_empty());
    }

    #[test]
    fn test_research_vs_selling_uses_short_labels() {
        let series = ChartView::ResearchVsSellingExpenses.series(&table(), &[]);
        assert_eq!(
            series.iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
            vec!["R&D", "SG&A"]
        );
    }

    #[test]
    fn test_summary_rows_project_sample_columns() {
        let rows = summary_rows(&table());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fiscal_year, 2020);
        assert_eq!(rows[0].total_revenue, Some(100.0));
        assert_eq!(rows[0].net_income, Some(20.0));
        assert_eq!(rows[0].gross_profit, Some(40.0));
        assert_eq!(rows[0].profit_margin_pct, Some(20.0));
    }

    #[test]
    fn test_axis_formatters() {
        assert_eq!(format_billions(383_285_000_000.0), "$383B");
        assert_eq!(format_billions(94_680_000_000.0), "$95B");
        assert_eq!(format_plain(33.333), "33.3");
        assert_eq!(format_plain(25.0), "25.0");
    }
}
