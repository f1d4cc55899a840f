use std::collections::{BTreeMap, HashSet};

use super::filter::FilteredView;
use super::model::{SalesRecord, YearMonth};

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

/// Headline metrics for the current view.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub total_sales: f64,
    /// May be negative.
    pub total_profit: f64,
    /// Distinct order IDs, not line items.
    pub total_orders: usize,
    /// Mean discount × 100.
    pub avg_discount_pct: f64,
}

/// Sum of one measure for one group key.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
}

/// Sum of sales for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub total: f64,
}

/// Everything the dashboard renders, derived from one filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub kpis: KpiSummary,
    pub region_profit: Vec<GroupTotal>,
    pub sub_category_profit: Vec<GroupTotal>,
    pub monthly_sales: Vec<MonthlyTotal>,
}

// ---------------------------------------------------------------------------
// Aggregations
// ---------------------------------------------------------------------------

/// Compute all four summaries, or `None` when the view is empty.
pub fn summarize(view: &FilteredView<'_>) -> Option<Summary> {
    if view.is_empty() {
        return None;
    }
    Some(Summary {
        kpis: kpi_summary(view),
        region_profit: profit_by(view, |r| r.region.as_str()),
        sub_category_profit: profit_by(view, |r| r.sub_category.as_str()),
        monthly_sales: monthly_sales(view),
    })
}

/// Totals and means over the view. An empty view yields zeros.
pub fn kpi_summary(view: &FilteredView<'_>) -> KpiSummary {
    let mut total_sales = 0.0;
    let mut total_profit = 0.0;
    let mut discount_sum = 0.0;
    let mut orders: HashSet<&str> = HashSet::new();

    for rec in view.records() {
        total_sales += rec.sales;
        total_profit += rec.profit;
        discount_sum += rec.discount;
        orders.insert(rec.order_id.as_str());
    }

    let avg_discount_pct = if view.is_empty() {
        0.0
    } else {
        discount_sum / view.len() as f64 * 100.0
    };

    KpiSummary {
        total_sales,
        total_profit,
        total_orders: orders.len(),
        avg_discount_pct,
    }
}

/// Profit summed per distinct key present in the view, sorted by key.
pub fn profit_by<F>(view: &FilteredView<'_>, key: F) -> Vec<GroupTotal>
where
    F: for<'r> Fn(&'r SalesRecord) -> &'r str,
{
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for rec in view.records() {
        *groups.entry(key(rec)).or_default() += rec.profit;
    }
    groups
        .into_iter()
        .map(|(key, total)| GroupTotal {
            key: key.to_string(),
            total,
        })
        .collect()
}

/// Sales summed per calendar month of order date, oldest first.
/// Months without rows are absent rather than zero.
pub fn monthly_sales(view: &FilteredView<'_>) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for rec in view.records() {
        *buckets.entry(YearMonth::of(rec.order_date)).or_default() += rec.sales;
    }
    buckets
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}
