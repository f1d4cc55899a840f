use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};

// ---------------------------------------------------------------------------
// SalesRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single sales line item.
///
/// One order may span several line items, so `order_id` is not unique.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub order_id: String,
    pub order_date: NaiveDate,
    /// Expected to be on or after `order_date`, never checked.
    pub ship_date: NaiveDate,
    pub region: String,
    pub category: String,
    pub sub_category: String,
    pub sales: f64,
    /// Signed: loss-making lines are negative.
    pub profit: f64,
    /// Fraction in `[0, 1]`.
    pub discount: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full, immutable dataset with pre-computed column indices.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records in source order.
    pub records: Vec<SalesRecord>,
    /// Sorted distinct regions.
    pub regions: BTreeSet<String>,
    /// Sorted distinct categories.
    pub categories: BTreeSet<String>,
    /// Earliest and latest order date (inclusive).
    pub date_span: (NaiveDate, NaiveDate),
}

impl Dataset {
    /// Build the column indices from loaded records.
    ///
    /// Returns `None` for an empty record list: a dataset always has a date
    /// span.
    pub fn from_records(records: Vec<SalesRecord>) -> Option<Self> {
        let first = records.first()?.order_date;
        let mut regions = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let (mut min, mut max) = (first, first);

        for rec in &records {
            regions.insert(rec.region.clone());
            categories.insert(rec.category.clone());
            min = min.min(rec.order_date);
            max = max.max(rec.order_date);
        }

        Some(Dataset {
            records,
            regions,
            categories,
            date_span: (min, max),
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

// ---------------------------------------------------------------------------
// YearMonth – calendar month bucket
// ---------------------------------------------------------------------------

/// A calendar month. Derived ordering is chronological (year, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        YearMonth { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth::new(date.year(), date.month())
    }

    /// Months since year 0, used as a continuous plot axis.
    pub fn ordinal(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    pub fn from_ordinal(ordinal: i64) -> Self {
        YearMonth {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u32 + 1,
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn record(
        order_id: &str,
        order_date: NaiveDate,
        region: &str,
        category: &str,
        sub_category: &str,
        sales: f64,
        profit: f64,
        discount: f64,
    ) -> SalesRecord {
        SalesRecord {
            order_id: order_id.to_string(),
            order_date,
            ship_date: order_date,
            region: region.to_string(),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            sales,
            profit,
            discount,
        }
    }

    #[test]
    fn from_records_builds_indices() {
        let ds = Dataset::from_records(vec![
            record("A", date(2023, 3, 1), "West", "Technology", "Phones", 10.0, 1.0, 0.0),
            record("B", date(2022, 12, 5), "East", "Furniture", "Chairs", 20.0, -2.0, 0.2),
            record("C", date(2023, 1, 9), "West", "Furniture", "Tables", 30.0, 3.0, 0.1),
        ])
        .unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.regions.iter().cloned().collect::<Vec<_>>(),
            vec!["East", "West"]
        );
        assert_eq!(
            ds.categories.iter().cloned().collect::<Vec<_>>(),
            vec!["Furniture", "Technology"]
        );
        assert_eq!(ds.date_span, (date(2022, 12, 5), date(2023, 3, 1)));
    }

    #[test]
    fn from_records_rejects_empty() {
        assert!(Dataset::from_records(Vec::new()).is_none());
    }

    #[test]
    fn year_month_orders_chronologically() {
        let mut months = vec![
            YearMonth::new(2023, 2),
            YearMonth::new(2022, 12),
            YearMonth::new(2023, 1),
        ];
        months.sort();
        assert_eq!(
            months,
            vec![
                YearMonth::new(2022, 12),
                YearMonth::new(2023, 1),
                YearMonth::new(2023, 2)
            ]
        );
    }

    #[test]
    fn year_month_ordinal_roundtrip_and_display() {
        let ym = YearMonth::of(date(2016, 11, 8));
        assert_eq!(ym.to_string(), "2016-11");
        assert_eq!(YearMonth::from_ordinal(ym.ordinal()), ym);
        assert_eq!(
            YearMonth::from_ordinal(YearMonth::new(2017, 1).ordinal() - 1),
            YearMonth::new(2016, 12)
        );
    }
}
