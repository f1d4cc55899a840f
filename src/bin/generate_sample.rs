use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Date32Array, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Days, NaiveDate};
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const REGIONS: [&str; 4] = ["Central", "East", "South", "West"];

const CATALOGUE: [(&str, &[&str]); 3] = [
    ("Furniture", &["Bookcases", "Chairs", "Furnishings", "Tables"]),
    (
        "Office Supplies",
        &[
            "Appliances", "Art", "Binders", "Envelopes", "Fasteners", "Labels", "Paper",
            "Storage", "Supplies",
        ],
    ),
    ("Technology", &["Accessories", "Copiers", "Machines", "Phones"]),
];

const DISCOUNTS: [f64; 7] = [0.0, 0.0, 0.0, 0.1, 0.2, 0.4, 0.7];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

/// One CSV row, in the published Superstore column layout.
#[derive(Serialize)]
struct Row {
    #[serde(rename = "Row ID")]
    row_id: usize,
    #[serde(rename = "Order ID")]
    order_id: String,
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Ship Date")]
    ship_date: String,
    #[serde(rename = "Region")]
    region: &'static str,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Sub-Category")]
    sub_category: &'static str,
    #[serde(rename = "Sales")]
    sales: f64,
    #[serde(rename = "Quantity")]
    quantity: u32,
    #[serde(rename = "Discount")]
    discount: f64,
    #[serde(rename = "Profit")]
    profit: f64,
}

struct Line {
    order_id: String,
    order_date: NaiveDate,
    ship_date: NaiveDate,
    region: &'static str,
    category: &'static str,
    sub_category: &'static str,
    sales: f64,
    quantity: u32,
    discount: f64,
    profit: f64,
}

fn generate(rng: &mut SimpleRng, orders: usize) -> Result<Vec<Line>> {
    let first_day = NaiveDate::from_ymd_opt(2014, 1, 3).context("invalid start date")?;
    let span_days = 4 * 365;

    let mut lines = Vec::new();
    for n in 0..orders {
        let order_date = first_day + Days::new(rng.below(span_days) as u64);
        let ship_date = order_date + Days::new(rng.below(7) as u64);
        let region = *rng.pick(&REGIONS);
        let order_id = format!(
            "{}-{}-{}",
            region[..2].to_uppercase(),
            order_date.format("%Y"),
            100_000 + n
        );

        for _ in 0..1 + rng.below(4) {
            let (category, subs) = *rng.pick(&CATALOGUE);
            let sub_category = *rng.pick(subs);
            let quantity = 1 + rng.below(9) as u32;
            let unit_price = (3.0 + rng.next_f64() * 400.0).round();
            let discount = *rng.pick(&DISCOUNTS);
            let sales = (unit_price * quantity as f64 * (1.0 - discount) * 100.0).round() / 100.0;
            let margin = 0.05 + rng.next_f64() * 0.35 - discount * 0.9;
            let profit = (sales * margin * 10_000.0).round() / 10_000.0;

            lines.push(Line {
                order_id: order_id.clone(),
                order_date,
                ship_date,
                region,
                category,
                sub_category,
                sales,
                quantity,
                discount,
                profit,
            });
        }
    }
    Ok(lines)
}

fn write_csv(path: &Path, lines: &[Line]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for (i, line) in lines.iter().enumerate() {
        writer.serialize(Row {
            row_id: i + 1,
            order_id: line.order_id.clone(),
            order_date: line.order_date.format("%-m/%-d/%Y").to_string(),
            ship_date: line.ship_date.format("%-m/%-d/%Y").to_string(),
            region: line.region,
            category: line.category,
            sub_category: line.sub_category,
            sales: line.sales,
            quantity: line.quantity,
            discount: line.discount,
            profit: line.profit,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Order dates as `Date32`, ship dates as ISO text.
fn write_parquet(path: &Path, lines: &[Line]) -> Result<()> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).context("invalid epoch")?;
    let text = |f: fn(&Line) -> &str| -> ArrayRef {
        Arc::new(StringArray::from(lines.iter().map(f).collect::<Vec<_>>()))
    };
    let number = |f: fn(&Line) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from(lines.iter().map(f).collect::<Vec<_>>()))
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("Order ID", DataType::Utf8, false),
        Field::new("Order Date", DataType::Date32, false),
        Field::new("Ship Date", DataType::Utf8, false),
        Field::new("Region", DataType::Utf8, false),
        Field::new("Category", DataType::Utf8, false),
        Field::new("Sub-Category", DataType::Utf8, false),
        Field::new("Sales", DataType::Float64, false),
        Field::new("Discount", DataType::Float64, false),
        Field::new("Profit", DataType::Float64, false),
    ]));

    let order_days: Vec<i32> = lines
        .iter()
        .map(|l| (l.order_date - epoch).num_days() as i32)
        .collect();
    let ship_dates: Vec<String> = lines
        .iter()
        .map(|l| l.ship_date.format("%Y-%m-%d").to_string())
        .collect();

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            text(|l| l.order_id.as_str()),
            Arc::new(Date32Array::from(order_days)),
            Arc::new(StringArray::from(ship_dates)),
            text(|l| l.region),
            text(|l| l.category),
            text(|l| l.sub_category),
            number(|l| l.sales),
            number(|l| l.discount),
            number(|l| l.profit),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let csv_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sales_dashboard/Sample_ Superstore.csv"));
    let parquet_path = csv_path.with_extension("parquet");

    if let Some(dir) = csv_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut rng = SimpleRng::new(42);
    let lines = generate(&mut rng, 2_000)?;

    write_csv(&csv_path, &lines)?;
    write_parquet(&parquet_path, &lines)?;

    println!(
        "Wrote {} line items to {} and {}",
        lines.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
