use std::borrow::Cow;
use std::path::Path;

use arrow::array::{
    Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array,
};
use arrow::datatypes::{
    DataType, Date32Type, Date64Type, TimeUnit, TimestampMicrosecondType,
    TimestampMillisecondType, TimestampNanosecondType, TimestampSecondType,
};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use encoding_rs::WINDOWS_1252;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{Dataset, SalesRecord};
use crate::error::{LoadError, Result};

// Source column names.
const REGION: &str = "Region";
const CATEGORY: &str = "Category";
const SUB_CATEGORY: &str = "Sub-Category";
const ORDER_DATE: &str = "Order Date";
const SHIP_DATE: &str = "Ship Date";
const ORDER_ID: &str = "Order ID";
const SALES: &str = "Sales";
const PROFIT: &str = "Profit";
const DISCOUNT: &str = "Discount";

/// How to read ambiguous numeric dates such as `03/04/2016`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `MM/DD/YYYY`
    #[default]
    MonthFirst,
    /// `DD/MM/YYYY`
    DayFirst,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the Superstore column names
/// * `.json`    – `[{ "Order ID": "...", "Order Date": "...", ... }, ...]`
/// * `.parquet` – one column per field, dates as text or `Date32`
pub fn load_file(path: &Path, date_order: DateOrder) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(&read_bytes(path)?, date_order)?,
        "json" => load_json(&read_bytes(path)?, date_order)?,
        "parquet" | "pq" => load_parquet(path, date_order)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    let dataset = Dataset::from_records(records).ok_or(LoadError::Empty)?;
    log::info!(
        "Loaded {} records from {} ({} regions, {} categories, {} to {})",
        dataset.len(),
        path.display(),
        dataset.regions.len(),
        dataset.categories.len(),
        dataset.date_span.0,
        dataset.date_span.1,
    );
    Ok(dataset)
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Row shape shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

/// One source row before date parsing. Columns not named here are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Order ID")]
    order_id: String,
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Ship Date")]
    ship_date: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Sub-Category")]
    sub_category: String,
    #[serde(rename = "Sales")]
    sales: f64,
    #[serde(rename = "Profit")]
    profit: f64,
    #[serde(rename = "Discount")]
    discount: f64,
}

impl RawRow {
    fn into_record(self, row: usize, date_order: DateOrder) -> Result<SalesRecord> {
        Ok(SalesRecord {
            order_date: parse_date(&self.order_date, date_order).ok_or_else(|| {
                LoadError::Date {
                    row,
                    column: ORDER_DATE,
                    value: self.order_date.clone(),
                }
            })?,
            ship_date: parse_date(&self.ship_date, date_order).ok_or_else(|| LoadError::Date {
                row,
                column: SHIP_DATE,
                value: self.ship_date.clone(),
            })?,
            order_id: self.order_id,
            region: self.region,
            category: self.category,
            sub_category: self.sub_category,
            sales: self.sales,
            profit: self.profit,
            discount: self.discount,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one line item per row.
/// Only the nine dashboard columns must be present; the rest are skipped.
fn load_csv(bytes: &[u8], date_order: DateOrder) -> Result<Vec<SalesRecord>> {
    let text = decode_text(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for required in [
        REGION, CATEGORY, SUB_CATEGORY, ORDER_DATE, SHIP_DATE, ORDER_ID, SALES, PROFIT, DISCOUNT,
    ] {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        records.push(result?.into_record(i + 1, date_order)?);
    }
    Ok(records)
}

/// The published Superstore sample is Windows-1252; decode it as such
/// when the bytes are not UTF-8.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s.strip_prefix('\u{feff}').unwrap_or(s)),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Order ID": "CA-2016-152156",
///     "Order Date": "11/8/2016",
///     "Ship Date": "11/11/2016",
///     "Region": "South",
///     "Category": "Furniture",
///     "Sub-Category": "Bookcases",
///     "Sales": 261.96,
///     "Profit": 41.9136,
///     "Discount": 0.0
///   },
///   ...
/// ]
/// ```
fn load_json(bytes: &[u8], date_order: DateOrder) -> Result<Vec<SalesRecord>> {
    let rows: Vec<RawRow> = serde_json::from_slice(bytes)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| row.into_record(i + 1, date_order))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by pandas (`df.to_parquet()`) or polars.
///
/// Text columns may be Utf8 or LargeUtf8, numeric columns any of
/// Float64/Float32/Int64/Int32, and date columns either text or Date32.
fn load_parquet(path: &Path, date_order: DateOrder) -> Result<Vec<SalesRecord>> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;

        let order_id = column(&batch, ORDER_ID)?;
        let order_date = column(&batch, ORDER_DATE)?;
        let ship_date = column(&batch, SHIP_DATE)?;
        let region = column(&batch, REGION)?;
        let category = column(&batch, CATEGORY)?;
        let sub_category = column(&batch, SUB_CATEGORY)?;
        let sales = column(&batch, SALES)?;
        let profit = column(&batch, PROFIT)?;
        let discount = column(&batch, DISCOUNT)?;

        for i in 0..batch.num_rows() {
            let row = records.len() + 1;
            records.push(SalesRecord {
                order_id: extract_string(order_id, i, row, ORDER_ID)?,
                order_date: extract_date(order_date, i, row, ORDER_DATE, date_order)?,
                ship_date: extract_date(ship_date, i, row, SHIP_DATE, date_order)?,
                region: extract_string(region, i, row, REGION)?,
                category: extract_string(category, i, row, CATEGORY)?,
                sub_category: extract_string(sub_category, i, row, SUB_CATEGORY)?,
                sales: extract_f64(sales, i, row, SALES)?,
                profit: extract_f64(profit, i, row, PROFIT)?,
                discount: extract_f64(discount, i, row, DISCOUNT)?,
            });
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn column<'b>(batch: &'b RecordBatch, name: &str) -> Result<&'b ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name.to_string()))?;
    Ok(batch.column(idx))
}

fn value_error(row: usize, column: &'static str, message: String) -> LoadError {
    LoadError::Value {
        row,
        column,
        message,
    }
}

fn extract_string(
    col: &ArrayRef,
    i: usize,
    row: usize,
    column: &'static str,
) -> Result<String> {
    if col.is_null(i) {
        return Err(value_error(row, column, "null".into()));
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(i).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(i).to_string()),
        other => Err(value_error(
            row,
            column,
            format!("expected a string column, got {other:?}"),
        )),
    }
}

fn extract_f64(col: &ArrayRef, i: usize, row: usize, column: &'static str) -> Result<f64> {
    if col.is_null(i) {
        return Err(value_error(row, column, "null".into()));
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        Ok(arr.value(i))
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        Ok(arr.value(i) as f64)
    } else if let Some(arr) = any.downcast_ref::<Int64Array>() {
        Ok(arr.value(i) as f64)
    } else if let Some(arr) = any.downcast_ref::<Int32Array>() {
        Ok(arr.value(i) as f64)
    } else {
        Err(value_error(
            row,
            column,
            format!("expected a numeric column, got {:?}", col.data_type()),
        ))
    }
}

fn extract_date(
    col: &ArrayRef,
    i: usize,
    row: usize,
    column: &'static str,
    date_order: DateOrder,
) -> Result<NaiveDate> {
    if col.is_null(i) {
        return Err(value_error(row, column, "null".into()));
    }
    // pandas writes parsed datetime columns as Timestamp(ns); keep the date.
    let date = match col.data_type() {
        DataType::Date32 => col.as_primitive::<Date32Type>().value_as_date(i),
        DataType::Date64 => col.as_primitive::<Date64Type>().value_as_date(i),
        DataType::Timestamp(TimeUnit::Second, _) => col
            .as_primitive::<TimestampSecondType>()
            .value_as_datetime(i)
            .map(|dt| dt.date()),
        DataType::Timestamp(TimeUnit::Millisecond, _) => col
            .as_primitive::<TimestampMillisecondType>()
            .value_as_datetime(i)
            .map(|dt| dt.date()),
        DataType::Timestamp(TimeUnit::Microsecond, _) => col
            .as_primitive::<TimestampMicrosecondType>()
            .value_as_datetime(i)
            .map(|dt| dt.date()),
        DataType::Timestamp(TimeUnit::Nanosecond, _) => col
            .as_primitive::<TimestampNanosecondType>()
            .value_as_datetime(i)
            .map(|dt| dt.date()),
        _ => {
            let text = extract_string(col, i, row, column)?;
            return parse_date(&text, date_order).ok_or(LoadError::Date {
                row,
                column,
                value: text,
            });
        }
    };
    date.ok_or_else(|| value_error(row, column, "date out of range".into()))
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

/// Parse a calendar date, ignoring any trailing time of day.
///
/// ISO forms (`2016-11-08`, `2016/11/08`) are unambiguous; for
/// `11/8/2016`-style input `date_order` decides which field is the month.
/// The year must have four digits: `11/8/16` is rejected, not guessed.
pub fn parse_date(s: &str, date_order: DateOrder) -> Option<NaiveDate> {
    let day_part = s.trim().split([' ', 'T']).next()?;
    let sep = day_part.chars().find(|c| matches!(c, '-' | '/' | '.'))?;
    let fields: Vec<&str> = day_part.split(sep).collect();
    let [a, b, c] = fields.as_slice() else {
        return None;
    };
    if !fields
        .iter()
        .all(|f| !f.is_empty() && f.bytes().all(|d| d.is_ascii_digit()))
    {
        return None;
    }

    let (year, month, day) = if a.len() == 4 && sep != '.' {
        (a, b, c)
    } else if c.len() == 4 {
        match date_order {
            DateOrder::MonthFirst if sep != '.' => (c, a, b),
            DateOrder::DayFirst => (c, b, a),
            DateOrder::MonthFirst => return None,
        }
    } else {
        return None;
    };
    if month.len() > 2 || day.len() > 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use std::sync::Arc;

    use arrow::array::{Date32Array, StringArray, TimestampNanosecondArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::model::tests::date;

    const HEADER: &str =
        "Row ID,Order ID,Order Date,Ship Date,Ship Mode,Region,Category,Sub-Category,Sales,Quantity,Discount,Profit";

    fn write_temp(suffix: &str, contents: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn parses_month_first_and_iso_dates() {
        let mf = DateOrder::MonthFirst;
        assert_eq!(parse_date("11/8/2016", mf), Some(date(2016, 11, 8)));
        assert_eq!(parse_date("2016-11-08", mf), Some(date(2016, 11, 8)));
        assert_eq!(parse_date("2016-11-08 00:00:00", mf), Some(date(2016, 11, 8)));
        assert_eq!(parse_date("2016-11-08T10:30:00", mf), Some(date(2016, 11, 8)));
        assert_eq!(parse_date("13/8/2016", mf), None);
        assert_eq!(parse_date("not a date", mf), None);
    }

    #[test]
    fn rejects_years_without_four_digits() {
        for order in [DateOrder::MonthFirst, DateOrder::DayFirst] {
            assert_eq!(parse_date("11/8/16", order), None);
            assert_eq!(parse_date("16-11-08", order), None);
            assert_eq!(parse_date("11/8/02016", order), None);
        }
        assert_eq!(parse_date("11.8.2016", DateOrder::MonthFirst), None);
        assert_eq!(parse_date("11.8.2016", DateOrder::DayFirst), Some(date(2016, 8, 11)));
    }

    #[test]
    fn two_digit_year_fails_the_load() {
        let csv = format!(
            "{HEADER}\n1,X-1,11/8/16,11/11/16,First Class,West,Technology,Phones,10,1,0,1\n"
        );
        let file = write_temp(".csv", csv.as_bytes());
        match load_file(file.path(), DateOrder::MonthFirst).unwrap_err() {
            LoadError::Date { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Order Date");
                assert_eq!(value, "11/8/16");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parses_day_first_dates() {
        let df = DateOrder::DayFirst;
        assert_eq!(parse_date("11/8/2016", df), Some(date(2016, 8, 11)));
        assert_eq!(parse_date("13-08-2016", df), Some(date(2016, 8, 13)));
        assert_eq!(parse_date("2016/08/13", df), Some(date(2016, 8, 13)));
    }

    #[test]
    fn loads_csv_ignoring_extra_columns() {
        let csv = format!(
            "{HEADER}\n\
             1,CA-2016-152156,11/8/2016,11/11/2016,Second Class,South,Furniture,Bookcases,261.96,2,0,41.9136\n\
             2,CA-2016-152156,11/8/2016,11/11/2016,Second Class,South,Furniture,Chairs,731.94,3,0,219.582\n\
             3,US-2015-108966,10/11/2015,10/18/2015,Standard Class,South,Office Supplies,Labels,14.62,2,0.2,-6.87\n"
        );
        let file = write_temp(".csv", csv.as_bytes());
        let ds = load_file(file.path(), DateOrder::MonthFirst).unwrap();

        assert_eq!(ds.len(), 3);
        let first = &ds.records[0];
        assert_eq!(first.order_id, "CA-2016-152156");
        assert_eq!(first.order_date, date(2016, 11, 8));
        assert_eq!(first.ship_date, date(2016, 11, 11));
        assert_eq!(first.sub_category, "Bookcases");
        assert!((first.sales - 261.96).abs() < 1e-9);
        assert!((ds.records[2].profit + 6.87).abs() < 1e-9);
        assert!((ds.records[2].discount - 0.2).abs() < 1e-9);
        assert_eq!(ds.date_span, (date(2015, 10, 11), date(2016, 11, 8)));
    }

    #[test]
    fn loads_windows_1252_csv() {
        let mut bytes = format!("{HEADER}\n").into_bytes();
        bytes.extend_from_slice(b"1,X-1,1/2/2017,1/3/2017,First Class,West,Technology,Phones,10,1,0,1\n");
        // 0xE9 is 'é' in Windows-1252 and invalid as a lone UTF-8 byte.
        bytes.extend_from_slice(b"2,X-2,1/2/2017,1/3/2017,First Class,Qu\xe9bec,Technology,Phones,10,1,0,1\n");
        let file = write_temp(".csv", &bytes);

        let ds = load_file(file.path(), DateOrder::MonthFirst).unwrap();
        assert!(ds.regions.contains("Québec"));
    }

    #[test]
    fn decodes_windows_1252_punctuation() {
        let mut bytes = format!("{HEADER}\n").into_bytes();
        // 0x96 is an en dash in Windows-1252, a C1 control in Latin-1.
        bytes.extend_from_slice(
            b"1,X-1,1/2/2017,1/3/2017,First Class,West,Technology,Phones \x96 Mobile,10,1,0,1\n",
        );
        let file = write_temp(".csv", &bytes);

        let ds = load_file(file.path(), DateOrder::MonthFirst).unwrap();
        assert_eq!(ds.records[0].sub_category, "Phones \u{2013} Mobile");
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Order ID,Order Date,Ship Date,Region,Category,Sales,Profit,Discount\n\
                   X-1,1/2/2017,1/3/2017,West,Technology,10,1,0\n";
        let file = write_temp(".csv", csv.as_bytes());
        let err = load_file(file.path(), DateOrder::MonthFirst).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Sub-Category"));
    }

    #[test]
    fn bad_date_reports_row_and_column() {
        let csv = format!(
            "{HEADER}\n\
             1,X-1,1/2/2017,1/3/2017,First Class,West,Technology,Phones,10,1,0,1\n\
             2,X-2,1/2/2017,someday,First Class,West,Technology,Phones,10,1,0,1\n"
        );
        let file = write_temp(".csv", csv.as_bytes());
        match load_file(file.path(), DateOrder::MonthFirst).unwrap_err() {
            LoadError::Date { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Ship Date");
                assert_eq!(value, "someday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_number_is_a_csv_error() {
        let csv = format!(
            "{HEADER}\n1,X-1,1/2/2017,1/3/2017,First Class,West,Technology,Phones,lots,1,0,1\n"
        );
        let file = write_temp(".csv", csv.as_bytes());
        assert!(matches!(
            load_file(file.path(), DateOrder::MonthFirst),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_temp(".csv", format!("{HEADER}\n").as_bytes());
        assert!(matches!(
            load_file(file.path(), DateOrder::MonthFirst),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn missing_file_and_unknown_extension_fail() {
        let err = load_file(Path::new("/nonexistent/superstore.csv"), DateOrder::MonthFirst)
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));

        let file = write_temp(".xlsx", b"whatever");
        let err = load_file(file.path(), DateOrder::MonthFirst).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ref e) if e == "xlsx"));
    }

    #[test]
    fn loads_json_records() {
        let json = r#"[
            {"Order ID": "A", "Order Date": "2023-01-15", "Ship Date": "2023-01-18",
             "Region": "West", "Category": "Technology", "Sub-Category": "Phones",
             "Sales": 100.0, "Profit": 20.5, "Discount": 0.1, "Quantity": 3},
            {"Order ID": "B", "Order Date": "2/3/2023", "Ship Date": "2/4/2023",
             "Region": "East", "Category": "Furniture", "Sub-Category": "Chairs",
             "Sales": 200, "Profit": -5, "Discount": 0}
        ]"#;
        let file = write_temp(".json", json.as_bytes());
        let ds = load_file(file.path(), DateOrder::MonthFirst).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].order_date, date(2023, 2, 3));
        assert!((ds.records[1].profit + 5.0).abs() < 1e-9);
    }

    /// Write a two-row Parquet file whose `Order Date` column is `order_dates`.
    fn write_parquet(order_dates: ArrayRef) -> NamedTempFile {
        let schema = Arc::new(Schema::new(vec![
            Field::new("Order ID", DataType::Utf8, false),
            Field::new("Order Date", order_dates.data_type().clone(), false),
            Field::new("Ship Date", DataType::Utf8, false),
            Field::new("Region", DataType::Utf8, false),
            Field::new("Category", DataType::Utf8, false),
            Field::new("Sub-Category", DataType::Utf8, false),
            Field::new("Sales", DataType::Float64, false),
            Field::new("Profit", DataType::Float64, false),
            Field::new("Discount", DataType::Float64, false),
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(vec!["A", "B"])),
            order_dates,
            Arc::new(StringArray::from(vec!["2023-01-20", "2023-01-21"])),
            Arc::new(StringArray::from(vec!["West", "East"])),
            Arc::new(StringArray::from(vec!["Technology", "Furniture"])),
            Arc::new(StringArray::from(vec!["Phones", "Chairs"])),
            Arc::new(Float64Array::from(vec![100.0, 50.0])),
            Arc::new(Float64Array::from(vec![10.0, -4.0])),
            Arc::new(Float64Array::from(vec![0.0, 0.3])),
        ];
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        file
    }

    #[test]
    fn loads_parquet_with_date32_and_text_dates() {
        // 19372 days after 1970-01-01 is 2023-01-15.
        let file = write_parquet(Arc::new(Date32Array::from(vec![19372, 19373])));

        let ds = load_file(file.path(), DateOrder::MonthFirst).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].order_date, date(2023, 1, 15));
        assert_eq!(ds.records[1].order_date, date(2023, 1, 16));
        assert_eq!(ds.records[1].ship_date, date(2023, 1, 21));
        assert_eq!(ds.records[1].region, "East");
    }

    #[test]
    fn loads_parquet_with_nanosecond_timestamps() {
        // pandas writes parsed dates as Timestamp(ns); the second one has a time of day.
        let midnight = 19_372_i64 * 86_400 * 1_000_000_000;
        let afternoon = midnight + (86_400 + 15 * 3_600) * 1_000_000_000;
        let file = write_parquet(Arc::new(TimestampNanosecondArray::from(vec![
            midnight, afternoon,
        ])));

        let ds = load_file(file.path(), DateOrder::MonthFirst).unwrap();
        assert_eq!(ds.records[0].order_date, date(2023, 1, 15));
        assert_eq!(ds.records[1].order_date, date(2023, 1, 16));
        assert_eq!(ds.date_span, (date(2023, 1, 15), date(2023, 1, 16)));
    }
}
