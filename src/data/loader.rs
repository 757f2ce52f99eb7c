use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type, Schema};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{
    LaunchDataset, LaunchRecord, Outcome, COL_BOOSTER_VERSION, COL_CLASS, COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
};
use crate::error::{DatasetError, DatasetResult};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row incl. `Launch Site`, `Payload Mass (kg)`, `class`,
///   `Booster Version`; any further columns are ignored
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – the same four columns as a flat table
pub fn load_file(path: &Path) -> DatasetResult<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => {
            return Err(DatasetError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    log::debug!(
        "parsed {} launch records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

fn open(path: &Path) -> DatasetResult<File> {
    File::open(path).map_err(|source| DatasetError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Cell parsing shared by all formats
// ---------------------------------------------------------------------------

fn invalid(row: usize, column: &str, value: impl ToString) -> DatasetError {
    DatasetError::InvalidValue {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn check_payload(row: usize, kg: f64) -> DatasetResult<f64> {
    if kg.is_finite() && kg >= 0.0 {
        Ok(kg)
    } else {
        Err(invalid(row, COL_PAYLOAD_MASS, kg))
    }
}

fn check_class(row: usize, class: f64) -> DatasetResult<Outcome> {
    Outcome::from_class(class).ok_or_else(|| invalid(row, COL_CLASS, class))
}

fn parse_number(row: usize, column: &str, text: &str) -> DatasetResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| invalid(row, column, text))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Column positions of the four required fields in a header row.
struct CsvColumns {
    site: usize,
    payload: usize,
    class: usize,
    booster: usize,
}

impl CsvColumns {
    fn locate(headers: &csv::StringRecord) -> DatasetResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DatasetError::MissingColumn {
                    column: name.to_string(),
                })
        };
        Ok(CsvColumns {
            site: find(COL_LAUNCH_SITE)?,
            payload: find(COL_PAYLOAD_MASS)?,
            class: find(COL_CLASS)?,
            booster: find(COL_BOOSTER_VERSION)?,
        })
    }
}

fn load_csv(path: &Path) -> DatasetResult<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    let cols = CsvColumns::locate(reader.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let rec = result?;
        let cell = |idx: usize| rec.get(idx).unwrap_or("");

        let payload = parse_number(row, COL_PAYLOAD_MASS, cell(cols.payload))?;
        let class = parse_number(row, COL_CLASS, cell(cols.class))?;

        records.push(LaunchRecord::new(
            cell(cols.site),
            check_payload(row, payload)?,
            check_class(row, class)?,
            cell(cols.booster),
        ));
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 0,
///     "Booster Version": "F9 v1.0  B0007"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> DatasetResult<LaunchDataset> {
    let root: JsonValue = serde_json::from_reader(std::io::BufReader::new(open(path)?))?;

    let rows = root
        .as_array()
        .ok_or_else(|| invalid(0, "<root>", "expected a top-level JSON array"))?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, value) in rows.iter().enumerate() {
        let row = i + 1;
        let obj = value
            .as_object()
            .ok_or_else(|| invalid(row, "<row>", value))?;

        let field = |name: &str| {
            obj.get(name).ok_or_else(|| DatasetError::MissingColumn {
                column: name.to_string(),
            })
        };

        let site = json_text(row, COL_LAUNCH_SITE, field(COL_LAUNCH_SITE)?)?;
        let payload = json_number(row, COL_PAYLOAD_MASS, field(COL_PAYLOAD_MASS)?)?;
        let class = json_number(row, COL_CLASS, field(COL_CLASS)?)?;
        let booster = json_text(row, COL_BOOSTER_VERSION, field(COL_BOOSTER_VERSION)?)?;

        records.push(LaunchRecord::new(
            site,
            check_payload(row, payload)?,
            check_class(row, class)?,
            booster,
        ));
    }

    Ok(LaunchDataset::from_records(records))
}

fn json_text(row: usize, column: &str, value: &JsonValue) -> DatasetResult<String> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        other => Err(invalid(row, column, other)),
    }
}

fn json_number(row: usize, column: &str, value: &JsonValue) -> DatasetResult<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64().ok_or_else(|| invalid(row, column, n)),
        JsonValue::String(s) => parse_number(row, column, s),
        other => Err(invalid(row, column, other)),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the four launch columns.
///
/// Strings may be `Utf8` or `LargeUtf8`; payload and class may be any of
/// `Int32`, `Int64`, `Float32` or `Float64`, which covers what both Pandas and
/// Polars write.  Any other column type is rejected up front with
/// [`DatasetError::ColumnType`].
fn load_parquet(path: &Path) -> DatasetResult<LaunchDataset> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    let schema = builder.schema().clone();
    let idx = ParquetColumns::locate(&schema)?;
    let reader = builder.build()?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch?;
        let site_col = batch.column(idx.site);
        let payload_col = batch.column(idx.payload);
        let class_col = batch.column(idx.class);
        let booster_col = batch.column(idx.booster);

        for i in 0..batch.num_rows() {
            let row = records.len() + 1;
            let site = arrow_text(site_col, i, row, COL_LAUNCH_SITE)?;
            let payload = arrow_number(payload_col, i, row, COL_PAYLOAD_MASS)?;
            let class = arrow_number(class_col, i, row, COL_CLASS)?;
            let booster = arrow_text(booster_col, i, row, COL_BOOSTER_VERSION)?;

            records.push(LaunchRecord::new(
                site,
                check_payload(row, payload)?,
                check_class(row, class)?,
                booster,
            ));
        }
    }

    Ok(LaunchDataset::from_records(records))
}

struct ParquetColumns {
    site: usize,
    payload: usize,
    class: usize,
    booster: usize,
}

impl ParquetColumns {
    fn locate(schema: &Schema) -> DatasetResult<Self> {
        let find = |name: &str, accepts: fn(&DataType) -> bool| {
            let idx = schema
                .index_of(name)
                .map_err(|_| DatasetError::MissingColumn {
                    column: name.to_string(),
                })?;
            let data_type = schema.field(idx).data_type();
            if accepts(data_type) {
                Ok(idx)
            } else {
                Err(column_type(name, data_type))
            }
        };
        Ok(ParquetColumns {
            site: find(COL_LAUNCH_SITE, is_text)?,
            payload: find(COL_PAYLOAD_MASS, is_number)?,
            class: find(COL_CLASS, is_number)?,
            booster: find(COL_BOOSTER_VERSION, is_text)?,
        })
    }
}

// -- Arrow helpers --

fn is_text(data_type: &DataType) -> bool {
    matches!(data_type, DataType::Utf8 | DataType::LargeUtf8)
}

fn is_number(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Float64 | DataType::Float32 | DataType::Int64 | DataType::Int32
    )
}

fn column_type(column: &str, data_type: &DataType) -> DatasetError {
    DatasetError::ColumnType {
        column: column.to_string(),
        found: data_type.to_string(),
    }
}

/// `i` indexes the batch; `row` is the dataset-wide data row for errors.
fn arrow_text(col: &ArrayRef, i: usize, row: usize, column: &str) -> DatasetResult<String> {
    if col.is_null(i) {
        return Err(invalid(row, column, "null"));
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(i).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(i).to_string()),
        other => Err(column_type(column, other)),
    }
}

fn arrow_number(col: &ArrayRef, i: usize, row: usize, column: &str) -> DatasetResult<f64> {
    if col.is_null(i) {
        return Err(invalid(row, column, "null"));
    }
    match col.data_type() {
        DataType::Float64 => Ok(col.as_primitive::<Float64Type>().value(i)),
        DataType::Float32 => Ok(col.as_primitive::<Float32Type>().value(i) as f64),
        DataType::Int64 => Ok(col.as_primitive::<Int64Type>().value(i) as f64),
        DataType::Int32 => Ok(col.as_primitive::<Int32Type>().value(i) as f64),
        other => Err(column_type(column, other)),
    }
}
