//! Row records to CSV text

use super::encoder::CsvEncoder;
use super::options::WriteOptions;
use crate::types::{CellValue, Record};
use indexmap::{IndexMap, IndexSet};
use log::debug;
use std::hash::BuildHasher;

/// Serialize rows projected onto `columns`
///
/// Each line holds one escaped field per column, in column order; a column
/// missing from a row is written as an empty field. Lines are joined with a
/// single `\n` and no trailing newline is added. With `add_header` the
/// escaped column names form the first line, so an empty `rows` still yields
/// the header.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use rowcsv::{serialize, WriteOptions};
///
/// let mut row = IndexMap::new();
/// row.insert("name".to_string(), "John, Jr.");
/// row.insert("age".to_string(), "30");
///
/// let text = serialize(&[row], &["name", "age"], &WriteOptions::default());
/// assert_eq!(text, "name,age\n\"John, Jr.\",30");
/// ```
pub fn serialize<R, C>(rows: &[R], columns: &[C], options: &WriteOptions) -> String
where
    R: Record,
    C: AsRef<str>,
{
    let encoder = encoder_for(options);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if options.add_header {
        lines.push(header_line(&encoder, columns));
    }
    lines.extend(rows.iter().map(|row| row_line(&encoder, row, columns)));

    debug!(
        "serialized {} rows x {} columns (header: {})",
        rows.len(),
        columns.len(),
        options.add_header
    );
    lines.join("\n")
}

/// Same output as [`serialize`], with data rows encoded on the rayon pool
#[cfg(feature = "parallel")]
pub fn serialize_parallel<R, C>(rows: &[R], columns: &[C], options: &WriteOptions) -> String
where
    R: Record + Sync,
    C: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    let encoder = encoder_for(options);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if options.add_header {
        lines.push(header_line(&encoder, columns));
    }
    lines.par_extend(rows.par_iter().map(|row| row_line(&encoder, row, columns)));

    debug!(
        "serialized {} rows x {} columns in parallel (header: {})",
        rows.len(),
        columns.len(),
        options.add_header
    );
    lines.join("\n")
}

/// Serialize rows using every key they carry as the column list
///
/// Columns come from [`infer_columns`].
pub fn serialize_auto<V, S>(rows: &[IndexMap<String, V, S>], options: &WriteOptions) -> String
where
    V: Clone + Into<CellValue>,
    S: BuildHasher,
{
    let columns = infer_columns(rows);
    serialize(rows, &columns, options)
}

/// Union of the keys of `rows`, in first-seen order
pub fn infer_columns<V, S>(rows: &[IndexMap<String, V, S>]) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for row in rows {
        seen.extend(row.keys().map(String::as_str));
    }
    seen.into_iter().map(str::to_string).collect()
}

fn encoder_for(options: &WriteOptions) -> CsvEncoder {
    CsvEncoder::new(options.delimiter, options.quote).quote_all(options.quote_all)
}

fn header_line<C: AsRef<str>>(encoder: &CsvEncoder, columns: &[C]) -> String {
    let names: Vec<CellValue> = columns.iter().map(|c| CellValue::from(c.as_ref())).collect();
    let mut line = String::new();
    encoder.encode_row(&names, &mut line);
    line
}

fn row_line<R: Record, C: AsRef<str>>(encoder: &CsvEncoder, row: &R, columns: &[C]) -> String {
    let fields: Vec<CellValue> = columns.iter().map(|c| row.field(c.as_ref())).collect();
    let mut line = String::new();
    encoder.encode_row(&fields, &mut line);
    line
}
