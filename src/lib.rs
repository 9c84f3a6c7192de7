//! # rowcsv
//!
//! Quote-aware CSV tokenizer and serializer for header-keyed row records.
//!
//! - [`parse`] turns CSV text into rows keyed by the header line. Quoted fields
//!   may contain delimiters, doubled quotes and line breaks; blank lines are
//!   skipped and malformed quoting degrades instead of failing.
//! - [`serialize`] projects rows onto a column list and produces text that
//!   [`parse`] reads back field for field.
//! - [`escape`] is the shared quoting rule.
//!
//! The engine works on in-memory text only and never fails. [`CsvReader`] and
//! [`CsvWriter`] move documents between that text and (optionally compressed) files.
//!
//! ```
//! use rowcsv::{parse, serialize, ParseOptions, WriteOptions};
//!
//! let rows = parse("name,age\nJohn,30\nJane,25", &ParseOptions::default());
//! let text = serialize(&rows, &["age", "name"], &WriteOptions::default());
//! assert_eq!(text, "age,name\n30,John\n25,Jane");
//! ```

pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod types;

pub use csv::{
    escape, infer_columns, parse, parse_document, serialize, serialize_auto, unescape,
    CompressionMethod, Document, ParseOptions, WriteOptions,
};
pub use csv_reader::CsvReader;
pub use csv_writer::CsvWriter;
pub use error::{CsvError, Result};
pub use types::{CellValue, Record, Row, Table};
