//! CSV parsing with RFC 4180-like behavior
//!
//! The tokenizer is a two-state machine (`Unquoted` / `Quoted`) over the
//! characters of an in-memory document. Quoted fields may span lines and use
//! doubled quotes for a literal quote. A quote that is never closed swallows
//! the rest of the document into one field instead of failing.

use super::options::ParseOptions;
use crate::types::{Row, Table};
use log::{debug, warn};

/// Header names plus the rows keyed by them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Field texts of the first record, in order
    pub headers: Vec<String>,
    /// Data rows, in line order
    pub rows: Table,
}

/// Parse CSV text into rows keyed by the header line
///
/// Never fails: empty input and header-only documents yield an empty table,
/// and malformed quoting degrades as described in the module docs.
///
/// # Examples
///
/// ```
/// use rowcsv::{parse, ParseOptions};
///
/// let rows = parse("name,age\nJohn,30\nJane,25", &ParseOptions::default());
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0]["name"], "John");
/// assert_eq!(rows[1]["age"], "25");
/// ```
pub fn parse(text: &str, options: &ParseOptions) -> Table {
    CsvParser::from_options(options).parse(text)
}

/// Parse CSV text, keeping the header names alongside the rows
pub fn parse_document(text: &str, options: &ParseOptions) -> Document {
    CsvParser::from_options(options).parse_document(text)
}

/// CSV parser for reading whole documents
#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    delimiter: char,
    quote_char: char,
    trim_values: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::from_options(&ParseOptions::default())
    }
}

impl CsvParser {
    /// Create a new CSV parser with custom delimiter and quote character
    ///
    /// Values are trimmed; use [`CsvParser::trim_values`] to keep whitespace.
    pub fn new(delimiter: char, quote_char: char) -> Self {
        Self {
            delimiter,
            quote_char,
            trim_values: true,
        }
    }

    /// Create a parser for the dialect described by `options`
    pub fn from_options(options: &ParseOptions) -> Self {
        Self::new(options.delimiter, options.quote).trim_values(options.trim_values)
    }

    /// Enable or disable whitespace trimming (builder pattern)
    pub fn trim_values(mut self, trim: bool) -> Self {
        self.trim_values = trim;
        self
    }

    /// Tokenize text into raw records
    ///
    /// The first record is always kept; later records whose fields are all
    /// empty or whitespace are dropped.
    pub fn records(&self, text: &str) -> Vec<Vec<String>> {
        let mut tokenizer = Tokenizer::new(self.trim_values);
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match tokenizer.state {
                State::Quoted if ch == self.quote_char => {
                    // Check for escaped quote ("")
                    if chars.peek() == Some(&self.quote_char) {
                        tokenizer.field.push(ch);
                        chars.next();
                    } else {
                        tokenizer.state = State::Unquoted;
                    }
                }
                State::Quoted => tokenizer.field.push(ch),
                State::Unquoted if ch == self.quote_char => tokenizer.state = State::Quoted,
                State::Unquoted if ch == self.delimiter => tokenizer.close_field(),
                State::Unquoted if ch == '\n' => tokenizer.close_row(),
                State::Unquoted if ch == '\r' && chars.peek() == Some(&'\n') => {
                    chars.next();
                    tokenizer.close_row();
                }
                State::Unquoted => tokenizer.field.push(ch),
            }
        }

        tokenizer.finish()
    }

    /// Parse text into rows keyed by the header line
    pub fn parse(&self, text: &str) -> Table {
        self.parse_document(text).rows
    }

    /// Parse text, returning the header names together with the rows
    pub fn parse_document(&self, text: &str) -> Document {
        let mut records = self.records(text).into_iter();
        let Some(headers) = records.next() else {
            return Document::default();
        };

        let rows: Table = records.map(|record| assemble_row(&headers, record)).collect();
        debug!(
            "parsed {} data rows against {} header columns",
            rows.len(),
            headers.len()
        );
        Document { headers, rows }
    }
}

/// Pair header name `i` with field `i`
///
/// Short records are padded with empty strings and surplus fields are
/// ignored. A repeated header name keeps the last value assigned to it.
fn assemble_row(headers: &[String], record: Vec<String>) -> Row {
    let mut fields = record.into_iter();
    let mut row = Row::with_capacity(headers.len());
    for name in headers {
        row.insert(name.clone(), fields.next().unwrap_or_default());
    }
    row
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

/// Cursor state owned by a single tokenizing pass
#[derive(Debug)]
struct Tokenizer {
    state: State,
    field: String,
    row: Vec<String>,
    rows: Vec<Vec<String>>,
    trim: bool,
}

impl Tokenizer {
    fn new(trim: bool) -> Self {
        Self {
            state: State::Unquoted,
            field: String::new(),
            row: Vec::new(),
            rows: Vec::new(),
            trim,
        }
    }

    fn close_field(&mut self) {
        let field = std::mem::take(&mut self.field);
        let field = if self.trim {
            field.trim().to_string()
        } else {
            field
        };
        self.row.push(field);
    }

    fn close_row(&mut self) {
        self.close_field();
        let row = std::mem::take(&mut self.row);
        let blank = row.iter().all(|f| f.trim().is_empty());
        if self.rows.is_empty() || !blank {
            self.rows.push(row);
        }
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        if self.state == State::Quoted {
            warn!(
                "unterminated quoted field at end of input ({} chars absorbed)",
                self.field.chars().count()
            );
        }
        if !self.field.is_empty() || !self.row.is_empty() {
            self.close_row();
        }
        self.rows
    }
}
