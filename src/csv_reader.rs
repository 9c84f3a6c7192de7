//! CSV file reading with decompression support

use crate::csv::{CsvParser, Document, ParseOptions};
use crate::error::{CsvError, Result};
use crate::types::Table;
use log::debug;
use s_zip::StreamingZipReader;
use std::fs;
use std::path::{Path, PathBuf};

/// CSV file reader that loads a whole document and parses it into rows
///
/// Automatically handles compressed files (.csv.zst, .csv.gz, .csv.zip).
/// The document is decoded as UTF-8; invalid sequences are replaced.
///
/// # Examples
///
/// ```no_run
/// use rowcsv::csv_reader::CsvReader;
///
/// let reader = CsvReader::open("data.csv").unwrap().delimiter(';');
///
/// for row in reader.read_table().unwrap() {
///     println!("{:?}", row.get("name"));
/// }
/// ```
pub struct CsvReader {
    path: PathBuf,
    compressed: bool,

    // Configuration
    options: ParseOptions,
}

impl CsvReader {
    /// Open CSV file - auto-detects compression from file extension
    ///
    /// # File Extensions
    /// - `.csv` → Uncompressed, direct read
    /// - `.csv.zst`, `.csv.zip` → Zstd decompression
    /// - `.csv.gz` → Deflate/Gzip decompression
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_str().unwrap_or("");

        if !path_ref.is_file() {
            return Err(CsvError::ReadError(format!(
                "Failed to open CSV file: {} not found",
                path_ref.display()
            )));
        }

        Ok(CsvReader {
            path: path_ref.to_path_buf(),
            compressed: path_str.ends_with(".csv.zst")
                || path_str.ends_with(".csv.zip")
                || path_str.ends_with(".csv.gz"),
            options: ParseOptions::default(),
        })
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delim: char) -> Self {
        self.options.delimiter = delim;
        self
    }

    /// Set custom quote character (builder pattern)
    pub fn quote_char(mut self, quote: char) -> Self {
        self.options.quote = quote;
        self
    }

    /// Enable or disable whitespace trimming (builder pattern)
    pub fn trim_values(mut self, trim: bool) -> Self {
        self.options.trim_values = trim;
        self
    }

    /// Replace all parse options at once (builder pattern)
    pub fn options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Read the raw document text
    pub fn read_text(&self) -> Result<String> {
        let bytes = if self.compressed {
            self.read_compressed()?
        } else {
            fs::read(&self.path)
                .map_err(|e| CsvError::ReadError(format!("Failed to read CSV file: {}", e)))?
        };

        debug!("read {} bytes from {}", bytes.len(), self.path.display());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read and parse the document into rows keyed by its header
    pub fn read_table(&self) -> Result<Table> {
        Ok(self.read_document()?.rows)
    }

    /// Read and parse the document, keeping the header names
    pub fn read_document(&self) -> Result<Document> {
        let text = self.read_text()?;
        Ok(CsvParser::from_options(&self.options).parse_document(&text))
    }

    fn read_compressed(&self) -> Result<Vec<u8>> {
        let mut zip = StreamingZipReader::open(&self.path)
            .map_err(|e| CsvError::ReadError(format!("Failed to open ZIP: {}", e)))?;

        // Find first .csv entry
        let entry_name = zip
            .entries()
            .iter()
            .find(|e| e.name.ends_with(".csv"))
            .or_else(|| zip.entries().first())
            .ok_or_else(|| CsvError::ReadError("No CSV entry found in archive".to_string()))?
            .name
            .clone();

        zip.read_entry_by_name(&entry_name)
            .map_err(|e| CsvError::ReadError(format!("Failed to read ZIP entry: {}", e)))
    }
}
