//! CSV file writing with compression support

use crate::csv::{serialize, CompressionMethod, WriteOptions};
use crate::error::{CsvError, Result};
use crate::types::Record;
use log::info;
use s_zip::StreamingZipWriter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// CSV file writer that serializes row records to disk or a compressed archive
///
/// Each call to [`CsvWriter::write_table`] appends its rows on new lines. The
/// header is written by the first call only, and the file carries no trailing
/// newline, exactly as [`serialize`] returns it.
///
/// # Examples
///
/// ```no_run
/// use indexmap::IndexMap;
/// use rowcsv::csv_writer::CsvWriter;
///
/// let mut row = IndexMap::new();
/// row.insert("Name".to_string(), "Alice");
/// row.insert("City".to_string(), "NYC");
///
/// let mut writer = CsvWriter::new("output.csv").unwrap();
/// writer.write_table(&[row], &["Name", "City"]).unwrap();
/// writer.save().unwrap();
/// ```
///
/// # Compression
///
/// Auto-detects compression from file extension:
/// - `.csv` → Uncompressed
/// - `.csv.zst` or `.csv.zip` → Zstd compression (level 3)
/// - `.csv.gz` → Deflate/Gzip compression (level 6)
pub struct CsvWriter {
    // Dual-mode output
    zip_writer: Option<StreamingZipWriter<File>>,
    direct_writer: Option<BufWriter<File>>,
    path: PathBuf,

    // State
    row_count: u64,
    header_written: bool,
    has_content: bool,

    // Configuration
    options: WriteOptions,
}

impl CsvWriter {
    /// Create a new CSV writer - auto-detects compression from file extension
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_str().unwrap_or("");

        if path_str.ends_with(".csv.zst") || path_str.ends_with(".csv.zip") {
            Self::with_compression(path_ref, CompressionMethod::Zstd, 3)
        } else if path_str.ends_with(".csv.gz") {
            Self::with_compression(path_ref, CompressionMethod::Deflate, 6)
        } else {
            let file = File::create(path_ref)
                .map_err(|e| CsvError::WriteError(format!("Failed to create CSV file: {}", e)))?;

            Ok(CsvWriter {
                zip_writer: None,
                direct_writer: Some(BufWriter::new(file)),
                path: path_ref.to_path_buf(),
                row_count: 0,
                header_written: false,
                has_content: false,
                options: WriteOptions::default(),
            })
        }
    }

    /// Create a writer with explicit compression method and level
    ///
    /// # Arguments
    /// * `path` - Output file path
    /// * `method` - Compression method (Zstd or Deflate)
    /// * `level` - Compression level:
    ///   - Zstd: 1-21 (recommend 3 for balanced)
    ///   - Deflate: 0-9 (recommend 6 for balanced)
    pub fn with_compression<P: AsRef<Path>>(
        path: P,
        method: CompressionMethod,
        level: u32,
    ) -> Result<Self> {
        let path_ref = path.as_ref();

        let mut zip = StreamingZipWriter::with_method(path_ref, method, level)
            .map_err(|e| CsvError::WriteError(format!("Failed to create ZIP writer: {}", e)))?;

        let entry_name = entry_name_for(path_ref);
        zip.start_entry(&entry_name)
            .map_err(|e| CsvError::WriteError(format!("Failed to start ZIP entry: {}", e)))?;

        Ok(CsvWriter {
            zip_writer: Some(zip),
            direct_writer: None,
            path: path_ref.to_path_buf(),
            row_count: 0,
            header_written: false,
            has_content: false,
            options: WriteOptions::default(),
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

    /// Emit or skip the header line (builder pattern)
    pub fn add_header(mut self, add: bool) -> Self {
        self.options.add_header = add;
        self
    }

    /// Quote every non-null field (builder pattern)
    pub fn quote_all(mut self, quote_all: bool) -> Self {
        self.options.quote_all = quote_all;
        self
    }

    /// Replace all write options at once (builder pattern)
    pub fn options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Serialize `rows` projected onto `columns` and append them to the output
    ///
    /// Later calls continue on a new line and never repeat the header.
    pub fn write_table<R, C>(&mut self, rows: &[R], columns: &[C]) -> Result<()>
    where
        R: Record,
        C: AsRef<str>,
    {
        let mut options = self.options;
        options.add_header = options.add_header && !self.header_written;

        let text = serialize(rows, columns, &options);
        if !text.is_empty() {
            if self.has_content {
                self.write_text("\n")?;
            }
            self.write_text(&text)?;
            self.has_content = true;
        }

        self.header_written |= options.add_header;
        self.row_count += rows.len() as u64;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        if let Some(ref mut zip) = self.zip_writer {
            zip.write_data(text.as_bytes())
                .map_err(|e| CsvError::WriteError(format!("Failed to write to ZIP: {}", e)))?;
        } else if let Some(ref mut writer) = self.direct_writer {
            writer
                .write_all(text.as_bytes())
                .map_err(|e| CsvError::WriteError(format!("Failed to write to file: {}", e)))?;
        }
        Ok(())
    }

    /// Get the number of data rows written
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Finalize and save the CSV file
    ///
    /// This must be called to properly close the file.
    /// Consumes the writer.
    pub fn save(mut self) -> Result<()> {
        if let Some(zip) = self.zip_writer.take() {
            zip.finish()
                .map_err(|e| CsvError::WriteError(format!("Failed to finish ZIP: {}", e)))?;
        } else if let Some(mut writer) = self.direct_writer.take() {
            writer
                .flush()
                .map_err(|e| CsvError::WriteError(format!("Failed to flush file: {}", e)))?;
        }
        info!("saved {} rows to {}", self.row_count, self.path.display());
        Ok(())
    }
}

/// Archive entry name: file stem without compression suffixes, or `data.csv`
fn entry_name_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| {
            let clean = s
                .trim_end_matches(".csv")
                .trim_end_matches(".zst")
                .trim_end_matches(".gz");
            format!("{}.csv", clean)
        })
        .unwrap_or_else(|| "data.csv".to_string())
}
