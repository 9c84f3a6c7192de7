//! Dialect configuration for parsing and serializing

/// Options controlling [`parse`](crate::csv::parse)
///
/// # Examples
///
/// ```
/// use rowcsv::ParseOptions;
///
/// let options = ParseOptions::default().delimiter(';').trim_values(false);
/// assert_eq!(options.delimiter, ';');
/// assert!(!options.trim_values);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ParseOptions {
    /// Field separator (default `,`)
    pub delimiter: char,
    /// Quote character (default `"`)
    pub quote: char,
    /// Trim leading/trailing whitespace from every field, quoted or not (default `true`)
    pub trim_values: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            delimiter: ',',
            quote: '"',
            trim_values: true,
        }
    }
}

impl ParseOptions {
    /// Create options with the default dialect
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set custom quote character (builder pattern)
    pub fn quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Enable or disable whitespace trimming (builder pattern)
    pub fn trim_values(mut self, trim: bool) -> Self {
        self.trim_values = trim;
        self
    }
}

/// Options controlling [`serialize`](crate::csv::serialize)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WriteOptions {
    /// Field separator (default `,`)
    pub delimiter: char,
    /// Quote character (default `"`)
    pub quote: char,
    /// Emit the column list as the first line (default `true`)
    pub add_header: bool,
    /// Quote every non-null field (default `false`)
    pub quote_all: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            delimiter: ',',
            quote: '"',
            add_header: true,
            quote_all: false,
        }
    }
}

impl WriteOptions {
    /// Create options with the default dialect
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set custom quote character (builder pattern)
    pub fn quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Emit or skip the header line (builder pattern)
    pub fn add_header(mut self, add: bool) -> Self {
        self.add_header = add;
        self
    }

    /// Quote every field regardless of content (builder pattern)
    pub fn quote_all(mut self, quote_all: bool) -> Self {
        self.quote_all = quote_all;
        self
    }
}
