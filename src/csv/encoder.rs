//! Field escaping with RFC 4180-like behavior

use crate::types::CellValue;

/// Check if field text requires quoting
///
/// A field is quoted when it contains the delimiter, the quote character,
/// or a line break (`\n` / `\r`).
pub fn needs_quoting(field: &str, delimiter: char, quote: char) -> bool {
    field
        .chars()
        .any(|c| c == delimiter || c == quote || c == '\n' || c == '\r')
}

/// Escape a single value for the given delimiter using `"` as quote character
///
/// Null values become an empty string and are never quoted, even with `quote_all`.
///
/// # Examples
///
/// ```
/// use rowcsv::escape;
///
/// assert_eq!(escape("plain", ',', false), "plain");
/// assert_eq!(escape("John, Jr.", ',', false), "\"John, Jr.\"");
/// assert_eq!(escape(r#"Say "Hi""#, ',', false), r#""Say ""Hi""""#);
/// assert_eq!(escape(None::<&str>, ',', true), "");
/// ```
pub fn escape<V: Into<CellValue>>(value: V, delimiter: char, quote_all: bool) -> String {
    CsvEncoder::new(delimiter, '"')
        .quote_all(quote_all)
        .escape_field(&value.into())
}

/// Reverse [`escape`]: strip the surrounding quotes, if any, and undouble inner quotes
///
/// Text that is not wrapped in quotes is returned unchanged.
pub fn unescape(field: &str, quote: char) -> String {
    let q = quote.len_utf8();
    if field.len() >= 2 * q && field.starts_with(quote) && field.ends_with(quote) {
        let inner = &field[q..field.len() - q];
        let mut doubled = String::with_capacity(2 * q);
        doubled.push(quote);
        doubled.push(quote);
        inner.replace(&doubled, &quote.to_string())
    } else {
        field.to_string()
    }
}

/// CSV encoder for writing properly quoted fields and rows
#[derive(Debug, Clone, Copy)]
pub struct CsvEncoder {
    delimiter: char,
    quote_char: char,
    quote_all: bool,
}

impl CsvEncoder {
    /// Create a new CSV encoder with custom delimiter and quote character
    pub fn new(delimiter: char, quote_char: char) -> Self {
        Self {
            delimiter,
            quote_char,
            quote_all: false,
        }
    }

    /// Quote every non-null field (builder pattern)
    pub fn quote_all(mut self, quote_all: bool) -> Self {
        self.quote_all = quote_all;
        self
    }

    /// Encode entire row into buffer, fields separated by the delimiter
    pub fn encode_row<'a, I>(&self, fields: I, buffer: &mut String)
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                buffer.push(self.delimiter);
            }
            self.encode_value(field, buffer);
        }
    }

    /// Escape a single value into a fresh string
    pub fn escape_field(&self, value: &CellValue) -> String {
        let mut buffer = String::new();
        self.encode_value(value, &mut buffer);
        buffer
    }

    /// Encode a single value into buffer
    pub fn encode_value(&self, value: &CellValue, buffer: &mut String) {
        match value {
            CellValue::Empty => {}
            CellValue::String(s) => self.encode_field(s, buffer),
            other => self.encode_field(&other.as_string(), buffer),
        }
    }

    /// Encode single field text with proper quoting/escaping
    pub fn encode_field(&self, field: &str, buffer: &mut String) {
        if self.quote_all || needs_quoting(field, self.delimiter, self.quote_char) {
            buffer.push(self.quote_char);
            for ch in field.chars() {
                if ch == self.quote_char {
                    // Escape quotes by doubling: " -> ""
                    buffer.push(self.quote_char);
                }
                buffer.push(ch);
            }
            buffer.push(self.quote_char);
        } else {
            buffer.push_str(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<CellValue> {
        fields.iter().map(|f| CellValue::from(*f)).collect()
    }

    #[test]
    fn test_simple_fields() {
        let encoder = CsvEncoder::new(',', '"');
        let mut buffer = String::new();
        encoder.encode_row(&row(&["a", "b", "c"]), &mut buffer);
        assert_eq!(buffer, "a,b,c");
    }

    #[test]
    fn test_quoted_fields() {
        let encoder = CsvEncoder::new(',', '"');
        let mut buffer = String::new();
        encoder.encode_row(&row(&["a,b", "c"]), &mut buffer);
        assert_eq!(buffer, r#""a,b",c"#);
    }

    #[test]
    fn test_escaped_quotes() {
        let encoder = CsvEncoder::new(',', '"');
        let mut buffer = String::new();
        encoder.encode_row(&row(&[r#"Say "Hello""#, "world"]), &mut buffer);
        assert_eq!(buffer, r#""Say ""Hello""",world"#);
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(escape("Line 1\nLine 2", ',', false), "\"Line 1\nLine 2\"");
        assert_eq!(escape("a\rb", ',', false), "\"a\rb\"");
    }

    #[test]
    fn test_null_never_quoted() {
        let encoder = CsvEncoder::new(',', '"').quote_all(true);
        let mut buffer = String::new();
        encoder.encode_row(&[CellValue::Empty, CellValue::from(""), CellValue::Int(7)], &mut buffer);
        assert_eq!(buffer, r#","","7""#);
    }

    #[test]
    fn test_custom_delimiter() {
        let encoder = CsvEncoder::new(';', '"');
        let mut buffer = String::new();
        encoder.encode_row(&row(&["a", "b;c", "d,e"]), &mut buffer);
        assert_eq!(buffer, r#"a;"b;c";d,e"#);
    }

    #[test]
    fn test_custom_quote() {
        let encoder = CsvEncoder::new(',', '\'');
        assert_eq!(encoder.escape_field(&CellValue::from("it's")), "'it''s'");
        assert_eq!(encoder.escape_field(&CellValue::from("say \"x\"")), "say \"x\"");
    }

    #[test]
    fn test_quoting_necessity() {
        for (text, quoted) in [
            ("plain", false),
            ("with space", false),
            ("a,b", true),
            ("a\"b", true),
            ("a\nb", true),
            ("a\rb", true),
        ] {
            let out = escape(text, ',', false);
            assert_eq!(out.starts_with('"'), quoted, "{text:?}");
            assert_eq!(needs_quoting(text, ',', '"'), quoted);
        }
        assert_eq!(escape("plain", ',', true), "\"plain\"");
    }

    #[test]
    fn test_unescape_recovers_text() {
        for text in ["", "plain", "a,b", "\"", "x \"\" y", "multi\r\nline", "\"edge\""] {
            assert_eq!(unescape(&escape(text, ',', false), '"'), text);
            assert_eq!(unescape(&escape(text, ',', true), '"'), text);
        }
    }

    #[test]
    fn test_typed_values() {
        assert_eq!(escape(30_i64, ',', false), "30");
        assert_eq!(escape(1.5, ',', false), "1.5");
        assert_eq!(escape(true, '|', true), "\"true\"");
    }
}
