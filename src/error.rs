//! Error types for the file boundary
//!
//! The CSV engine itself (`escape`, `serialize`, `parse`) never fails. Only reading
//! and writing files can, and those paths report through [`CsvError`].

use thiserror::Error;

/// Errors raised while moving CSV text to or from storage
#[derive(Error, Debug)]
pub enum CsvError {
    /// Failed to open, decompress or read a source document
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to create, compress or flush an output document
    #[error("Write error: {0}")]
    WriteError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used by the reader and writer
pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CsvError::ReadError("No CSV entry found in archive".to_string());
        assert_eq!(err.to_string(), "Read error: No CSV entry found in archive");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CsvError = io.into();
        assert!(matches!(err, CsvError::Io(_)));
    }
}
