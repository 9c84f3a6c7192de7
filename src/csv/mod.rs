//! CSV utilities for escaping, serializing and parsing

mod encoder;
mod options;
mod parser;
mod serializer;

pub use encoder::{escape, needs_quoting, unescape, CsvEncoder};
pub use options::{ParseOptions, WriteOptions};
pub use parser::{parse, parse_document, CsvParser, Document};
#[cfg(feature = "parallel")]
pub use serializer::serialize_parallel;
pub use serializer::{infer_columns, serialize, serialize_auto};

// Re-export CompressionMethod from s-zip for convenience
pub use s_zip::CompressionMethod;
