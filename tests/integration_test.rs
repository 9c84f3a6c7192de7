//! Integration tests for rowcsv

use indexmap::IndexMap;
use rowcsv::types::CellValue;
use rowcsv::{
    escape, parse, parse_document, serialize, unescape, CsvReader, CsvWriter, ParseOptions,
    Row, Table, WriteOptions,
};
use tempfile::NamedTempFile;

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn sample() -> Table {
    vec![
        row(&[("id", "1"), ("name", "Alice"), ("city", "NYC")]),
        row(&[("id", "2"), ("name", "Bob"), ("city", "San Francisco")]),
        row(&[("id", "3"), ("name", "Chloé"), ("city", "")]),
    ]
}

#[test]
fn test_round_trip_plain_values() {
    let columns = ["id", "name", "city"];
    let text = serialize(&sample(), &columns, &WriteOptions::default());
    assert_eq!(parse(&text, &ParseOptions::default()), sample());
}

#[test]
fn test_round_trip_projection() {
    let columns = ["name", "id"];
    let text = serialize(&sample(), &columns, &WriteOptions::default());
    let parsed = parse(&text, &ParseOptions::default());

    let expected: Table = sample()
        .into_iter()
        .map(|r| row(&[("name", r["name"].as_str()), ("id", r["id"].as_str())]))
        .collect();
    assert_eq!(parsed, expected);
}

#[test]
fn test_round_trip_special_characters() {
    let rows = vec![
        row(&[("text", "comma, inside"), ("n", "1")]),
        row(&[("text", "quote \"here\""), ("n", "2")]),
        row(&[("text", "multi\nline\r\nvalue"), ("n", "3")]),
        row(&[("text", "  padded  "), ("n", "4")]),
        row(&[("text", "\""), ("n", "5")]),
    ];
    let columns = ["text", "n"];
    let options = ParseOptions::new().trim_values(false);

    for write in [WriteOptions::default(), WriteOptions::new().quote_all(true)] {
        let text = serialize(&rows, &columns, &write);
        assert_eq!(parse(&text, &options), rows);
    }

    let semi = WriteOptions::new().delimiter(';');
    let text = serialize(&rows, &columns, &semi);
    assert_eq!(parse(&text, &options.delimiter(';')), rows);
}

#[test]
fn test_serialize_parse_serialize_is_stable() {
    let text = "name,age\nJohn,30\nJane,25";
    let rows = parse(text, &ParseOptions::default());
    let doc = parse_document(text, &ParseOptions::default());
    assert_eq!(serialize(&rows, &doc.headers, &WriteOptions::default()), text);
}

#[test]
fn test_escape_unescape_property() {
    let values = ["", "x", "a,b", "tab\tsep", "\"\"", "end\r", "é,ü"];
    for value in values {
        for quote_all in [false, true] {
            let escaped = escape(value, ',', quote_all);
            let quoted = escaped.starts_with('"') && escaped.ends_with('"') && escaped.len() >= 2;
            let must_quote = quote_all
                || value.contains(',')
                || value.contains('"')
                || value.contains('\n')
                || value.contains('\r');
            assert_eq!(quoted, must_quote, "{value:?}");
            assert_eq!(unescape(&escaped, '"'), value);
        }
    }
}

#[test]
fn test_typed_rows_parse_back_as_text() {
    let mut typed: IndexMap<String, CellValue> = IndexMap::new();
    typed.insert("id".to_string(), CellValue::Int(42));
    typed.insert("score".to_string(), CellValue::Float(9.5));
    typed.insert("active".to_string(), CellValue::Bool(true));
    typed.insert("note".to_string(), CellValue::Empty);

    let columns = ["id", "score", "active", "note"];
    let text = serialize(&[typed], &columns, &WriteOptions::default());
    assert_eq!(text, "id,score,active,note\n42,9.5,true,");

    let parsed = parse(&text, &ParseOptions::default());
    assert_eq!(
        parsed,
        vec![row(&[("id", "42"), ("score", "9.5"), ("active", "true"), ("note", "")])]
    );
}

#[test]
fn test_file_round_trip() {
    let temp = NamedTempFile::new().unwrap();
    let path = temp.path().to_path_buf();

    {
        let mut writer = CsvWriter::new(&path).unwrap().delimiter('|');
        writer
            .write_table(&sample(), &["id", "name", "city"])
            .unwrap();
        writer.save().unwrap();
    }

    let rows = CsvReader::open(&path)
        .unwrap()
        .delimiter('|')
        .read_table()
        .unwrap();
    assert_eq!(rows, sample());
}

#[test]
fn test_compressed_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv.zst");

    {
        let mut writer = CsvWriter::new(&path).unwrap();
        writer
            .write_table(&sample(), &["id", "name", "city"])
            .unwrap();
        writer.save().unwrap();
    }

    let doc = CsvReader::open(&path).unwrap().read_document().unwrap();
    assert_eq!(doc.headers, vec!["id", "name", "city"]);
    assert_eq!(doc.rows, sample());
}

#[test]
fn test_gzip_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv.gz");

    {
        let mut writer = CsvWriter::new(&path).unwrap().quote_all(true);
        writer
            .write_table(&sample(), &["id", "name", "city"])
            .unwrap();
        writer.save().unwrap();
    }

    let rows = CsvReader::open(&path).unwrap().read_table().unwrap();
    assert_eq!(rows, sample());
}
