//! Import-path integration tests: document text in, table out.

use csv_table::{Diagnostic, Dialect, Record, TableParser, Value, OVERFLOW_KEY};

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::from(*v)))
        .collect()
}

#[test]
fn test_empty_text_parses_to_empty_table() {
    let table = csv_table::parse("");
    assert!(table.columns.is_empty());
    assert!(table.records.is_empty());
}

#[test]
fn test_header_only_document_has_columns_and_no_records() {
    let table = csv_table::parse("one,two,three");
    assert_eq!(table.columns, ["one", "two", "three"]);
    assert!(table.records.is_empty());
}

#[test]
fn test_document_with_rows_and_an_empty_field() {
    let expected_records = [
        record(&[("one", "a"), ("two", "b"), ("three", "c")]),
        record(&[("one", "d"), ("two", ""), ("three", "f")]),
    ];

    let table = csv_table::parse("one,two,three\na,b,c\nd,,f");
    assert_eq!(table.columns, ["one", "two", "three"]);
    assert_eq!(table.records, expected_records);

    // Windows line endings parse to the identical table.
    let windows = csv_table::parse("one,two,three\r\na,b,c\r\nd,,f");
    assert_eq!(windows, table);
}

#[test]
fn test_quoted_delimiters_survive_as_single_fields() {
    let table = csv_table::parse("one,\"two, two and a half\",three\na,\"b,b.5\",c");
    assert_eq!(table.columns, ["one", "two, two and a half", "three"]);
    assert_eq!(table.records[0]["two, two and a half"], Value::from("b,b.5"));
}

#[test]
fn test_malformed_line_degrades_without_aborting_the_document() {
    let text = "one,two\nok1,ok2\nbad,\"unclosed,rest\nok3,ok4";
    let parser = TableParser::new(Dialect::default());
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let table = parser.parse_with_sink(text, &mut diagnostics);

    // Exactly one diagnostic, carrying the offending raw line.
    assert_eq!(
        diagnostics,
        [Diagnostic::UnterminatedQuote {
            line: "bad,\"unclosed,rest".to_string(),
        }]
    );

    // The malformed row keeps the raw remainder as one field; the rows
    // around it parse normally.
    assert_eq!(
        table.records,
        [
            record(&[("one", "ok1"), ("two", "ok2")]),
            record(&[("one", "bad"), ("two", "\"unclosed,rest")]),
            record(&[("one", "ok3"), ("two", "ok4")]),
        ]
    );
}

#[test]
fn test_row_wider_than_header_collapses_extras() {
    let table = csv_table::parse("one,two\na,b,extra1,extra2");
    let row = &table.records[0];
    assert_eq!(row["one"], Value::from("a"));
    assert_eq!(row["two"], Value::from("b"));
    assert_eq!(row[OVERFLOW_KEY], Value::from("extra2"));
    assert_eq!(row.len(), 3);
}

#[test]
fn test_row_narrower_than_header_leaves_columns_absent() {
    let table = csv_table::parse("one,two,three\na");
    let row = &table.records[0];
    assert_eq!(row.len(), 1);
    assert!(row.get("two").is_none());
    assert!(row.get("three").is_none());
}

#[test]
fn test_blank_lines_are_not_empty_records() {
    let table = csv_table::parse("one,two\n\na,b\n\n\nc,d\n");
    assert_eq!(table.records.len(), 2);
}
