//! Property tests for whole-document round trips.

use csv_table::{Diagnostic, Dialect, Record, TableParser, Value, OVERFLOW_KEY};
use proptest::prelude::*;

/// Strategy for a small set of distinct, plain column names.
fn column_set_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z][a-z0-9_]{0,7}", 1..5)
        .prop_map(|set| set.into_iter().collect())
}

/// Strategy for distinct column names that need escaping on the wire.
fn escaped_column_set_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(
        prop_oneof![
            "[a-z]{1,6}",
            "[a-z]{1,3},[a-z]{1,3}",
            "[a-z]{1,3}\"[a-z]{1,3}",
        ],
        1..5,
    )
    .prop_map(|set| set.into_iter().collect())
}

/// Strategy for cell values that survive the line-level trim: no line
/// breaks and no leading or trailing whitespace. Internal delimiters and
/// quotes are fair game, the codec has to earn them.
fn cell_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9]{0,12}",
        "[a-zA-Z0-9]{1,4},[a-zA-Z0-9]{1,4}",
        "[a-zA-Z0-9]{1,4}\"[a-zA-Z0-9]{1,4}",
        Just(String::new()),
        Just("a,\"b".to_string()),
        Just("héllo wörld".to_string()),
    ]
}

/// Strategy for a column list plus uniform rows of cell values.
fn table_strategy() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    column_set_strategy().prop_flat_map(|columns| {
        let width = columns.len();
        let rows = prop::collection::vec(
            prop::collection::vec(cell_value_strategy(), width..=width),
            1..6,
        );
        (Just(columns), rows)
    })
}

fn build_records(columns: &[String], rows: &[Vec<String>]) -> Vec<Record> {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .cloned()
                .zip(row.iter().map(|value| Value::from(value.as_str())))
                .collect()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn serialize_then_parse_preserves_uniform_tables(
        (columns, rows) in table_strategy()
    ) {
        let records = build_records(&columns, &rows);

        let text = csv_table::serialize(&records).expect("records are non-empty");
        let table = csv_table::parse(&text);

        prop_assert_eq!(
            table.columns,
            columns,
            "columns should round-trip in order"
        );
        prop_assert_eq!(
            table.records,
            records,
            "records should round-trip with every key present"
        );
    }

    #[test]
    fn header_only_documents_round_trip(columns in escaped_column_set_strategy()) {
        let text = csv_table::serialize_empty(&columns);
        let table = csv_table::parse(&text);

        prop_assert_eq!(table.columns, columns);
        prop_assert!(table.records.is_empty());
    }

    #[test]
    fn parse_is_total_and_keys_stay_known(text in any::<String>()) {
        let parser = TableParser::new(Dialect::default());
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let table = parser.parse_with_sink(&text, &mut diagnostics);

        // Every record key is either a parsed column name or the
        // overflow key; nothing else can be invented.
        for record in &table.records {
            for key in record.keys() {
                prop_assert!(
                    key == OVERFLOW_KEY || table.columns.iter().any(|column| column == key),
                    "unexpected record key {:?}",
                    key
                );
            }
        }
    }

    #[test]
    fn parse_record_count_never_exceeds_body_lines(text in "[a-z,\"\n]{0,64}") {
        let table = csv_table::parse(&text);
        let body_lines = text.split('\n').count().saturating_sub(1);
        prop_assert!(table.records.len() <= body_lines);
    }
}
