//! The same logical table rendered by different shells parses identically.

mod common;

use dbox_core::{Dialect, Error};
use dbox_parser::{BoxTableParser, DelimiterSplitParser, TableParser};

fn sample() -> (Vec<String>, Vec<Vec<String>>) {
    let header = common::owned(&[&["id", "date", "type", "amount"]]).remove(0);
    let rows = common::owned(&[
        &["1", "2010-09-01", "factory", "146035.00"],
        &["2", "2010-09-02", "retail", "87.5"],
        &["3", "2010-09-03", "", "0"],
    ]);
    (header, rows)
}

#[test]
fn test_all_dialects_yield_same_matrix() {
    let (header, rows) = sample();
    let parser = BoxTableParser::new();

    let cases = [
        (common::postgres(&header, &rows), Dialect::Postgres),
        (common::postgres_unicode(&header, &rows), Dialect::PostgresUnicode),
        (common::mysql(&header, &rows), Dialect::Mysql),
    ];

    for (text, dialect) in cases {
        let table = parser.parse(&text).unwrap();
        assert_eq!(table.dialect(), Some(dialect), "input:\n{text}");
        assert_eq!(table.header(), &header[..]);
        assert_eq!(table.matrix().data(), &rows[..]);
        assert!(table.matrix().is_rectangular());
    }
}

#[test]
fn test_psql_fixture() {
    let text = concat!(
        " id |    date    |   type    |  amount   \n",
        "----+------------+-----------+-----------\n",
        "  1 | 2010-09-01 | factory   |  146035.00\n",
        "  2 | 2010-09-02 | retail    |       87.5\n",
        "(2 rows)\n",
        "\n",
    );

    let table = BoxTableParser::new().parse(text).unwrap();
    assert_eq!(table.matrix().data()[0][3], "146035.00");
    assert_eq!(table.matrix().data()[1][3], "87.5");
    assert_eq!(table.matrix().data_len(), 2);
}

#[test]
fn test_split_parser_agrees_on_plain_values() {
    let (header, rows) = sample();
    let rows: Vec<Vec<String>> = rows.into_iter().filter(|r| !r[2].is_empty()).collect();

    for text in [
        common::postgres(&header, &rows),
        common::postgres_unicode(&header, &rows),
        common::mysql(&header, &rows),
    ] {
        let boxed = BoxTableParser::new().parse(&text).unwrap();
        let split = DelimiterSplitParser::new().parse(&text).unwrap();
        assert_eq!(boxed.matrix(), split.matrix());
    }
}

#[test]
fn test_plain_text_has_no_ruler() {
    let text = "Nothing to see here.\nJust some prose.\nNo table at all.\n";

    let err = BoxTableParser::new().parse(text).unwrap_err();
    assert!(matches!(err, Error::MissingRuler { .. }));
}
