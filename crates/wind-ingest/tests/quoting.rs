//! Quoted fields surrounded by padding split back to their original values.

use csv::{QuoteStyle, WriterBuilder};
use proptest::prelude::*;

use wind_ingest::{Delimiter, parse_table, split_record};

fn quote_field(value: &str, delimiter: Delimiter) -> String {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .delimiter(delimiter.as_byte())
        .from_writer(Vec::new());
    writer.write_record([value]).expect("encode field");
    let bytes = writer.into_inner().expect("flush field");
    String::from_utf8(bytes)
        .expect("utf-8 field")
        .trim_end_matches(['\r', '\n'])
        .to_string()
}

fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]([A-Za-z0-9 ,;|\"]{0,10}[A-Za-z0-9])?"
}

fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

proptest! {
    #[test]
    fn padded_quoted_fields_split_back(
        cells in prop::collection::vec((padding(), field(), padding()), 1..6),
        delimiter in prop::sample::select(vec![Delimiter::Comma, Delimiter::Semicolon, Delimiter::Pipe]),
    ) {
        let line = cells
            .iter()
            .map(|(before, value, after)| format!("{before}{}{after}", quote_field(value, delimiter)))
            .collect::<Vec<_>>()
            .join(&char::from(delimiter.as_byte()).to_string());

        let values: Vec<&str> = cells.iter().map(|(_, value, _)| value.as_str()).collect();
        prop_assert_eq!(split_record(&line, delimiter), values);
    }
}

#[test]
fn spaced_quoted_name_keeps_altitude_column() {
    let table = parse_table(
        "Postcode, Name, Altitude\n\
         SW1A 1AA, \"Smith, J\", 20\n\
         E1 6AN,\"Jones, K\" ,12\n\
         M1 1AE ,  \"Patel, A\",38\n",
    );
    assert_eq!(table.width(), 3);
    let altitudes: Vec<&str> = table.column_values(2).collect();
    assert_eq!(altitudes, vec!["20", "12", "38"]);
    assert_eq!(table.cell(1, 1), "Jones, K");
}
