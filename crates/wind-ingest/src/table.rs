//! Delimited text parsing with delimiter auto-detection.

use std::fmt;

/// Candidate delimiters in tie-break priority order.
pub const DELIMITER_CANDIDATES: [Delimiter; 4] = [
    Delimiter::Comma,
    Delimiter::Semicolon,
    Delimiter::Tab,
    Delimiter::Pipe,
];

/// Field delimiter of a delimited text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

impl Delimiter {
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Semicolon => b';',
            Self::Tab => b'\t',
            Self::Pipe => b'|',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Tab => "tab",
            Self::Pipe => "pipe",
        };
        f.write_str(name)
    }
}

/// Header row plus data rows of a parsed text table.
///
/// Rows are kept exactly as split; they may be shorter or longer than the
/// header row. Use [`RawTable::cell`] for positional access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of header columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Cell text at `(row, column)`; out-of-range positions read as `""`.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    /// Values of one column, in row order (`""` for short rows).
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |cells| cells.get(column).map_or("", String::as_str))
    }
}

/// Parses raw delimited text into a header row and data rows.
///
/// A leading byte-order mark is stripped, lines are trimmed and blank lines
/// dropped. The first remaining line is the header and decides the
/// delimiter for every line. Never fails: text without content yields an
/// empty table.
pub fn parse_table(text: &str) -> RawTable {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let Some(header_line) = lines.next() else {
        return RawTable::default();
    };
    let delimiter = detect_delimiter(header_line);
    let headers = split_record(header_line, delimiter);
    let rows: Vec<Vec<String>> = lines.map(|line| split_record(line, delimiter)).collect();

    tracing::debug!(
        %delimiter,
        columns = headers.len(),
        rows = rows.len(),
        "Parsed delimited table"
    );

    RawTable { headers, rows }
}

/// Picks the candidate delimiter that splits `line` into the most fields.
///
/// Ties keep the earlier candidate; when no candidate produces more than one
/// field the comma is used.
pub fn detect_delimiter(line: &str) -> Delimiter {
    let mut best = Delimiter::Comma;
    let mut best_fields = 0usize;
    for candidate in DELIMITER_CANDIDATES {
        let fields = split_record(line, candidate).len();
        if fields > best_fields {
            best = candidate;
            best_fields = fields;
        }
    }
    if best_fields > 1 { best } else { Delimiter::Comma }
}

/// Splits one line into trimmed fields.
///
/// A `"` toggles quoting wherever it appears, so a quoted field may follow
/// padding after the delimiter. Inside quotes a doubled `""` is a literal
/// quote and the delimiter does not split.
pub fn split_record(line: &str, delimiter: Delimiter) -> Vec<String> {
    let separator = char::from(delimiter.as_byte());
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            c if c == separator && !in_quotes => {
                fields.push(clean_field(&current));
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(clean_field(&current));
    fields
}

fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_empty_table() {
        assert_eq!(parse_table(""), RawTable::default());
        assert_eq!(parse_table("\u{feff}\n  \r\n\t\n"), RawTable::default());
    }

    #[test]
    fn strips_bom_and_blank_lines() {
        let table = parse_table("\u{feff}Postcode,Alt\r\n\r\nSW1A1AA,20\n   \nE1 6AN , 12 \n");
        assert_eq!(table.headers, vec!["Postcode", "Alt"]);
        assert_eq!(
            table.rows,
            vec![vec!["SW1A1AA", "20"], vec!["E1 6AN", "12"]]
        );
    }

    #[test]
    fn detects_semicolon_and_tab() {
        assert_eq!(detect_delimiter("Postcode;Altitude;Notes"), Delimiter::Semicolon);
        assert_eq!(detect_delimiter("Postcode\tAltitude"), Delimiter::Tab);
        assert_eq!(detect_delimiter("Postcode|Altitude"), Delimiter::Pipe);
    }

    #[test]
    fn delimiter_ties_prefer_earlier_candidate() {
        assert_eq!(detect_delimiter("a,b;c"), Delimiter::Comma);
        assert_eq!(detect_delimiter("a;b|c"), Delimiter::Semicolon);
    }

    #[test]
    fn single_field_header_defaults_to_comma() {
        assert_eq!(detect_delimiter("Postcode"), Delimiter::Comma);
    }

    #[test]
    fn quoted_delimiters_do_not_split() {
        let fields = split_record(r#""Smith, J",  "SW1A 1AA" ,"say ""hi""""#, Delimiter::Comma);
        assert_eq!(fields, vec!["Smith, J", "SW1A 1AA", r#"say "hi""#]);
    }

    #[test]
    fn quoted_field_after_padding_keeps_delimiter() {
        let fields = split_record(r#"SW1A 1AA, "1,200""#, Delimiter::Comma);
        assert_eq!(fields, vec!["SW1A 1AA", "1,200"]);
    }

    #[test]
    fn mixed_spaced_and_unspaced_quoted_fields() {
        let fields = split_record(r#""A, B",  "C,D" ,x, "E" ,"F,G"  "#, Delimiter::Comma);
        assert_eq!(fields, vec!["A, B", "C,D", "x", "E", "F,G"]);

        let fields = split_record(r#"SW1A 1AA; "Smith; J" ;"20""#, Delimiter::Semicolon);
        assert_eq!(fields, vec!["SW1A 1AA", "Smith; J", "20"]);
    }

    #[test]
    fn padded_quoted_field_keeps_later_columns_aligned() {
        let table = parse_table("Postcode, Name, Alt\nSW1A 1AA, \"Smith, J\", 20\n");
        assert_eq!(table.headers, vec!["Postcode", "Name", "Alt"]);
        assert_eq!(table.rows, vec![vec!["SW1A 1AA", "Smith, J", "20"]]);
    }

    #[test]
    fn padded_quotes_do_not_sway_delimiter_detection() {
        assert_eq!(detect_delimiter(r#"Postcode; "Name, Initial"; Alt"#), Delimiter::Semicolon);
    }

    #[test]
    fn ragged_rows_are_kept() {
        let table = parse_table("a;b;c\n1;2\n1;2;3;4\n");
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 4);
        assert_eq!(table.cell(0, 2), "");
        assert_eq!(table.cell(1, 3), "4");
        assert_eq!(table.cell(9, 0), "");
    }

    #[test]
    fn column_values_pad_short_rows() {
        let table = parse_table("a,b\n1\n2,3\n");
        let values: Vec<&str> = table.column_values(1).collect();
        assert_eq!(values, vec!["", "3"]);
    }
}
