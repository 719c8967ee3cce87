//! Cleaned export writer.
//!
//! Output is UTF-8 with a byte-order mark, the canonical header block, then
//! one tab-joined row per entry.

use crate::error::Result;
use crate::types::Entry;
use std::io::Write;

/// Header block written to every cleaned export, whatever the input carried.
pub const REQUIRED_HEADERS: [&str; 6] = [
    "#separator:tab",
    "#html:true",
    "#guid column:1",
    "#notetype column:2",
    "#deck column:3",
    "#tags column:9",
];

const BOM: &str = "\u{feff}";

/// Write the header block and every entry.
pub fn write_cleaned<W: Write>(mut writer: W, entries: &[Entry]) -> Result<()> {
    writer.write_all(BOM.as_bytes())?;
    for header in REQUIRED_HEADERS {
        writeln!(writer, "{}", header)?;
    }
    for entry in entries {
        writeln!(writer, "{}", entry.to_output_row().join("\t"))?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a cleaned export to a string (BOM included).
pub fn to_cleaned_string(entries: &[Entry]) -> Result<String> {
    let mut buf = Vec::new();
    write_cleaned(&mut buf, entries)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn headers_only_output() {
        let out = to_cleaned_string(&[]).unwrap();
        assert_eq!(
            out,
            "\u{feff}#separator:tab\n#html:true\n#guid column:1\n#notetype column:2\n#deck column:3\n#tags column:9\n"
        );
    }

    #[test]
    fn round_trip_line() {
        let input = "#separator:tab\nAbC123\t\"Note\"\tDeckX\t<td>Pas</td>\t<td>Dog</td>\t[sound:dog.mp3]\textra\tmore\ttag1";
        let out = to_cleaned_string(&parse(input).entries).unwrap();
        let rows: Vec<&str> = out.lines().skip(REQUIRED_HEADERS.len()).collect();
        assert_eq!(
            rows,
            vec!["AbC123\tNote\tDeckX\tPas\tDog\t[sound:dog.mp3]\textra\tmore\ttag1"]
        );
    }

    #[test]
    fn short_rows_are_padded() {
        let input = "id\tBasic\tDeck\tfront\tback\t[sound:a.mp3]";
        let out = to_cleaned_string(&parse(input).entries).unwrap();
        let row = out.lines().last().unwrap();
        assert_eq!(row, "id\tBasic\tDeck\tfront\tback\t[sound:a.mp3]\t\t\t");
        assert_eq!(row.split('\t').count(), 9);
    }

    #[test]
    fn tail_newlines_become_spaces() {
        let input = "id\tBasic\tDeck\tfront\tback\t[sound:a.mp3]\t\"multi\nline\"";
        let out = to_cleaned_string(&parse(input).entries).unwrap();
        assert!(out.contains("\t\"multi line\"\t"));
    }
}
