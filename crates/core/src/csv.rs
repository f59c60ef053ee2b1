//! Minimal quote-aware CSV reading and writing.
//!
//! The takedown list arrives as a spreadsheet CSV export with quoted titles
//! (commas and quotes are common in manga titles), and the report is exported
//! in the same dialect: fields containing a comma, quote, or newline are
//! wrapped in double quotes, with embedded quotes doubled.

use crate::{Result, StrikedownError};

/// Parses CSV text into rows of fields.
///
/// Handles quoted fields, doubled escape quotes, and CRLF line endings.
/// A quote left open at end of input is an error.
pub fn parse_records(input: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => {
                row.push(std::mem::take(&mut field));
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(StrikedownError::CsvParse("unterminated quoted field".to_string()));
    }

    // Trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}

/// Formats one row of fields as a CSV line (without trailing newline).
pub fn format_row(fields: &[String]) -> String {
    fields.iter().map(|f| escape_field(f)).collect::<Vec<_>>().join(",")
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let rows = parse_records("a,b,c\nd,e,f\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn test_parse_quoted_comma() {
        let rows = parse_records("\"Berserk, Deluxe\",x,y\n").unwrap();
        assert_eq!(rows[0][0], "Berserk, Deluxe");
    }

    #[test]
    fn test_parse_escaped_quote() {
        let rows = parse_records("\"say \"\"hi\"\"\",b\n").unwrap();
        assert_eq!(rows[0][0], "say \"hi\"");
    }

    #[test]
    fn test_parse_crlf_and_missing_final_newline() {
        let rows = parse_records("a,b\r\nc,d").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_parse_unterminated_quote() {
        assert!(parse_records("\"open,b\n").is_err());
    }

    #[test]
    fn test_format_row_plain() {
        let row = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format_row(&row), "a,b");
    }

    #[test]
    fn test_format_row_escapes() {
        let row = vec!["hello, world".to_string(), "with \"quotes\"".to_string()];
        assert_eq!(format_row(&row), "\"hello, world\",\"with \"\"quotes\"\"\"");
    }

    #[test]
    fn test_round_trip() {
        let row = vec!["Kaguya-sama: Love is War".to_string(), "a,b".to_string(), "plain".to_string()];
        let parsed = parse_records(&format!("{}\n", format_row(&row))).unwrap();
        assert_eq!(parsed[0], row);
    }
}
