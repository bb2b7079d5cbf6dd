//! Delimited-text codec for the table stores
//!
//! Rendering is canonical: a field is quoted only when it contains the
//! delimiter, a quote, or a line break, and quotes are doubled. Because
//! every full-table rewrite goes through the same renderer, re-writing
//! an unchanged row reproduces it byte for byte.

/// Render one field, quoting only when required
#[must_use]
pub fn render_field(field: &str, delimiter: char) -> String {
    let needs_quoting = field.contains(delimiter)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');
    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render one row as a delimited line (no trailing newline)
#[must_use]
pub fn render_line<S: AsRef<str>>(fields: &[S], delimiter: char) -> String {
    fields
        .iter()
        .map(|field| render_field(field.as_ref(), delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

/// Parse a full delimited document into rows of fields
///
/// Quoted fields may contain the delimiter, doubled quotes, and line
/// breaks. A trailing newline does not produce an empty row.
#[must_use]
pub fn parse_table(content: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();
    let mut saw_any = false;

    while let Some(c) = chars.next() {
        saw_any = true;
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            row.push(std::mem::take(&mut field));
        } else if c == '\n' || c == '\r' {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            row.push(std::mem::take(&mut field));
            rows.push(std::mem::take(&mut row));
            saw_any = false;
        } else {
            field.push(c);
        }
    }

    if saw_any {
        row.push(field);
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_stay_unquoted() {
        assert_eq!(render_line(&["Maria", "Good", "165"], ','), "Maria,Good,165");
    }

    #[test]
    fn special_characters_are_quoted_and_round_trip() {
        let row = vec![
            "No, pre-diabetes or borderline diabetes".to_string(),
            "say \"hi\"".to_string(),
            "two\nlines".to_string(),
        ];
        let line = render_line(&row, ',');
        assert_eq!(
            line,
            "\"No, pre-diabetes or borderline diabetes\",\"say \"\"hi\"\"\",\"two\nlines\""
        );
        assert_eq!(parse_table(&line, ','), vec![row]);
    }

    #[test]
    fn trailing_newline_does_not_add_a_row() {
        let parsed = parse_table("a,b\nc,d\n", ',');
        assert_eq!(parsed, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn empty_document_parses_to_no_rows() {
        assert!(parse_table("", ',').is_empty());
    }
}
