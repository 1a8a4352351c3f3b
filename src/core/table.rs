//! Text rendering for row previews

use tabled::{builder::Builder, settings::Style};

/// Render a header and rows as a borderless table
///
/// A leading index column numbers the rows from zero. The output has exactly
/// one line for the header and one line per row, with trailing whitespace
/// trimmed. Line breaks inside cells are flattened to spaces.
pub fn render_preview(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();

    let mut header_record = Vec::with_capacity(headers.len() + 1);
    header_record.push(String::new());
    header_record.extend(headers.iter().map(|cell| single_line(cell)));
    builder.push_record(header_record);

    for (index, row) in rows.iter().enumerate() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(index.to_string());
        record.extend(row.iter().map(|cell| single_line(cell)));
        builder.push_record(record);
    }

    let rendered = builder.build().with(Style::blank()).to_string();

    rendered
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

fn single_line(cell: &str) -> String {
    cell.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_one_line_per_row_plus_header() {
        let headers = strings(&["name", "qty"]);
        let rows = vec![strings(&["bolt", "10"]), strings(&["nut", "250"])];

        let rendered = render_preview(&headers, &rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("name") && lines[0].contains("qty"));
        assert!(lines[1].trim_start().starts_with('0'));
        assert!(lines[1].contains("bolt"));
        assert!(lines[2].trim_start().starts_with('1'));
        assert!(lines[2].contains("250"));
    }

    #[test]
    fn test_header_only_when_no_rows() {
        let rendered = render_preview(&strings(&["a", "b"]), &[]);
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.contains('a') && rendered.contains('b'));
    }

    #[test]
    fn test_embedded_newlines_stay_on_one_line() {
        let rendered = render_preview(&strings(&["note"]), &[strings(&["first\nsecond"])]);
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("first second"));
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let rendered = render_preview(&strings(&["x", "y"]), &[strings(&["1", ""])]);
        assert!(rendered.lines().all(|line| line == line.trim_end()));
    }
}
