use colored::Colorize;
use phonebook::model::Record;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 3] = ["Name", "Phone", "Comment"];
const INDEX_HEADER: &str = "#";
const COLUMN_GAP: &str = "  ";

pub(super) fn success(message: &str) -> String {
    message.green().to_string()
}

pub(super) fn info(message: &str) -> String {
    message.dimmed().to_string()
}

pub(super) fn failure(message: &str) -> String {
    message.red().to_string()
}

pub(super) fn heading(title: &str, width: usize) -> String {
    let centered = format!("{:^width$}", title, width = width);
    format!("{}\n{}", centered.bold(), "=".repeat(width))
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// Renders records as an aligned table, optionally prefixed with their
/// 0-based position.
pub(super) fn render_table(records: &[Record], numbered: bool) -> String {
    let mut rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut row = Vec::with_capacity(4);
            if numbered {
                row.push(i.to_string());
            }
            row.extend(record.fields().iter().map(|f| f.replace('\n', " ")));
            row
        })
        .collect();

    let mut header: Vec<String> = Vec::with_capacity(4);
    if numbered {
        header.push(INDEX_HEADER.to_string());
    }
    header.extend(HEADERS.iter().map(|h| h.to_string()));
    rows.insert(0, header);

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|row| row[c].width()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for (r, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| pad_to_width(cell, width))
            .collect();
        let line = cells.join(COLUMN_GAP).trim_end().to_string();
        if r == 0 {
            out.push_str(&line.bold().to_string());
        } else if numbered {
            let (index, rest) = line.split_at(widths[0].min(line.len()));
            out.push_str(&format!("{}{}", index.yellow(), rest));
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}

pub(super) fn print_records(records: &[Record], numbered: bool, empty_message: &str) {
    if records.is_empty() {
        println!("{}", info(empty_message));
        return;
    }
    print!("{}", render_table(records, numbered));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn aligns_columns() {
        plain();
        let records = vec![
            Record::new("Alice", "123456789", "work"),
            Record::new("Bob", "+123456789012", ""),
        ];
        let table = render_table(&records, true);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "#  Name   Phone          Comment");
        assert_eq!(lines[1], "0  Alice  123456789      work");
        assert_eq!(lines[2], "1  Bob    +123456789012");
    }

    #[test]
    fn aligns_wide_characters_by_display_width() {
        plain();
        let records = vec![
            Record::new("李雷", "123456789", "a"),
            Record::new("Ann", "123456789", "b"),
        ];
        let table = render_table(&records, false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], "李雷  123456789  a");
        assert_eq!(lines[2], "Ann   123456789  b");
    }

    #[test]
    fn unnumbered_table_has_no_index_column() {
        plain();
        let table = render_table(&[Record::new("A", "123456789", "")], false);
        assert!(table.starts_with("Name"));
    }
}
