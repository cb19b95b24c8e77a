//! Elastic plain-text table rendering for report commands.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Renders a padded table. `aligns` maps column index to alignment; columns
/// beyond its length are left-aligned.
pub fn render_table(headers: &[String], rows: &[Vec<String>], aligns: &[Align]) -> String {
    let column_count = headers.len();
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(column_count) {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }
    for width in &mut widths {
        *width = (*width).max(1);
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", format_row(headers, &widths, aligns));
    let separator = widths
        .iter()
        .map(|w| "-".repeat((*w).max(3)))
        .collect::<Vec<_>>();
    let separator_widths = widths.iter().map(|w| (*w).max(3)).collect::<Vec<_>>();
    let _ = writeln!(output, "{}", format_row(&separator, &separator_widths, &[]));
    for row in rows {
        let _ = writeln!(output, "{}", format_row(row, &widths, aligns));
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>], aligns: &[Align]) {
    print!("{}", render_table(headers, rows, aligns));
}

fn format_row(values: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let mut cells = Vec::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        let Some(width) = widths.get(idx).copied() else {
            break;
        };
        let sanitized = sanitize_cell(value);
        let padding = width.saturating_sub(sanitized.chars().count());
        let align = aligns.get(idx).copied().unwrap_or(Align::Left);
        let mut cell = String::with_capacity(width);
        match align {
            Align::Left => {
                cell.push_str(&sanitized);
                cell.push_str(&" ".repeat(padding));
            }
            Align::Right => {
                cell.push_str(&" ".repeat(padding));
                cell.push_str(&sanitized);
            }
        }
        cells.push(cell);
    }
    let mut line = cells.join("  ");
    while line.ends_with(' ') {
        line.pop();
    }
    line
}

fn sanitize_cell(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn pads_columns_to_widest_cell() {
        let rendered = render_table(
            &strings(&["block", "total"]),
            &[strings(&["Alpha", "3"]), strings(&["Beechgrove", "12"])],
            &[],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "block       total");
        assert_eq!(lines[2], "Alpha       3");
        assert_eq!(lines[3], "Beechgrove  12");
    }

    #[test]
    fn right_aligns_numeric_columns() {
        let rendered = render_table(
            &strings(&["block", "paid"]),
            &[strings(&["Alpha", "500.00"]), strings(&["Beta", "25.00"])],
            &[Align::Left, Align::Right],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "Alpha  500.00");
        assert_eq!(lines[3], "Beta    25.00");
    }

    #[test]
    fn control_characters_become_spaces() {
        let rendered = render_table(
            &strings(&["value"]),
            &[strings(&["a\tb\nc"])],
            &[],
        );
        assert!(rendered.contains("a b c"));
    }
}
