//! Renderers producing database shell output for test tables.

#![allow(dead_code)]

/// Column widths: the longest header or value per column.
fn widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

fn left(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// psql-style output with the given vertical delimiter, rule and cross.
fn render_psql(
    header: &[String],
    rows: &[Vec<String>],
    vertical: char,
    rule: char,
    cross: char,
) -> String {
    let widths = widths(header, rows);
    let sep = vertical.to_string();
    let mut out = String::new();

    let cells: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!(" {} ", center(h, w)))
        .collect();
    out.push_str(&cells.join(&sep));
    out.push('\n');

    let rules: Vec<String> = widths
        .iter()
        .map(|&w| rule.to_string().repeat(w + 2))
        .collect();
    out.push_str(&rules.join(&cross.to_string()));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!(" {} ", left(v, w)))
            .collect();
        out.push_str(&cells.join(&sep));
        out.push('\n');
    }

    let n = rows.len();
    out.push_str(&format!("({} row{})\n", n, if n == 1 { "" } else { "s" }));
    out
}

/// psql with ASCII line style.
pub fn postgres(header: &[String], rows: &[Vec<String>]) -> String {
    render_psql(header, rows, '|', '-', '+')
}

/// psql with unicode line style.
pub fn postgres_unicode(header: &[String], rows: &[Vec<String>]) -> String {
    render_psql(header, rows, '│', '─', '┼')
}

/// mysql client output.
pub fn mysql(header: &[String], rows: &[Vec<String>]) -> String {
    let widths = widths(header, rows);
    let ruler: String = {
        let rules: Vec<String> = widths.iter().map(|&w| "-".repeat(w + 2)).collect();
        format!("+{}+\n", rules.join("+"))
    };
    let line = |cells: &[String]| {
        let cells: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!(" {} ", left(v, w)))
            .collect();
        format!("|{}|\n", cells.join("|"))
    };

    let mut out = ruler.clone();
    out.push_str(&line(header));
    out.push_str(&ruler);
    for row in rows {
        out.push_str(&line(row));
    }
    out.push_str(&ruler);
    out.push_str(&format!("{} rows in set (0.00 sec)\n", rows.len()));
    out
}

/// Convert string slices into owned rows.
pub fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}
