//! Ranking and rendering of classified results.
//!
//! Results are ordered by detection severity, then by missing percentage
//! descending. The console table truncates long titles; the CSV export never
//! does.

use crate::classify::ClassifiedResult;
use crate::csv;

/// Maximum title length in the console table, ellipsis included.
pub const TITLE_DISPLAY_WIDTH: usize = 50;

/// CSV column schema, in order.
const CSV_COLUMNS: [&str; 6] =
    ["Title", "Categories", "Reading status", "Detection type", "Missing chaps (%)", "URL"];

/// Sorts results by `(severity, -missing_percent)`.
///
/// The sort is stable: ties keep their input relative order.
pub fn rank(results: &mut [ClassifiedResult]) {
    results.sort_by(|a, b| {
        a.detection
            .severity()
            .cmp(&b.detection.severity())
            .then_with(|| b.missing_percent.total_cmp(&a.missing_percent))
    });
}

/// Truncates a title for console display, appending `...` when it overflows.
pub fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() <= max_len {
        return title.to_string();
    }
    let kept: String = title.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Renders the ranked results as a fixed-width console table.
pub fn render_table(results: &[ClassifiedResult]) -> String {
    let rows: Vec<[String; 6]> = results
        .iter()
        .map(|r| {
            let mut row = result_row(r);
            row[0] = truncate_title(&row[0], TITLE_DISPLAY_WIDTH);
            row
        })
        .collect();

    let mut widths: [usize; 6] = CSV_COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    render_row(&mut out, &CSV_COLUMNS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    render_row(&mut out, &rule, &widths);
    for row in &rows {
        render_row(&mut out, row.as_slice(), &widths);
    }
    out
}

fn render_row(out: &mut String, cells: &[String], widths: &[usize; 6]) {
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // Pad by char count, not byte length; the last column is left ragged.
        if i < widths.len() - 1 {
            let pad = width.saturating_sub(cell.chars().count());
            out.push_str(&" ".repeat(pad));
        }
    }
    out.push('\n');
}

/// Serializes results as CSV: header plus one row per result.
///
/// Titles are written in full here; truncation is display-only.
pub fn to_csv(results: &[ClassifiedResult]) -> String {
    let mut out = String::new();
    out.push_str(&csv::format_row(&CSV_COLUMNS.map(String::from)));
    out.push('\n');
    for result in results {
        out.push_str(&csv::format_row(&result_row(result)));
        out.push('\n');
    }
    out
}

fn result_row(result: &ClassifiedResult) -> [String; 6] {
    [
        result.title.clone(),
        result.categories.join(", "),
        result.reading_status.clone(),
        result.detection.as_str().to_string(),
        format_percent(result.missing_percent),
        result.url.clone(),
    ]
}

fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
