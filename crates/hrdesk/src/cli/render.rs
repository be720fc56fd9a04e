//! # Rendering
//!
//! Turns library results into strings. Nothing here prints; `commands.rs`
//! decides where output goes.
//!
//! Tables are laid out from the screen schema: one column per field, headed
//! by the field label. Widths are measured with `unicode-width` so names with
//! wide characters still line up. Number columns are right-aligned; long text
//! is truncated with an ellipsis at [`MAX_COLUMN_WIDTH`].

use hrdeskapp::fields::{FieldKind, Schema};
use hrdeskapp::model::{AttendanceRecord, Record};
use hrdeskapp::provider::ProviderNotice;
use hrdeskapp::view::ViewResult;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles;

pub const MAX_COLUMN_WIDTH: usize = 32;
const COLUMN_GAP: &str = "  ";

pub fn render_table<R: Record>(schema: &Schema, result: &ViewResult<R>) -> String {
    if result.is_empty() {
        return format!("{}\n", styles::muted().apply_to("No records found."));
    }

    let fields = schema.fields();
    let rows: Vec<Vec<String>> = result
        .items
        .iter()
        .map(|record| {
            fields
                .iter()
                .map(|spec| clip(&record.field_or_empty(spec.name).to_text(), MAX_COLUMN_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = fields
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(spec.label.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = fields
        .iter()
        .zip(&widths)
        .map(|(spec, width)| pad(spec.label, *width, spec.kind == FieldKind::Number))
        .collect();
    out.push_str(&format!(
        "{}\n",
        styles::header().apply_to(header.join(COLUMN_GAP).trim_end())
    ));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(fields.iter().zip(&widths))
            .map(|(cell, (spec, width))| pad(cell, *width, spec.kind == FieldKind::Number))
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    out.push_str(&render_footer(result));
    out
}

/// "Showing 11-20 of 45 (page 2 of 5)".
pub fn render_footer<T>(result: &ViewResult<T>) -> String {
    match result.item_range() {
        Some((first, last)) => format!(
            "{}\n",
            styles::muted().apply_to(format!(
                "Showing {}-{} of {} (page {} of {})",
                first, last, result.total_count, result.page, result.total_pages
            ))
        ),
        None => String::new(),
    }
}

pub fn render_notice(notice: &ProviderNotice) -> String {
    format!("{}\n", styles::warning().apply_to(&notice.message))
}

pub fn render_mark(record: &AttendanceRecord) -> String {
    format!(
        "{}\n",
        styles::success().apply_to(format!(
            "Marked {} {} on {} (by {})",
            record.employee_id,
            record.status.as_str(),
            record.date,
            record.marked_by
        ))
    )
}

pub fn render_saved(count: usize, path: &std::path::Path) -> String {
    format!(
        "{}\n",
        styles::muted().apply_to(format!(
            "Saved {} attendance mark(s) to {}",
            count,
            path.display()
        ))
    )
}

pub fn render_locked_date(date: chrono::NaiveDate) -> String {
    format!(
        "{}\n",
        styles::locked().apply_to(format!("{} is read-only; only today can be marked.", date))
    )
}

pub fn render_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value).map(|s| s + "\n")
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right_align {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

/// `text` cut to `max_width` columns, ending in an ellipsis when cut.
fn clip(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let kept: String = text
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    kept + "…"
}
