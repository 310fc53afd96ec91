//! Plain-text agenda export.

use chrono::NaiveDate;

use crate::grid;
use crate::store::ScheduleStore;

/// Render the schedule as a human-readable agenda: title line, date line,
/// blank line, then one line per item in start order with an indented
/// `Notes:` continuation where notes exist.
pub fn to_text(store: &ScheduleStore, title: &str) -> String {
    let config = store.config();
    let items = store.list();

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&config.date.format("%A, %B %-d, %Y").to_string());
    out.push_str("\n\n");

    for item in items {
        let label = grid::absolute_label(config.day_start, item.start_offset_minutes);
        out.push_str(&format!(
            "{} — {} ({} min)\n",
            label, item.title, item.duration_minutes
        ));
        if let Some(notes) = item.notes.as_deref().filter(|n| !n.is_empty()) {
            out.push_str(&format!("  Notes: {notes}\n"));
        }
    }

    out
}

/// Filename for the text document, derived from the schedule date.
pub fn text_filename(date: NaiveDate) -> String {
    format!("{}-schedule.txt", date.format("%Y-%m-%d"))
}
