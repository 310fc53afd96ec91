//! iCalendar export.
//!
//! One VEVENT per scheduled item. Times are emitted as floating local
//! datetimes (no Z, no TZID): the schedule lives on one naive local date
//! and should import at the same wall-clock time anywhere.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use icalendar::{Calendar, Component, EventLike};

use crate::error::{ScheduleError, ScheduleResult};
use crate::item::ScheduledItem;
use crate::store::ScheduleStore;

/// Description used when an item carries no notes.
const DEFAULT_DESCRIPTION: &str = "Scheduled with daygrid";

/// Generate the .ics document for the whole schedule.
///
/// Absolute times are `date + day_start + offset`; an offset that runs past
/// midnight rolls into the next day. A datetime that cannot be represented
/// surfaces as `ExportFailure` and no document is produced.
pub fn to_ics(store: &ScheduleStore, title: &str) -> ScheduleResult<String> {
    let config = store.config();
    let items: Vec<ScheduledItem> = store.list().into_iter().cloned().collect();

    let day_anchor = config.date.and_time(config.day_start);

    let mut cal = Calendar::new();
    cal.name(title);

    for item in &items {
        let start = offset_datetime(day_anchor, item.start_offset_minutes)?;
        let end = offset_datetime(day_anchor, item.end_offset_minutes())?;

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("{}@daygrid", item.id));
        ics_event.summary(&item.title);
        add_floating_datetime(&mut ics_event, "DTSTART", start);
        add_floating_datetime(&mut ics_event, "DTEND", end);

        match item.notes.as_deref().filter(|n| !n.is_empty()) {
            Some(notes) => ics_event.description(notes),
            None => ics_event.description(DEFAULT_DESCRIPTION),
        };

        cal.push(ics_event.done());
    }

    Ok(cal.done().to_string())
}

/// Filename for the .ics document, derived from the schedule date.
pub fn ics_filename(date: NaiveDate) -> String {
    format!("{}-schedule.ics", date.format("%Y-%m-%d"))
}

fn offset_datetime(day_anchor: NaiveDateTime, offset_minutes: i64) -> ScheduleResult<NaiveDateTime> {
    day_anchor
        .checked_add_signed(Duration::minutes(offset_minutes))
        .ok_or_else(|| {
            ScheduleError::ExportFailure(format!(
                "offset {offset_minutes} min from {day_anchor} is out of range"
            ))
        })
}

/// Add a floating local datetime property (`%Y%m%dT%H%M%S`, no Z, no TZID).
fn add_floating_datetime(ics_event: &mut icalendar::Event, name: &str, dt: NaiveDateTime) {
    ics_event.add_property(name, dt.format("%Y%m%dT%H%M%S").to_string());
}
