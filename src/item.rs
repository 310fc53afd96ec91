//! Scheduled item types.
//!
//! `ScheduledItem` is the unit of a schedule: a titled block of minutes at
//! an offset from the day-start anchor. Items are owned exclusively by the
//! `ScheduleStore`; everything else works with references or clones.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single timed activity placed on the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledItem {
    /// Assigned at creation, never changes.
    pub id: Uuid,
    pub title: String,
    /// Minutes from the schedule's day-start anchor.
    pub start_offset_minutes: i64,
    pub duration_minutes: i64,
    /// Presentation-only color token (hex string).
    pub color: String,
    pub notes: Option<String>,
}

impl ScheduledItem {
    /// End offset in minutes from the day-start anchor.
    pub fn end_offset_minutes(&self) -> i64 {
        self.start_offset_minutes + self.duration_minutes
    }

    /// Whether this item's `[start, end)` range intersects another's.
    /// Touching endpoints do not count as an overlap.
    pub fn overlaps(&self, other: &ScheduledItem) -> bool {
        self.start_offset_minutes < other.end_offset_minutes()
            && other.start_offset_minutes < self.end_offset_minutes()
    }
}

/// Candidate for insertion into the store.
///
/// No id yet, and no validity requirements: the store clamps the numeric
/// fields and defaults an empty color on insert.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub start_offset_minutes: i64,
    pub duration_minutes: i64,
    pub color: String,
    pub notes: Option<String>,
}

/// Partial update of an item's presentational fields.
///
/// `None` leaves a field untouched. An empty notes string clears the notes;
/// empty title/color patches are ignored since those stay non-empty.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub color: Option<String>,
    pub notes: Option<String>,
}
