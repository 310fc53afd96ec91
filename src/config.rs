//! Schedule-wide configuration.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCHEDULE_MINUTES, MIN_SCHEDULE_MINUTES};

/// Snapping granularity, restricted to the slot sizes the grid offers.
///
/// Serialized as the minute number; unknown numbers snap to the closest
/// supported size rather than failing (snapshots are untrusted input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum SlotSize {
    Five,
    Ten,
    Fifteen,
    Thirty,
    FortyFive,
    Sixty,
}

impl SlotSize {
    const ALL: [SlotSize; 6] = [
        SlotSize::Five,
        SlotSize::Ten,
        SlotSize::Fifteen,
        SlotSize::Thirty,
        SlotSize::FortyFive,
        SlotSize::Sixty,
    ];

    pub fn minutes(self) -> i64 {
        match self {
            SlotSize::Five => 5,
            SlotSize::Ten => 10,
            SlotSize::Fifteen => 15,
            SlotSize::Thirty => 30,
            SlotSize::FortyFive => 45,
            SlotSize::Sixty => 60,
        }
    }
}

impl From<i64> for SlotSize {
    fn from(minutes: i64) -> Self {
        *Self::ALL
            .iter()
            .min_by_key(|s| (s.minutes() - minutes).abs())
            .unwrap_or(&SlotSize::Fifteen)
    }
}

impl From<SlotSize> for i64 {
    fn from(slot: SlotSize) -> i64 {
        slot.minutes()
    }
}

impl Default for SlotSize {
    fn default() -> Self {
        SlotSize::Fifteen
    }
}

/// Configuration for one day's schedule.
///
/// All times are naive local; the date is an anchor for labeling and export
/// only. `pixels_per_minute` is a rendering scale consumed when inverting
/// pointer positions into minute offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub date: NaiveDate,
    pub day_start: NaiveTime,
    pub day_end: NaiveTime,
    pub slot_size: SlotSize,
    pub snap_enabled: bool,
    pub pixels_per_minute: f32,
}

impl ScheduleConfig {
    /// Total schedulable minutes, clamped to [60, 1080] regardless of the
    /// raw `day_start`/`day_end` pair (a reversed pair clamps to the floor).
    pub fn total_minutes(&self) -> i64 {
        let span = (self.day_end - self.day_start).num_minutes();
        span.clamp(MIN_SCHEDULE_MINUTES, MAX_SCHEDULE_MINUTES)
    }
}

impl Default for ScheduleConfig {
    /// A 9:00–17:00 day with 15-minute snapping.
    fn default() -> Self {
        ScheduleConfig {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            day_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            day_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            slot_size: SlotSize::default(),
            snap_enabled: true,
            pixels_per_minute: 2.0,
        }
    }
}
