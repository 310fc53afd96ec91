//! Pure time-grid conversions.
//!
//! Maps pointer positions to minute offsets under the configured rendering
//! scale, snaps offsets to slot boundaries, and formats clock labels. No
//! state, no failures: out-of-range input is clamped, never rejected.

use chrono::{Duration, NaiveTime};

/// Convert a vertical pixel position into a minute offset, clamped to
/// `[0, total_minutes]`. A non-finite position or a non-positive scale
/// resolves to the top of the grid.
pub fn to_offset_minutes(pixel_y: f32, pixels_per_minute: f32, total_minutes: i64) -> i64 {
    if !pixel_y.is_finite() || !pixels_per_minute.is_finite() || pixels_per_minute <= 0.0 {
        return 0;
    }
    let raw = (pixel_y / pixels_per_minute).round() as i64;
    raw.clamp(0, total_minutes.max(0))
}

/// Round an offset to the nearest multiple of the slot size.
/// A non-positive slot leaves the offset unchanged.
pub fn snap(offset_minutes: i64, slot_minutes: i64) -> i64 {
    if slot_minutes <= 0 {
        return offset_minutes;
    }
    let slots = (offset_minutes as f64 / slot_minutes as f64).round() as i64;
    slots * slot_minutes
}

/// Clock time of `day_start + offset`, wrapping across midnight.
pub fn absolute_time(day_start: NaiveTime, offset_minutes: i64) -> NaiveTime {
    let (time, _) = day_start.overflowing_add_signed(Duration::minutes(offset_minutes));
    time
}

/// Clock label of `day_start + offset` in `h:mm AM/PM` form.
pub fn absolute_label(day_start: NaiveTime, offset_minutes: i64) -> String {
    absolute_time(day_start, offset_minutes)
        .format("%-I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_to_offset_divides_by_scale() {
        assert_eq!(to_offset_minutes(120.0, 2.0, 480), 60);
        assert_eq!(to_offset_minutes(0.0, 2.0, 480), 0);
    }

    #[test]
    fn test_to_offset_clamps_extremes() {
        assert_eq!(to_offset_minutes(-500.0, 2.0, 480), 0);
        assert_eq!(to_offset_minutes(1.0e9, 2.0, 480), 480);
        assert_eq!(to_offset_minutes(f32::NAN, 2.0, 480), 0);
        assert_eq!(to_offset_minutes(f32::INFINITY, 2.0, 480), 0);
    }

    #[test]
    fn test_to_offset_bad_scale_resolves_to_top() {
        assert_eq!(to_offset_minutes(120.0, 0.0, 480), 0);
        assert_eq!(to_offset_minutes(120.0, -2.0, 480), 0);
    }

    #[test]
    fn test_snap_rounds_to_nearest_slot() {
        assert_eq!(snap(7, 15), 0);
        assert_eq!(snap(8, 15), 15);
        assert_eq!(snap(22, 15), 15);
        assert_eq!(snap(23, 15), 30);
        assert_eq!(snap(30, 15), 30);
    }

    #[test]
    fn test_snap_is_idempotent() {
        for offset in [0, 7, 8, 44, 173, 1079] {
            for slot in [5, 10, 15, 30, 45, 60] {
                let once = snap(offset, slot);
                assert_eq!(snap(once, slot), once, "offset {offset} slot {slot}");
            }
        }
    }

    #[test]
    fn test_absolute_label_carries_minutes_into_hours() {
        assert_eq!(absolute_label(at(11, 0), 180), "2:00 PM");
        assert_eq!(absolute_label(at(9, 45), 30), "10:15 AM");
        assert_eq!(absolute_label(at(9, 0), 0), "9:00 AM");
    }

    #[test]
    fn test_absolute_label_wraps_past_midnight() {
        assert_eq!(absolute_label(at(23, 30), 60), "12:30 AM");
    }
}
