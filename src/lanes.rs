//! Lane assignment for overlapping items.
//!
//! Concurrently active items are spread across visual lanes so none overlap
//! on screen. The layout is derived data: it is recomputed from the current
//! item list on every query and never stored, so it cannot drift from the
//! schedule itself.

use std::collections::HashMap;

use uuid::Uuid;

use crate::item::ScheduledItem;

/// Derived lane layout for one item set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaneLayout {
    /// Item id to lane index (0-based).
    pub lane_of: HashMap<Uuid, usize>,
    /// Total number of lanes used.
    pub lane_count: usize,
}

impl LaneLayout {
    pub fn lane(&self, id: Uuid) -> Option<usize> {
        self.lane_of.get(&id).copied()
    }
}

/// Partition items into the minimum number of non-overlapping lanes.
///
/// Greedy interval partitioning: walk items by start offset (longer item
/// first on equal starts, which packs more stably), reusing the first lane
/// that has already ended. Lane end comparison is inclusive; an item may
/// start exactly when another ends and share its lane. The lane count
/// equals the maximum number of items active at any instant.
pub fn assign_lanes(items: &[ScheduledItem]) -> LaneLayout {
    let mut ordered: Vec<&ScheduledItem> = items.iter().collect();
    ordered.sort_by(|a, b| {
        a.start_offset_minutes
            .cmp(&b.start_offset_minutes)
            .then(b.duration_minutes.cmp(&a.duration_minutes))
    });

    let mut lane_ends: Vec<i64> = Vec::new();
    let mut lane_of = HashMap::with_capacity(items.len());

    for item in ordered {
        let lane = lane_ends
            .iter()
            .position(|&end| end <= item.start_offset_minutes);

        let index = match lane {
            Some(index) => {
                lane_ends[index] = item.end_offset_minutes();
                index
            }
            None => {
                lane_ends.push(item.end_offset_minutes());
                lane_ends.len() - 1
            }
        };
        lane_of.insert(item.id, index);
    }

    LaneLayout {
        lane_count: lane_ends.len(),
        lane_of,
    }
}
