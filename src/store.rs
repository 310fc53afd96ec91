//! The authoritative schedule aggregate.
//!
//! `ScheduleStore` owns the item list and the config, and is the only place
//! items are mutated. Numeric input is clamped into range rather than
//! rejected; the store never fails except when an id does not exist.

use uuid::Uuid;

use crate::config::ScheduleConfig;
use crate::constants::{DEFAULT_COLOR, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES};
use crate::error::{ScheduleError, ScheduleResult};
use crate::item::{ItemPatch, NewItem, ScheduledItem};

/// Mutable aggregate holding one day's schedule.
///
/// Invariant after every operation, for every item:
/// `0 <= start`, `start + duration <= total_minutes`, `5 <= duration <= 720`.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    config: ScheduleConfig,
    // Insertion order; `list()` sorts by start with this as the tie-break.
    items: Vec<ScheduledItem>,
}

impl ScheduleStore {
    pub fn new(config: ScheduleConfig) -> Self {
        ScheduleStore {
            config,
            items: Vec::new(),
        }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Replace the config, re-clamping every item so the range invariants
    /// keep holding under the new bounds.
    pub fn set_config(&mut self, config: ScheduleConfig) {
        self.config = config;
        let total = self.config.total_minutes();
        for item in &mut self.items {
            item.duration_minutes = clamp_duration(item.duration_minutes, total);
            item.start_offset_minutes =
                clamp_start(item.start_offset_minutes, item.duration_minutes, total);
        }
    }

    /// Insert a candidate, assigning a fresh id and clamping its numeric
    /// fields into range. Never fails.
    pub fn insert(&mut self, candidate: NewItem) -> ScheduledItem {
        let total = self.config.total_minutes();
        let duration = clamp_duration(candidate.duration_minutes, total);
        let start = clamp_start(candidate.start_offset_minutes, duration, total);

        let color = if candidate.color.is_empty() {
            DEFAULT_COLOR.to_string()
        } else {
            candidate.color
        };

        let item = ScheduledItem {
            id: Uuid::new_v4(),
            title: candidate.title,
            start_offset_minutes: start,
            duration_minutes: duration,
            color,
            notes: candidate.notes,
        };
        self.items.push(item.clone());
        item
    }

    /// Move an item to a new start offset, clamped against its duration.
    pub fn move_to(&mut self, id: Uuid, new_start_offset_minutes: i64) -> ScheduleResult<()> {
        let total = self.config.total_minutes();
        let item = self.item_mut(id)?;
        item.start_offset_minutes =
            clamp_start(new_start_offset_minutes, item.duration_minutes, total);
        Ok(())
    }

    /// Resize an item. The nominal [5, 720] clamp applies first; near the
    /// schedule edge the boundary clamp wins, so `start + duration` never
    /// exceeds the total.
    pub fn resize(&mut self, id: Uuid, new_duration_minutes: i64) -> ScheduleResult<()> {
        let total = self.config.total_minutes();
        let item = self.item_mut(id)?;
        let nominal = new_duration_minutes.clamp(MIN_DURATION_MINUTES, MAX_DURATION_MINUTES);
        item.duration_minutes = nominal.min(total - item.start_offset_minutes);
        Ok(())
    }

    /// Update title/color/notes. No clamping; empty title/color patches are
    /// ignored, and an empty notes string clears the notes.
    pub fn update_fields(&mut self, id: Uuid, patch: ItemPatch) -> ScheduleResult<()> {
        let item = self.item_mut(id)?;
        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            item.title = title;
        }
        if let Some(color) = patch.color.filter(|c| !c.is_empty()) {
            item.color = color;
        }
        if let Some(notes) = patch.notes {
            item.notes = if notes.is_empty() { None } else { Some(notes) };
        }
        Ok(())
    }

    /// Delete an item. There is no undo.
    pub fn remove(&mut self, id: Uuid) -> ScheduleResult<ScheduledItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ScheduleError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&ScheduledItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in canonical order: start ascending, insertion order as the
    /// stable tie-break. This is the order lanes and exports consume.
    pub fn list(&self) -> Vec<&ScheduledItem> {
        let mut ordered: Vec<&ScheduledItem> = self.items.iter().collect();
        ordered.sort_by_key(|item| item.start_offset_minutes);
        ordered
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in raw insertion order, for snapshotting.
    pub(crate) fn items(&self) -> &[ScheduledItem] {
        &self.items
    }

    /// Re-seat an already-identified item, used by snapshot restore. The
    /// same clamping as `insert`, but the id is preserved.
    pub(crate) fn readmit(&mut self, mut item: ScheduledItem) {
        let total = self.config.total_minutes();
        item.duration_minutes = clamp_duration(item.duration_minutes, total);
        item.start_offset_minutes =
            clamp_start(item.start_offset_minutes, item.duration_minutes, total);
        if item.color.is_empty() {
            item.color = DEFAULT_COLOR.to_string();
        }
        if item.notes.as_deref() == Some("") {
            item.notes = None;
        }
        self.items.push(item);
    }

    fn item_mut(&mut self, id: Uuid) -> ScheduleResult<&mut ScheduledItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ScheduleError::NotFound(id))
    }
}

/// Clamp a duration into [5, 720], capped by the schedule total.
fn clamp_duration(duration_minutes: i64, total_minutes: i64) -> i64 {
    duration_minutes
        .clamp(MIN_DURATION_MINUTES, MAX_DURATION_MINUTES)
        .min(total_minutes)
}

/// Clamp a start offset into [0, total - duration].
fn clamp_start(start_offset_minutes: i64, duration_minutes: i64, total_minutes: i64) -> i64 {
    start_offset_minutes.clamp(0, (total_minutes - duration_minutes).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;

    fn make_store() -> ScheduleStore {
        // Default config: 9:00-17:00, 480 minutes
        ScheduleStore::new(ScheduleConfig::default())
    }

    fn candidate(start: i64, duration: i64) -> NewItem {
        NewItem {
            title: "Block".to_string(),
            start_offset_minutes: start,
            duration_minutes: duration,
            color: "#aabbcc".to_string(),
            notes: None,
        }
    }

    fn assert_invariants(store: &ScheduleStore) {
        let total = store.config().total_minutes();
        for item in store.list() {
            assert!(item.start_offset_minutes >= 0);
            assert!(item.end_offset_minutes() <= total);
            assert!(item.duration_minutes >= 5 && item.duration_minutes <= 720);
        }
    }

    #[test]
    fn test_insert_clamps_out_of_range_values() {
        let mut store = make_store();
        let item = store.insert(candidate(-50, 2000));
        assert_eq!(item.start_offset_minutes, 0);
        assert_eq!(item.duration_minutes, 480);

        let item = store.insert(candidate(470, 30));
        assert_eq!(item.start_offset_minutes, 450);
        assert_invariants(&store);
    }

    #[test]
    fn test_insert_defaults_empty_color() {
        let mut store = make_store();
        let mut raw = candidate(0, 30);
        raw.color = String::new();
        let item = store.insert(raw);
        assert!(!item.color.is_empty());
    }

    #[test]
    fn test_move_clamps_against_duration() {
        let mut store = make_store();
        let item = store.insert(candidate(0, 60));
        store.move_to(item.id, 10_000).unwrap();
        assert_eq!(store.get(item.id).unwrap().start_offset_minutes, 420);
        store.move_to(item.id, -10).unwrap();
        assert_eq!(store.get(item.id).unwrap().start_offset_minutes, 0);
        assert_invariants(&store);
    }

    #[test]
    fn test_resize_boundary_clamp_wins() {
        let mut store = make_store();
        let item = store.insert(candidate(400, 30));
        store.resize(item.id, 720).unwrap();
        // 400 + 80 = 480, the schedule edge
        assert_eq!(store.get(item.id).unwrap().duration_minutes, 80);

        store.resize(item.id, 1).unwrap();
        assert_eq!(store.get(item.id).unwrap().duration_minutes, 5);
        assert_invariants(&store);
    }

    #[test]
    fn test_missing_id_is_not_found_and_leaves_store_unchanged() {
        let mut store = make_store();
        store.insert(candidate(0, 30));
        let before: Vec<ScheduledItem> = store.list().into_iter().cloned().collect();

        let ghost = Uuid::new_v4();
        assert!(matches!(
            store.move_to(ghost, 60),
            Err(ScheduleError::NotFound(_))
        ));
        assert!(matches!(
            store.resize(ghost, 60),
            Err(ScheduleError::NotFound(_))
        ));
        assert!(matches!(
            store.remove(ghost),
            Err(ScheduleError::NotFound(_))
        ));

        let after: Vec<ScheduledItem> = store.list().into_iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_fields_normalizes_notes_and_ignores_empty_title() {
        let mut store = make_store();
        let item = store.insert(candidate(0, 30));

        store
            .update_fields(
                item.id,
                ItemPatch {
                    title: Some(String::new()),
                    color: None,
                    notes: Some("bring the rings".to_string()),
                },
            )
            .unwrap();
        let updated = store.get(item.id).unwrap();
        assert_eq!(updated.title, "Block");
        assert_eq!(updated.notes.as_deref(), Some("bring the rings"));

        store
            .update_fields(
                item.id,
                ItemPatch {
                    notes: Some(String::new()),
                    ..ItemPatch::default()
                },
            )
            .unwrap();
        assert_eq!(store.get(item.id).unwrap().notes, None);
    }

    #[test]
    fn test_remove_deletes_exactly_one() {
        let mut store = make_store();
        let a = store.insert(candidate(0, 30));
        let b = store.insert(candidate(60, 30));
        let removed = store.remove(a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(store.len(), 1);
        assert!(store.get(b.id).is_some());
    }

    #[test]
    fn test_list_orders_by_start_with_stable_ties() {
        let mut store = make_store();
        let late = store.insert(candidate(120, 30));
        let first_at_zero = store.insert(candidate(0, 30));
        let second_at_zero = store.insert(candidate(0, 60));

        let ids: Vec<Uuid> = store.list().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![first_at_zero.id, second_at_zero.id, late.id]);
    }

    #[test]
    fn test_invariants_hold_across_operation_sequences() {
        let mut store = make_store();
        let a = store.insert(candidate(100, 600));
        let b = store.insert(candidate(-300, 4));
        assert_invariants(&store);

        store.move_to(a.id, 999).unwrap();
        assert_invariants(&store);
        store.resize(a.id, -50).unwrap();
        assert_invariants(&store);
        store.resize(b.id, 10_000).unwrap();
        assert_invariants(&store);
        store.move_to(b.id, 3).unwrap();
        assert_invariants(&store);
    }

    #[test]
    fn test_set_config_reclamps_items() {
        let mut store = make_store();
        let item = store.insert(candidate(400, 60));

        let mut shorter = store.config().clone();
        shorter.day_end = chrono::NaiveTime::from_hms_opt(11, 0, 0).unwrap();
        store.set_config(shorter);

        // 9:00-11:00 leaves 120 minutes
        assert_eq!(store.config().total_minutes(), 120);
        assert_invariants(&store);
        assert!(store.get(item.id).unwrap().end_offset_minutes() <= 120);
    }
}
