//! Drop resolution: turning a drag gesture into a store mutation.
//!
//! Raw pointer plumbing lives outside the engine; by the time a gesture
//! reaches `resolve_drop` it is just a payload and a vertical pixel
//! position. The resolver converts the position through the grid, snaps it
//! when snapping is on, and applies exactly one store mutation.

use uuid::Uuid;

use crate::error::{ScheduleError, ScheduleResult};
use crate::grid;
use crate::item::{NewItem, ScheduledItem};
use crate::store::ScheduleStore;
use crate::template::PresetTemplate;

/// What is being dragged.
#[derive(Debug, Clone)]
pub enum DragSource {
    /// A catalog entry; dropping it creates a new item from its defaults.
    Template(PresetTemplate),
    /// An item already on the schedule; dropping it moves the item.
    Existing(Uuid),
}

/// What a resolved drop did to the store.
#[derive(Debug, Clone)]
pub enum DropOutcome {
    Inserted(ScheduledItem),
    Moved(Uuid),
}

/// Applies drop gestures to a store under an injected capacity policy.
///
/// The capacity limit (and whatever product gate decides it) is external
/// configuration; `None` disables the policy entirely. Only template drops
/// are gated — moving an existing item never changes the item count.
#[derive(Debug, Clone, Default)]
pub struct PlacementResolver {
    pub max_items: Option<usize>,
}

impl PlacementResolver {
    pub fn new(max_items: Option<usize>) -> Self {
        PlacementResolver { max_items }
    }

    /// Resolve a drop at a vertical pixel position into a store mutation.
    ///
    /// A template drop at capacity returns `CapacityExceeded` and mutates
    /// nothing; a drop on a missing item id returns `NotFound`.
    pub fn resolve_drop(
        &self,
        store: &mut ScheduleStore,
        source: DragSource,
        pointer_y: f32,
    ) -> ScheduleResult<DropOutcome> {
        let config = store.config();
        let total = config.total_minutes();

        let mut offset = grid::to_offset_minutes(pointer_y, config.pixels_per_minute, total);
        if config.snap_enabled {
            offset = grid::snap(offset, config.slot_size.minutes());
        }

        match source {
            DragSource::Template(template) => {
                if let Some(max) = self.max_items {
                    if store.len() >= max {
                        return Err(ScheduleError::CapacityExceeded(max));
                    }
                }
                let item = store.insert(NewItem {
                    title: template.label,
                    start_offset_minutes: offset,
                    duration_minutes: template.standard_duration_minutes,
                    color: template.color,
                    notes: None,
                });
                Ok(DropOutcome::Inserted(item))
            }
            DragSource::Existing(id) => {
                store.move_to(id, offset)?;
                Ok(DropOutcome::Moved(id))
            }
        }
    }
}
