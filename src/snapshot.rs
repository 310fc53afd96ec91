//! Snapshot/restore surface for external persistence.
//!
//! The engine does not touch any storage medium; it hands the embedding
//! application a serializable `{config, items}` state and accepts one back.
//! Restored state is untrusted: structural problems abort the restore,
//! while out-of-range numbers are clamped and empty fields defaulted.

use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::item::ScheduledItem;
use crate::store::ScheduleStore;

/// Serializable point-in-time state of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub config: ScheduleConfig,
    pub items: Vec<ScheduledItem>,
}

impl ScheduleSnapshot {
    pub fn to_json(&self) -> ScheduleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScheduleError::InvalidSnapshot(e.to_string()))
    }

    /// Parse persisted state. An unparseable document is a structural
    /// failure: `InvalidSnapshot` is returned and nothing is applied.
    pub fn from_json(raw: &str) -> ScheduleResult<Self> {
        serde_json::from_str(raw).map_err(|e| ScheduleError::InvalidSnapshot(e.to_string()))
    }
}

impl ScheduleStore {
    /// Capture the current config and items (insertion order preserved).
    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            config: self.config().clone(),
            items: self.items().to_vec(),
        }
    }

    /// Rebuild a store from a snapshot, clamping every numeric field and
    /// defaulting empty colors. Ids and insertion order are kept.
    pub fn restore(snapshot: ScheduleSnapshot) -> ScheduleStore {
        let mut store = ScheduleStore::new(snapshot.config);
        for item in snapshot.items {
            store.readmit(item);
        }
        store
    }
}
