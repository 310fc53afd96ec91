//! Timeline layout and placement engine for a single-day schedule builder.
//!
//! The embedding application owns rendering, gesture capture, and storage;
//! this crate owns the logic with invariants:
//! - `grid` maps pointer positions to snapped minute offsets
//! - `lanes` packs overlapping items into minimal visual lanes
//! - `store` is the validated, clamping item aggregate
//! - `placement` turns drag payloads into store mutations
//! - `export` serializes the schedule to text and iCalendar documents
//! - `snapshot` is the pure persistence surface

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod grid;
pub mod item;
pub mod lanes;
pub mod placement;
pub mod snapshot;
pub mod store;
pub mod template;

pub use config::{ScheduleConfig, SlotSize};
pub use error::{ScheduleError, ScheduleResult};
pub use item::{ItemPatch, NewItem, ScheduledItem};
pub use lanes::{LaneLayout, assign_lanes};
pub use placement::{DragSource, DropOutcome, PlacementResolver};
pub use snapshot::ScheduleSnapshot;
pub use store::ScheduleStore;
pub use template::{PresetCatalog, PresetTemplate};
