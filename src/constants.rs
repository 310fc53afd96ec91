//! Policy bounds shared across the crate.

/// Shortest duration an item may have, in minutes.
pub const MIN_DURATION_MINUTES: i64 = 5;

/// Longest duration an item may have, in minutes.
pub const MAX_DURATION_MINUTES: i64 = 720;

/// Shortest allowed schedule span (1 hour).
pub const MIN_SCHEDULE_MINUTES: i64 = 60;

/// Longest allowed schedule span (18 hours).
pub const MAX_SCHEDULE_MINUTES: i64 = 1080;

/// Color token applied when an item carries an empty one.
pub const DEFAULT_COLOR: &str = "#7c9cf5";
