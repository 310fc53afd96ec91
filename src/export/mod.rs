//! Schedule export.
//!
//! Serializes a schedule to a plain-text agenda and to an iCalendar
//! document. Both exporters read the canonical item list exactly once, so a
//! document can never mix states from before and after a mutation. Writing
//! the result to disk or elsewhere is the caller's job; only the
//! date-derived filenames are provided here.

mod ics;
mod text;

pub use ics::{ics_filename, to_ics};
pub use text::{text_filename, to_text};
