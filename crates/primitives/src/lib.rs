//! Core value types for staged date/time picking: wall-clock points in time,
//! picker modes and stages, and the calendar/clock field merger.

/// Calendar/clock field merging between two points in time.
pub mod merge;
/// Picker mode and stage definitions.
pub mod mode;
/// Wall-clock point-in-time values and lenient text parsing.
pub mod point;

pub use merge::{merge_date_part, merge_time_part};
pub use mode::{Mode, Stage};
pub use point::{ParseError, PointInTime, SelectionEvent};
