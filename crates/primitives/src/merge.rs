//! Field merging between a base value and a picked value.
//!
//! These are the only functions that move calendar or clock fields from one
//! [`PointInTime`] into another. Both take their arguments by value and build
//! a fresh result, so neither input can be altered.

use crate::PointInTime;

/// Returns `base` with its calendar fields (year, month, day) replaced by those of `selected`.
///
/// Clock fields, including the sub-second part, are kept from `base`.
#[inline]
pub fn merge_date_part(base: PointInTime, selected: PointInTime) -> PointInTime {
	PointInTime::from_parts(selected.date(), base.time())
}

/// Returns `base` with its clock fields (hour, minute, second, sub-second) replaced by those of `selected`.
///
/// Calendar fields are kept from `base`.
#[inline]
pub fn merge_time_part(base: PointInTime, selected: PointInTime) -> PointInTime {
	PointInTime::from_parts(base.date(), selected.time())
}
