use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{merge_date_part, merge_time_part};

/// Canonical text form, also used by the serde representation.
const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Accepted forms carrying both calendar and clock fields.
const DATETIME_FORMATS: &[&str] = &[
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// A user pick; `None` is a cancel or dismiss with no new value.
pub type SelectionEvent = Option<PointInTime>;

/// A wall-clock point in time: calendar fields plus clock fields, no zone.
///
/// Values are `Copy`; every merge yields a new value and the inputs are never
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointInTime(NaiveDateTime);

impl PointInTime {
	pub const fn new(value: NaiveDateTime) -> Self {
		Self(value)
	}

	/// Assembles a value from a calendar half and a clock half.
	pub const fn from_parts(date: NaiveDate, time: NaiveTime) -> Self {
		Self(NaiveDateTime::new(date, time))
	}

	/// Builds a value from individual fields, or `None` if any field is out of range.
	pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
		let date = NaiveDate::from_ymd_opt(year, month, day)?;
		let time = NaiveTime::from_hms_opt(hour, minute, second)?;
		Some(Self::from_parts(date, time))
	}

	/// Midnight on the given date.
	pub fn start_of_day(date: NaiveDate) -> Self {
		Self::from_parts(date, NaiveTime::MIN)
	}

	pub const fn naive(self) -> NaiveDateTime {
		self.0
	}

	pub const fn date(self) -> NaiveDate {
		self.0.date()
	}

	pub const fn time(self) -> NaiveTime {
		self.0.time()
	}

	/// Calendar fields as `(year, month, day)`.
	pub fn calendar(self) -> (i32, u32, u32) {
		(self.0.year(), self.0.month(), self.0.day())
	}

	/// Clock fields as `(hour, minute, second, nanosecond)`.
	pub fn clock(self) -> (u32, u32, u32, u32) {
		(self.0.hour(), self.0.minute(), self.0.second(), self.0.nanosecond())
	}

	/// Parses a possibly partial pick, filling the missing half from `anchor`.
	///
	/// A date-only input keeps the clock of `anchor`; a time-only input keeps
	/// its calendar. Full inputs are returned verbatim.
	pub fn parse_against(text: &str, anchor: PointInTime) -> Result<Self, ParseError> {
		Ok(match Partial::parse(text)? {
			Partial::Full(value) => Self(value),
			Partial::Date(date) => merge_date_part(anchor, Self::start_of_day(date)),
			Partial::Time(time) => merge_time_part(anchor, Self::from_parts(anchor.date(), time)),
		})
	}
}

impl From<NaiveDateTime> for PointInTime {
	fn from(value: NaiveDateTime) -> Self {
		Self(value)
	}
}

impl From<PointInTime> for NaiveDateTime {
	fn from(value: PointInTime) -> Self {
		value.0
	}
}

impl fmt::Display for PointInTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.format(DISPLAY_FORMAT))
	}
}

/// Accepts full date-times and date-only input (taken as midnight).
impl FromStr for PointInTime {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match Partial::parse(s)? {
			Partial::Full(value) => Ok(Self(value)),
			Partial::Date(date) => Ok(Self::start_of_day(date)),
			Partial::Time(_) => Err(ParseError::MissingDate { input: s.trim().to_string() }),
		}
	}
}

/// Errors from parsing point-in-time text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// Input was empty or whitespace only.
	#[error("empty date/time input")]
	Empty,

	/// A time was given where a calendar date is required.
	#[error("{input:?} has no calendar date (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS])")]
	MissingDate {
		/// The trimmed input.
		input: String,
	},

	/// Input matched none of the accepted forms.
	#[error("unrecognized date/time {input:?} (expected YYYY-MM-DD, HH:MM[:SS] or YYYY-MM-DDTHH:MM[:SS])")]
	Unrecognized {
		/// The trimmed input.
		input: String,
	},
}

enum Partial {
	Full(NaiveDateTime),
	Date(NaiveDate),
	Time(NaiveTime),
}

impl Partial {
	fn parse(text: &str) -> Result<Self, ParseError> {
		let text = text.trim();
		if text.is_empty() {
			return Err(ParseError::Empty);
		}

		if let Some(value) = DATETIME_FORMATS
			.iter()
			.find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
		{
			return Ok(Self::Full(value));
		}
		if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
			return Ok(Self::Date(date));
		}
		TIME_FORMATS
			.iter()
			.find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
			.map(Self::Time)
			.ok_or_else(|| ParseError::Unrecognized { input: text.to_string() })
	}
}

#[cfg(test)]
mod tests;
