use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Overall flow of a picker session, fixed before interaction begins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
	/// Calendar fields only.
	#[strum(to_string = "date-only", serialize = "date")]
	DateOnly,
	/// Clock fields only.
	#[strum(to_string = "time-only", serialize = "time")]
	TimeOnly,
	/// Two steps: pick the date, then the time.
	#[default]
	#[strum(to_string = "date-and-time", serialize = "datetime")]
	DateAndTime,
}

impl Mode {
	/// Returns true for the two-step date-then-time flow.
	pub const fn is_staged(self) -> bool {
		matches!(self, Self::DateAndTime)
	}

	/// Stage a freshly opened picker starts in.
	pub const fn initial_stage(self) -> Stage {
		match self {
			Self::DateAndTime => Stage::AwaitingDate,
			Self::DateOnly | Self::TimeOnly => Stage::Idle,
		}
	}
}

/// Current step within a two-step session.
///
/// Only meaningful in [`Mode::DateAndTime`]; other modes stay [`Stage::Idle`].
/// Ordering follows the only permitted direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
	/// Waiting for the calendar half.
	AwaitingDate,
	/// Calendar half applied, waiting for the clock half.
	AwaitingTime,
	/// No step in progress.
	Idle,
}

impl Stage {
	/// Returns true if moving to `next` does not go backward.
	pub fn can_advance_to(self, next: Stage) -> bool {
		next >= self
	}
}

#[cfg(test)]
mod tests;
