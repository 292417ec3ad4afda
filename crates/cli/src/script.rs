//! Scripted picker sessions.

use std::fmt;

use anyhow::Context;
use chronopick_picker::{PickerSession, PointInTime, SelectionEvent, Stage};

/// Outcome of one picker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
	/// Session closed with a finalized value.
	Finalized(PointInTime),
	/// Session closed without a value.
	Cancelled,
	/// Picks ran out while the picker was still open.
	Pending(Stage),
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Finalized(value) => write!(f, "{value}"),
			Self::Cancelled => f.write_str("cancelled"),
			Self::Pending(stage) => write!(f, "pending ({stage})"),
		}
	}
}

fn is_dismiss(arg: &str) -> bool {
	matches!(arg.trim(), "-" | "cancel")
}

/// Feeds `picks` to `session`, reopening the picker whenever a session closes.
///
/// Partial picks are completed from the session's current value, so a bare
/// `HH:MM` keeps the chosen date and a bare `YYYY-MM-DD` keeps the clock.
pub fn run(session: &mut PickerSession, picks: &[String]) -> anyhow::Result<Vec<Report>> {
	let mut reports = Vec::new();
	for pick in picks {
		if !session.is_open() {
			session.open();
		}

		let selection: SelectionEvent = if is_dismiss(pick) {
			None
		} else {
			Some(PointInTime::parse_against(pick, session.value()).with_context(|| format!("invalid pick {pick:?}"))?)
		};
		session.select(selection);

		if !session.is_open() {
			reports.push(session.finalized().map_or(Report::Cancelled, Report::Finalized));
		}
	}
	if session.is_open() {
		reports.push(Report::Pending(session.stage()));
	}
	Ok(reports)
}
