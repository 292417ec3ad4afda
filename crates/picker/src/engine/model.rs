//! Data model for picker change plans.

use chronopick_primitives::{PointInTime, Stage};

/// A single host callback requested by a change plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEffect {
	/// Store a new composite value.
	SetValue(PointInTime),
	/// Store a new stage for the next event.
	SetStage(Stage),
	/// Hand the completed value to the host.
	Finalize(PointInTime),
	/// Dismiss the picker.
	Close,
}

/// Branch of the decision table an event took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
	/// Calendar half applied; picker stays open for the clock half.
	Advance,
	/// Clock half applied to a staged session; value finalized and picker closed.
	Complete,
	/// Single-step pick adopted verbatim; value finalized and picker closed.
	Commit,
	/// No value adopted; picker closed.
	Cancel,
}

/// Ordered host effects for one selection event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePlan {
	pub outcome: ChangeOutcome,
	pub effects: Vec<ChangeEffect>,
}

impl ChangePlan {
	pub(crate) fn new(outcome: ChangeOutcome, effects: Vec<ChangeEffect>) -> Self {
		Self { outcome, effects }
	}

	pub(crate) fn cancel() -> Self {
		Self::new(ChangeOutcome::Cancel, vec![ChangeEffect::Close])
	}

	/// Value handed to the host as the session result, if any.
	pub fn finalized(&self) -> Option<PointInTime> {
		self.effects.iter().find_map(|effect| match effect {
			ChangeEffect::Finalize(value) => Some(*value),
			_ => None,
		})
	}

	/// Value stored by the host, if any.
	pub fn value(&self) -> Option<PointInTime> {
		self.effects.iter().find_map(|effect| match effect {
			ChangeEffect::SetValue(value) => Some(*value),
			_ => None,
		})
	}

	/// Returns true if the plan dismisses the picker.
	pub fn closes(&self) -> bool {
		self.effects.contains(&ChangeEffect::Close)
	}
}
