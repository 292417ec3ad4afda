use chronopick_primitives::{Mode, PointInTime, SelectionEvent, Stage};

use crate::config::PickerConfig;
use crate::controller::handle_change;
use crate::host::PickerHost;

/// Host-side state for one picker across repeated sessions.
///
/// Owns everything the controller treats as external: the composite value,
/// the stage between events, whether the picker is showing, and the last
/// finalized result. Reopening resets the stage, so a new session never
/// inherits progress from the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSession {
	mode: Mode,
	stage: Stage,
	value: PointInTime,
	open: bool,
	finalized: Option<PointInTime>,
	completed: usize,
}

impl PickerSession {
	/// Creates a closed session starting from `initial`.
	pub fn new(mode: Mode, initial: PointInTime) -> Self {
		Self {
			mode,
			stage: Stage::Idle,
			value: initial,
			open: false,
			finalized: None,
			completed: 0,
		}
	}

	pub fn from_config(config: &PickerConfig) -> Self {
		Self::new(config.mode(), config.initial_value())
	}

	/// Shows the picker and starts a fresh session.
	///
	/// Returns `false` if the picker is already showing.
	pub fn open(&mut self) -> bool {
		if self.open {
			return false;
		}
		self.open = true;
		self.stage = self.mode.initial_stage();
		self.finalized = None;
		tracing::debug!(mode = %self.mode, stage = %self.stage, value = %self.value, "Picker opened");
		true
	}

	/// Feeds one selection event through the controller.
	///
	/// Returns `false` without effect if the picker is not showing.
	pub fn select(&mut self, selection: SelectionEvent) -> bool {
		if !self.open {
			tracing::warn!(mode = %self.mode, "Ignoring selection for closed picker");
			return false;
		}
		let (mode, stage, value) = (self.mode, self.stage, self.value);
		handle_change(mode, stage, value, selection, self);
		true
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn stage(&self) -> Stage {
		self.stage
	}

	pub fn value(&self) -> PointInTime {
		self.value
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Result of the current or most recent session, if it completed.
	pub fn finalized(&self) -> Option<PointInTime> {
		self.finalized
	}

	/// Number of sessions that ended with a finalized value.
	pub fn completed(&self) -> usize {
		self.completed
	}
}

impl PickerHost for PickerSession {
	fn set_value(&mut self, value: PointInTime) {
		self.value = value;
	}

	fn set_stage(&mut self, stage: Stage) {
		if !self.stage.can_advance_to(stage) {
			tracing::warn!(from = %self.stage, to = %stage, "Refusing backward stage transition");
			return;
		}
		self.stage = stage;
	}

	fn close(&mut self) {
		self.open = false;
	}

	fn on_finalized(&mut self, value: PointInTime) {
		self.finalized = Some(value);
		self.completed += 1;
	}
}
