//! Host boundary for the change controller.
//!
//! The host owns the displayed value, the stage between events and the
//! picker's visibility. The controller never reads host state back; it only
//! issues these callbacks.

use chronopick_primitives::{PointInTime, Stage};

/// Capability contract for whatever owns a picker's state.
pub trait PickerHost {
	/// Stores a new composite value, passed back as `current` on the next event.
	fn set_value(&mut self, value: PointInTime);

	/// Stores the stage to report on the next event.
	fn set_stage(&mut self, stage: Stage);

	/// Dismisses the picker.
	fn close(&mut self);

	/// Receives the completed value, once per finished session.
	fn on_finalized(&mut self, value: PointInTime);
}

impl<H: PickerHost + ?Sized> PickerHost for &mut H {
	fn set_value(&mut self, value: PointInTime) {
		(**self).set_value(value);
	}

	fn set_stage(&mut self, stage: Stage) {
		(**self).set_stage(stage);
	}

	fn close(&mut self) {
		(**self).close();
	}

	fn on_finalized(&mut self, value: PointInTime) {
		(**self).on_finalized(value);
	}
}

/// Closure-backed host adapter.
pub struct FnPickerHost<V, S, C, F> {
	set_value: V,
	set_stage: S,
	close: C,
	on_finalized: F,
}

impl<V, S, C, F> FnPickerHost<V, S, C, F> {
	pub fn new(set_value: V, set_stage: S, close: C, on_finalized: F) -> Self {
		Self {
			set_value,
			set_stage,
			close,
			on_finalized,
		}
	}
}

impl<V, S, C, F> PickerHost for FnPickerHost<V, S, C, F>
where
	V: FnMut(PointInTime),
	S: FnMut(Stage),
	C: FnMut(),
	F: FnMut(PointInTime),
{
	fn set_value(&mut self, value: PointInTime) {
		(self.set_value)(value)
	}

	fn set_stage(&mut self, stage: Stage) {
		(self.set_stage)(stage)
	}

	fn close(&mut self) {
		(self.close)()
	}

	fn on_finalized(&mut self, value: PointInTime) {
		(self.on_finalized)(value)
	}
}
