//! Invariant catalog for the change controller.
#![allow(dead_code)]

use chronopick_primitives::{Mode, PointInTime, SelectionEvent, Stage};

use crate::engine::{ChangeEffect, ChangeOutcome, plan_change};
use crate::session::PickerSession;

const MODES: [Mode; 3] = [Mode::DateOnly, Mode::TimeOnly, Mode::DateAndTime];
const STAGES: [Stage; 3] = [Stage::AwaitingDate, Stage::AwaitingTime, Stage::Idle];

fn sample_points() -> Vec<PointInTime> {
	[
		(2024, 1, 1, 0, 0, 0),
		(2024, 6, 15, 14, 30, 0),
		(1999, 12, 31, 23, 59, 59),
		(2024, 2, 29, 12, 0, 1),
	]
	.into_iter()
	.filter_map(|(y, mo, d, h, mi, s)| PointInTime::from_ymd_hms(y, mo, d, h, mi, s))
	.collect()
}

fn all_inputs() -> Vec<(Mode, Stage, PointInTime, SelectionEvent)> {
	let points = sample_points();
	let mut out = Vec::new();
	for mode in MODES {
		for stage in STAGES {
			for &current in &points {
				out.push((mode, stage, current, None));
				for &picked in &points {
					out.push((mode, stage, current, Some(picked)));
				}
			}
		}
	}
	out
}

/// Must change calendar and clock fields together only on the final staged step.
///
/// - Enforced in: `plan_change`
/// - Failure symptom: Picking a date silently overwrites the previously chosen time.
#[cfg_attr(test, test)]
pub(crate) fn test_merge_touches_one_half_until_final_step() {
	for (mode, stage, current, selection) in all_inputs() {
		let plan = plan_change(mode, stage, current, selection);
		let Some(value) = plan.value() else { continue };
		match plan.outcome {
			ChangeOutcome::Advance => assert_eq!(value.clock(), current.clock(), "advance must keep clock"),
			ChangeOutcome::Complete => assert_eq!(value.calendar(), current.calendar(), "complete must keep calendar"),
			ChangeOutcome::Commit => assert_eq!(Some(value), selection, "commit must adopt pick verbatim"),
			ChangeOutcome::Cancel => panic!("cancel must not set a value"),
		}
	}
}

/// Must only request forward stage transitions.
///
/// - Enforced in: `plan_change`
/// - Failure symptom: Picker loops back to the date step after a time pick.
#[cfg_attr(test, test)]
pub(crate) fn test_stage_requests_only_move_forward() {
	for (mode, stage, current, selection) in all_inputs() {
		for effect in plan_change(mode, stage, current, selection).effects {
			if let ChangeEffect::SetStage(next) = effect {
				assert!(stage.can_advance_to(next), "{stage} -> {next} goes backward");
			}
		}
	}
}

/// Must never finalize, advance or store a value on a dismiss, and must still close.
///
/// - Enforced in: `plan_change`
/// - Failure symptom: Cancelling the picker commits a half-built value to the form.
#[cfg_attr(test, test)]
pub(crate) fn test_dismiss_only_closes() {
	for (mode, stage, current, selection) in all_inputs() {
		if selection.is_some() {
			continue;
		}
		let plan = plan_change(mode, stage, current, selection);
		assert_eq!(plan.effects, vec![ChangeEffect::Close]);
	}
}

/// Must end every event in a close, except the date step of a staged session.
///
/// - Enforced in: `plan_change`
/// - Failure symptom: Picker stays on screen after the session is over.
#[cfg_attr(test, test)]
pub(crate) fn test_every_path_closes_except_advance() {
	for (mode, stage, current, selection) in all_inputs() {
		let plan = plan_change(mode, stage, current, selection);
		let advancing = mode == Mode::DateAndTime && stage == Stage::AwaitingDate && selection.is_some();
		assert_eq!(plan.closes(), !advancing);
		assert_eq!(plan.outcome == ChangeOutcome::Advance, advancing);
	}
}

/// Must finalize exactly once per completed staged session, after both halves arrive.
///
/// - Enforced in: `plan_change`, `PickerSession::select`
/// - Failure symptom: Form receives a value with only the date filled in, or receives it twice.
#[cfg_attr(test, test)]
pub(crate) fn test_staged_session_finalizes_once() {
	let points = sample_points();
	for &initial in &points {
		for &date_pick in &points {
			for &time_pick in &points {
				let mut session = PickerSession::new(Mode::DateAndTime, initial);
				session.open();
				session.select(Some(date_pick));
				assert_eq!(session.completed(), 0, "finalized before the time step");
				session.select(Some(time_pick));
				assert_eq!(session.completed(), 1);
				assert_eq!(session.finalized().map(|v| v.calendar()), Some(date_pick.calendar()));
				assert_eq!(session.finalized().map(|v| v.clock()), Some(time_pick.clock()));
				assert!(!session.select(Some(time_pick)), "closed picker accepted a pick");
				assert_eq!(session.completed(), 1);
			}
		}
	}
}

/// Must not revert a merged half later in the same session.
///
/// - Enforced in: `plan_change`
/// - Failure symptom: The chosen date resets to the initial date once the time is picked.
#[cfg_attr(test, test)]
pub(crate) fn test_merged_halves_are_kept() {
	let points = sample_points();
	for &initial in &points {
		for &date_pick in &points {
			let mut session = PickerSession::new(Mode::DateAndTime, initial);
			session.open();
			session.select(Some(date_pick));
			let after_date = session.value();
			for &time_pick in &points {
				let mut finishing = session.clone();
				finishing.select(Some(time_pick));
				assert_eq!(finishing.value().calendar(), after_date.calendar());
			}
			session.select(None);
			assert_eq!(session.value(), after_date);
		}
	}
}
