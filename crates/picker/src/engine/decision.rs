//! Decision table mapping a selection event to a change plan.

use chronopick_primitives::{Mode, PointInTime, SelectionEvent, Stage, merge_date_part, merge_time_part};

use super::model::{ChangeEffect, ChangeOutcome, ChangePlan};

/// Plans the host effects for one selection event.
///
/// In [`Mode::DateAndTime`] the first pick supplies the calendar half and
/// advances to [`Stage::AwaitingTime`]; the second supplies the clock half,
/// finalizes and closes. Anything else in that mode (a dismiss, or a pick
/// arriving at [`Stage::Idle`]) only closes. Single-step modes adopt the pick
/// verbatim, finalize and close, or just close on a dismiss.
pub fn plan_change(mode: Mode, stage: Stage, current: PointInTime, selection: SelectionEvent) -> ChangePlan {
	if mode.is_staged() {
		return match (stage, selection) {
			(Stage::AwaitingDate, Some(picked)) => {
				let next = merge_date_part(current, picked);
				ChangePlan::new(
					ChangeOutcome::Advance,
					vec![ChangeEffect::SetValue(next), ChangeEffect::SetStage(Stage::AwaitingTime)],
				)
			}
			(Stage::AwaitingTime, Some(picked)) => {
				let merged = merge_time_part(current, picked);
				ChangePlan::new(
					ChangeOutcome::Complete,
					vec![ChangeEffect::SetValue(merged), ChangeEffect::Finalize(merged), ChangeEffect::Close],
				)
			}
			_ => ChangePlan::cancel(),
		};
	}

	match selection {
		Some(picked) => ChangePlan::new(
			ChangeOutcome::Commit,
			vec![ChangeEffect::SetValue(picked), ChangeEffect::Finalize(picked), ChangeEffect::Close],
		),
		None => ChangePlan::cancel(),
	}
}
