use chronopick_primitives::{Mode, PointInTime, SelectionEvent, Stage};

use crate::engine::{apply_plan, plan_change};
use crate::host::PickerHost;

/// Handles one selection event from a picker.
///
/// Stateless: `mode`, `stage` and `current` come from the host on every call,
/// and all effects go back through `host`. Each call either advances a
/// date-and-time session to its time step or closes the picker.
pub fn handle_change<H: PickerHost + ?Sized>(
	mode: Mode,
	stage: Stage,
	current: PointInTime,
	selection: SelectionEvent,
	host: &mut H,
) {
	let plan = plan_change(mode, stage, current, selection);
	tracing::trace!(
		%mode,
		%stage,
		%current,
		selection = ?selection.map(|value| value.to_string()),
		outcome = ?plan.outcome,
		"Picker change"
	);
	apply_plan(&plan, host);
}
