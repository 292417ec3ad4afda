//! Drives a host through a change plan.

use super::model::{ChangeEffect, ChangePlan};
use crate::host::PickerHost;

/// Invokes the host callback for each effect, in plan order.
pub fn apply_plan<H: PickerHost + ?Sized>(plan: &ChangePlan, host: &mut H) {
	for effect in &plan.effects {
		tracing::debug!(?effect, "Applying picker effect");
		match *effect {
			ChangeEffect::SetValue(value) => host.set_value(value),
			ChangeEffect::SetStage(stage) => host.set_stage(stage),
			ChangeEffect::Finalize(value) => host.on_finalized(value),
			ChangeEffect::Close => host.close(),
		}
	}
}
