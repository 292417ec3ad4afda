//! Picker change engine: a pure decision table producing an ordered effect
//! plan, and the step that drives a host through that plan.

pub mod apply;
pub mod decision;
pub mod model;

pub use apply::apply_plan;
pub use decision::plan_change;
pub use model::{ChangeEffect, ChangeOutcome, ChangePlan};
