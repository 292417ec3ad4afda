//! Change-sequence controller for date/time pickers.
//!
//! A picker reports one [`SelectionEvent`] at a time. [`handle_change`] decides,
//! from the session [`Mode`] and current [`Stage`], whether to apply the
//! calendar half and advance, apply the clock half and finalize, commit a
//! single-step pick, or treat the event as a cancel. The controller keeps no
//! state of its own: every decision is driven through a [`PickerHost`].

/// TOML-backed picker configuration.
pub mod config;
/// Stateless entry point tying decision and application together.
pub mod controller;
/// Pure decision table and effect application.
pub mod engine;
/// Error types for configuration loading.
pub mod error;
/// Host callback boundary.
pub mod host;
/// Reference host that owns value, stage and open state.
pub mod session;

mod invariants;

pub use chronopick_primitives::{Mode, PointInTime, SelectionEvent, Stage};
pub use config::PickerConfig;
pub use controller::handle_change;
pub use engine::{ChangeEffect, ChangeOutcome, ChangePlan, apply_plan, plan_change};
pub use error::{ConfigError, Result};
pub use host::{FnPickerHost, PickerHost};
pub use session::PickerSession;
