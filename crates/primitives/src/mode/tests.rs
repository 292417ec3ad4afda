use rstest::rstest;

use super::{Mode, Stage};

#[rstest]
#[case::date_only("date-only", Mode::DateOnly)]
#[case::date_alias("date", Mode::DateOnly)]
#[case::time_only("time-only", Mode::TimeOnly)]
#[case::time_alias("TIME", Mode::TimeOnly)]
#[case::date_and_time("date-and-time", Mode::DateAndTime)]
#[case::datetime_alias("datetime", Mode::DateAndTime)]
fn mode_parses(#[case] input: &str, #[case] expected: Mode) {
	assert_eq!(input.parse::<Mode>().unwrap(), expected);
}

#[test]
fn mode_display_uses_kebab_names() {
	assert_eq!(Mode::DateOnly.to_string(), "date-only");
	assert_eq!(Mode::TimeOnly.to_string(), "time-only");
	assert_eq!(Mode::DateAndTime.to_string(), "date-and-time");
}

#[test]
fn unknown_mode_is_rejected() {
	assert!("week".parse::<Mode>().is_err());
}

#[test]
fn only_staged_mode_starts_awaiting_date() {
	assert_eq!(Mode::DateAndTime.initial_stage(), Stage::AwaitingDate);
	assert_eq!(Mode::DateOnly.initial_stage(), Stage::Idle);
	assert_eq!(Mode::TimeOnly.initial_stage(), Stage::Idle);
	assert!(Mode::DateAndTime.is_staged());
	assert!(!Mode::DateOnly.is_staged());
}

#[test]
fn stages_only_move_forward() {
	assert!(Stage::AwaitingDate.can_advance_to(Stage::AwaitingTime));
	assert!(Stage::AwaitingTime.can_advance_to(Stage::Idle));
	assert!(Stage::AwaitingTime.can_advance_to(Stage::AwaitingTime));
	assert!(!Stage::AwaitingTime.can_advance_to(Stage::AwaitingDate));
	assert!(!Stage::Idle.can_advance_to(Stage::AwaitingDate));
}
