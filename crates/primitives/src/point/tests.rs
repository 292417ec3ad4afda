use rstest::rstest;

use super::{ParseError, PointInTime};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> PointInTime {
	PointInTime::from_ymd_hms(y, mo, d, h, mi, s).unwrap()
}

#[rstest]
#[case::full("2024-06-15T14:30:05", at(2024, 6, 15, 14, 30, 5))]
#[case::no_seconds("2024-06-15T14:30", at(2024, 6, 15, 14, 30, 0))]
#[case::space_separator("2024-06-15 14:30:05", at(2024, 6, 15, 14, 30, 5))]
#[case::date_only("2024-03-03", at(2024, 3, 3, 0, 0, 0))]
#[case::padded("  2024-03-03  ", at(2024, 3, 3, 0, 0, 0))]
fn from_str_accepts(#[case] input: &str, #[case] expected: PointInTime) {
	assert_eq!(input.parse::<PointInTime>(), Ok(expected));
}

#[test]
fn from_str_keeps_fraction() {
	let value: PointInTime = "2024-06-15T14:30:05.125".parse().unwrap();
	assert_eq!(value.clock(), (14, 30, 5, 125_000_000));
}

#[rstest]
#[case::empty("   ", ParseError::Empty)]
#[case::time_only("14:30", ParseError::MissingDate { input: "14:30".into() })]
#[case::garbage("next tuesday", ParseError::Unrecognized { input: "next tuesday".into() })]
#[case::bad_day("2024-02-30", ParseError::Unrecognized { input: "2024-02-30".into() })]
fn from_str_rejects(#[case] input: &str, #[case] expected: ParseError) {
	assert_eq!(input.parse::<PointInTime>(), Err(expected));
}

#[rstest]
#[case::full("2025-12-24T18:00:00", at(2025, 12, 24, 18, 0, 0))]
#[case::date_keeps_anchor_clock("2024-06-15", at(2024, 6, 15, 9, 45, 0))]
#[case::time_keeps_anchor_calendar("14:30", at(2024, 1, 1, 14, 30, 0))]
#[case::time_with_seconds("14:30:59", at(2024, 1, 1, 14, 30, 59))]
fn parse_against_fills_missing_half(#[case] input: &str, #[case] expected: PointInTime) {
	let anchor = at(2024, 1, 1, 9, 45, 0);
	assert_eq!(PointInTime::parse_against(input, anchor), Ok(expected));
}

#[test]
fn parse_against_reports_unrecognized_input() {
	let anchor = at(2024, 1, 1, 0, 0, 0);
	assert!(matches!(
		PointInTime::parse_against("25:99", anchor),
		Err(ParseError::Unrecognized { .. })
	));
}

#[test]
fn display_is_iso_with_t_separator() {
	assert_eq!(at(2024, 6, 15, 14, 30, 0).to_string(), "2024-06-15T14:30:00");
	let frac: PointInTime = "2024-06-15T14:30:00.5".parse().unwrap();
	assert_eq!(frac.to_string(), "2024-06-15T14:30:00.500");
}

#[test]
fn display_output_parses_back() {
	let value = at(1999, 12, 31, 23, 59, 59);
	assert_eq!(value.to_string().parse::<PointInTime>(), Ok(value));
}

#[test]
fn field_accessors_split_calendar_and_clock() {
	let value = at(2024, 6, 15, 14, 30, 5);
	assert_eq!(value.calendar(), (2024, 6, 15));
	assert_eq!(value.clock(), (14, 30, 5, 0));
}

#[test]
fn out_of_range_fields_are_rejected() {
	assert!(PointInTime::from_ymd_hms(2024, 13, 1, 0, 0, 0).is_none());
	assert!(PointInTime::from_ymd_hms(2024, 1, 1, 24, 0, 0).is_none());
}
