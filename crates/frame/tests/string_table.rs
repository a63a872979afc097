// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Exact layouts produced by `Frame::string_table` and `Display for Frame`.

use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tframe::{Error, Field, Frame};

fn bool_frame() -> Frame {
	Frame::new(
		"sTest",
		[Field::new("", vec![false; 3]), Field::new("", vec![false; 3]), Field::new("", vec![false; 3])],
	)
}

// ============================================================================
// 1. Bounds
// ============================================================================

#[test]
fn test_at_max_width_and_length() {
	let expected = "\
Name: sTest
Dimensions: 3 Fields by 3 Rows
+--------------+--------------+--------------+
| Name:        | Name:        | Name:        |
| Labels:      | Labels:      | Labels:      |
| Type: []bool | Type: []bool | Type: []bool |
+--------------+--------------+--------------+
| false        | false        | false        |
| false        | false        | false        |
| false        | false        | false        |
+--------------+--------------+--------------+
";
	assert_eq!(bool_frame().string_table(3, 3).unwrap(), expected);
}

#[test]
fn test_above_max_width_and_length() {
	let expected = "\
Name: sTest
Dimensions: 3 Fields by 3 Rows
+--------------+----------------+
| Name:        | ...+2 field... |
| Labels:      |                |
| Type: []bool |                |
+--------------+----------------+
| false        | ...            |
| ...          | ...            |
+--------------+----------------+
";
	assert_eq!(bool_frame().string_table(2, 2).unwrap(), expected);
}

#[test]
fn test_no_length() {
	let expected = "\
Name: sTest
Dimensions: 3 Fields by 3 Rows
+--------------+--------------+--------------+
| Name:        | Name:        | Name:        |
| Labels:      | Labels:      | Labels:      |
| Type: []bool | Type: []bool | Type: []bool |
+--------------+--------------+--------------+
+--------------+--------------+--------------+
";
	assert_eq!(bool_frame().string_table(10, 0).unwrap(), expected);
}

#[test]
fn test_five_fields_fold_into_one_summary_column() {
	let fields = (0..5).map(|i| Field::new(format!("f{i}"), vec![i as i64]));
	let table = Frame::new("wide", fields).string_table(2, 10).unwrap();

	let header = table.lines().nth(3).unwrap();
	assert_eq!(header, "| Name: f0      | ...+4 field... |");
	assert!(!table.contains("Name: f1"));
	assert_eq!(table.lines().nth(7).unwrap(), "| 0             | ...            |");
}

#[test]
fn test_ten_rows_truncate_to_two_and_ellipsis() {
	let frame = Frame::new("long", [Field::new("n", (0..10u32).collect::<Vec<_>>())]);
	let table = frame.string_table(10, 3).unwrap();

	let rows: Vec<&str> = table.lines().skip(7).collect();
	assert_eq!(
		rows,
		vec!["| 0              |", "| 1              |", "| ...            |", "+----------------+"]
	);
}

// ============================================================================
// 2. Cells
// ============================================================================

#[test]
fn test_time_nan_and_null() {
	let t = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
	let frame = Frame::new(
		"Frame Name",
		[
			Field::new("Time", vec![t, t + Duration::minutes(1)]),
			Field::new("Temp", vec![1.0, f64::NAN]).with_labels([("place", "Ecuador")]),
			Field::new("Count", vec![Some(12i64), None]).with_labels([("place", "Ecuador")]),
		],
	);

	let expected = "\
Name: Frame Name
Dimensions: 3 Fields by 2 Rows
+-------------------------------+-----------------------+-----------------------+
| Name: Time                    | Name: Temp            | Name: Count           |
| Labels:                       | Labels: place=Ecuador | Labels: place=Ecuador |
| Type: []time.Time             | Type: []float64       | Type: []*int64        |
+-------------------------------+-----------------------+-----------------------+
| 2020-01-02 03:04:05 +0000 UTC | 1                     | 12                    |
| 2020-01-02 03:05:05 +0000 UTC | NaN                   | null                  |
+-------------------------------+-----------------------+-----------------------+
";
	assert_eq!(frame.to_string(), expected);
	assert_eq!(frame.string_table(usize::MAX, usize::MAX).unwrap(), expected);
}

#[test]
fn test_nullable_float_renders_null_apart_from_nan() {
	let frame = Frame::new("f", [Field::new("v", vec![Some(1.0), Some(f64::NAN), None])]);
	let table = frame.string_table(1, 10).unwrap();
	let cells: Vec<&str> = table.lines().skip(7).take(3).map(|l| l.trim_matches(['|', ' '])).collect();
	assert_eq!(cells, vec!["1", "NaN", "null"]);
	assert!(table.contains("Type: []*float64"));
}

// ============================================================================
// 3. Errors
// ============================================================================

#[test]
fn test_mismatched_fields_fail() {
	let frame = Frame::new("bad", [Field::new("a", vec![1u8, 2, 3]), Field::new("b", vec![1u8])]);
	let err = frame.string_table(10, 10).unwrap_err();
	assert!(matches!(
		err,
		Error::Schema {
			field: 1,
			expected: 3,
			actual: 1,
			..
		}
	));
}

#[test]
fn test_nullable_time_and_infinity() {
	let t = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap() + Duration::milliseconds(250);
	let frame = Frame::new(
		"f",
		[Field::new("t", vec![Some(t), None]), Field::new("v", vec![f64::INFINITY, f64::NEG_INFINITY])],
	);
	let table = frame.string_table(10, 10).unwrap();

	assert!(table.contains("| Type: []*time.Time "), "{table}");
	assert!(table.contains("| 2020-01-02 03:04:05.25 +0000 UTC | +Inf "), "{table}");
	assert!(table.contains("| null                             | -Inf "), "{table}");
}
