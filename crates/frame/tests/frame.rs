// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Frame construction, inspection and warnings.

use chrono::Utc;
use pretty_assertions::assert_eq;
use tframe::{ColumnData, Field, FieldConfig, Frame, FrameMeta, Labels, Type, Value};

#[test]
fn test_frame() {
	let now = Utc::now();
	let frame = Frame::new(
		"http_requests_total",
		[
			Field::new("timestamp", vec![now, now, now])
				.with_config(FieldConfig::default().with_title("A time Column.")),
			Field::new("value", vec![1.0, 2.0, 3.0]).with_labels([("service", "auth")]),
			Field::new("category", vec!["foo", "bar", "test"]).with_labels([("service", "auth")]),
			Field::new("valid", vec![true, false, true]).with_labels([("service", "auth")]),
		],
	);

	assert_eq!(frame.rows().unwrap(), 3);
	assert_eq!(frame.fields.len(), 4);
	assert_eq!(frame[0].display_name(), "A time Column.");
	assert_eq!(frame.type_indices(&[Type::Time]), vec![0]);
	assert_eq!(frame.field_by_name("category").unwrap().at(2).unwrap(), Value::utf8("test"));
}

#[test]
fn test_frame_warnings() {
	let mut frame = Frame::new("warning_test", []);
	frame.append_warning("details1", "message1");
	frame.append_warning("details2", "message2");

	assert_eq!(frame.warnings.len(), 2);
	assert_eq!(frame.warnings[0].message, "message1");
	assert_eq!(frame.warnings[1].details, "details2");
}

#[test]
fn test_new_does_not_alias_fields() {
	let field = Field::new("v", vec![1i8, 2]);
	let mut frame = Frame::new("f", [field.clone()]);
	frame.fields[0].push(Value::Int8(3)).unwrap();

	assert_eq!(field.len(), 2);
	assert_eq!(frame.rows().unwrap(), 3);
}

#[test]
fn test_labels_parse_display() {
	let field = Field::new("v", vec![1u8]).with_labels(Labels::parse("{service=auth, code=200}").unwrap());
	assert_eq!(field.labels.to_string(), "code=200, service=auth");
}

#[test]
fn test_append_rows_then_filter() {
	let mut frame = Frame::new("build", [Field::new("n", Vec::<i64>::new()), Field::new("s", Vec::<Option<&str>>::new())]);
	for i in 0..4i64 {
		let s = if i % 2 == 0 {
			Value::utf8(format!("row{i}"))
		} else {
			Value::none(Type::Utf8)
		};
		frame.append_row([Value::Int64(i), s]).unwrap();
	}

	let filtered = frame.filter_rows_by_field(1, |v| Ok::<_, tframe::Error>(!v.is_none())).unwrap();
	let table = filtered.string_table(10, 10).unwrap();

	assert!(table.contains("| row2 "), "{table}");
	assert!(!table.contains("null"));
}

#[test]
fn test_serde_json() {
	let frame = Frame::new("f", [Field::new("v", vec![Some(1i32), None]).with_labels([("a", "b")])]).with_meta(
		FrameMeta {
			executed_query_string: Some("q".to_string()),
			custom: Some(serde_json::json!({ "source": "test" })),
		},
	);

	let json = serde_json::to_string(&frame).unwrap();
	let recovered: Frame = serde_json::from_str(&json).unwrap();
	assert_eq!(recovered, frame);
}

#[test]
fn test_serde_json_non_finite() {
	let frame = Frame::new(
		"f",
		[
			Field::new("f64", vec![0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY]),
			Field::new("f32", vec![Some(f32::NAN), None, Some(-0.25), Some(f32::INFINITY)]),
		],
	);

	let json = serde_json::to_string(&frame).unwrap();
	assert!(json.contains(r#"[0.5,"NaN","+Inf","-Inf"]"#), "{json}");

	let recovered: Frame = serde_json::from_str(&json).unwrap();
	assert_eq!(recovered, frame);
	assert!(recovered[0].at(1).unwrap().is_nan());
}

#[test]
fn test_serde_json_rejects_inconsistent_mask() {
	let err = serde_json::from_str::<ColumnData>(r#"{"Int64":{"data":[1,2,3],"bitvec":{"bits":[7],"len":1}}}"#)
		.unwrap_err();
	assert!(err.to_string().contains("validity mask has 1 bits for 3 elements"), "{err}");

	let json = r#"{"name":"f","fields":[{"name":"v","labels":{},"config":{},"data":{"Int64":{"data":[1,2,3],"bitvec":{"bits":[7],"len":1}}}}]}"#;
	assert!(serde_json::from_str::<Frame>(json).is_err());
}
