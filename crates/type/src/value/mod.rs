// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod cast;
pub mod container;
mod into;
pub mod is;
mod r#type;

pub use cast::FromValue;
pub use into::IntoValue;
pub use r#type::{GetType, NullableType, Type};

/// Date and time-of-day layout of a rendered instant. Fractional seconds
/// follow with trailing zeros trimmed, then ` +0000 UTC`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn fmt_time(value: &DateTime<Utc>, f: &mut Formatter<'_>) -> std::fmt::Result {
	write!(f, "{}", value.format(TIME_FORMAT))?;
	let nanos = value.timestamp_subsec_nanos();
	if nanos > 0 {
		write!(f, ".{}", format!("{nanos:09}").trim_end_matches('0'))?;
	}
	f.write_str(" +0000 UTC")
}

fn fmt_infinity(positive: bool, f: &mut Formatter<'_>) -> std::fmt::Result {
	f.write_str(if positive {
		"+Inf"
	} else {
		"-Inf"
	})
}

/// A single element read out of a column, represented as a native Rust type.
///
/// Equality is structural: two missing values of the same kind are equal, a
/// missing value never equals a defined one, and floats compare by IEEE rules
/// (so `NaN != NaN`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// A missing element of a nullable column of kind `inner`
	None {
		inner: Type,
	},
	/// An instant in time, UTC
	Time(DateTime<Utc>),
	/// An 8-byte floating point
	Float64(f64),
	/// A 4-byte floating point
	Float32(f32),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A boolean: true or false
	Boolean(bool),
	/// A 1-byte signed integer
	Int8(i8),
	/// A 2-byte signed integer
	Int16(i16),
	/// A 4-byte signed integer
	Int32(i32),
	/// An 8-byte signed integer
	Int64(i64),
	/// A 1-byte unsigned integer
	Uint8(u8),
	/// A 2-byte unsigned integer
	Uint16(u16),
	/// A 4-byte unsigned integer
	Uint32(u32),
	/// An 8-byte unsigned integer
	Uint64(u64),
}

impl Value {
	pub fn none(inner: Type) -> Self {
		Value::None {
			inner,
		}
	}

	pub fn time(v: impl Into<DateTime<Utc>>) -> Self {
		Value::Time(v.into())
	}

	pub fn float64(v: impl Into<f64>) -> Self {
		Value::Float64(v.into())
	}

	pub fn float32(v: impl Into<f32>) -> Self {
		Value::Float32(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Value::None { .. })
	}

	pub fn is_nan(&self) -> bool {
		match self {
			Value::Float64(v) => v.is_nan(),
			Value::Float32(v) => v.is_nan(),
			_ => false,
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::None {
				inner,
			} => *inner,
			Value::Time(_) => Type::Time,
			Value::Float64(_) => Type::Float64,
			Value::Float32(_) => Type::Float32,
			Value::Utf8(_) => Type::Utf8,
			Value::Boolean(_) => Type::Boolean,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Int32(_) => Type::Int32,
			Value::Int64(_) => Type::Int64,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
			Value::Uint32(_) => Type::Uint32,
			Value::Uint64(_) => Type::Uint64,
		}
	}

	/// How this value is named in type mismatch errors.
	pub fn describe(&self) -> String {
		match self {
			Value::None {
				..
			} => "null".to_string(),
			value => value.get_type().to_string(),
		}
	}

	/// Checked conversion into a native type; never coerces between kinds.
	pub fn cast<T: FromValue>(self) -> crate::Result<T> {
		T::from_value(self)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::None {
				..
			} => f.write_str("null"),
			Value::Time(value) => fmt_time(value, f),
			Value::Float64(value) if value.is_infinite() => fmt_infinity(value.is_sign_positive(), f),
			Value::Float32(value) if value.is_infinite() => fmt_infinity(value.is_sign_positive(), f),
			Value::Float64(value) => Display::fmt(value, f),
			Value::Float32(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Int16(value) => Display::fmt(value, f),
			Value::Int32(value) => Display::fmt(value, f),
			Value::Int64(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Uint16(value) => Display::fmt(value, f),
			Value::Uint32(value) => Display::fmt(value, f),
			Value::Uint64(value) => Display::fmt(value, f),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use chrono::TimeZone;

	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Value::none(Type::Int64).to_string(), "null");
		assert_eq!(Value::float64(1.0).to_string(), "1");
		assert_eq!(Value::float64(f64::NAN).to_string(), "NaN");
		assert_eq!(Value::float32(2.5).to_string(), "2.5");
		assert_eq!(Value::bool(false).to_string(), "false");
		assert_eq!(Value::Uint64(u64::MAX).to_string(), "18446744073709551615");
	}

	#[test]
	fn test_display_time() {
		let t = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
		assert_eq!(Value::time(t).to_string(), "2020-01-02 03:04:05 +0000 UTC");

		let t = t + chrono::Duration::milliseconds(500);
		assert_eq!(Value::time(t).to_string(), "2020-01-02 03:04:05.5 +0000 UTC");

		let t = t + chrono::Duration::nanoseconds(1_230);
		assert_eq!(Value::time(t).to_string(), "2020-01-02 03:04:05.50000123 +0000 UTC");
	}

	#[test]
	fn test_display_infinity() {
		assert_eq!(Value::float64(f64::INFINITY).to_string(), "+Inf");
		assert_eq!(Value::float32(f32::NEG_INFINITY).to_string(), "-Inf");
	}

	#[test]
	fn test_none_is_reflexive() {
		assert_eq!(Value::none(Type::Float64), Value::none(Type::Float64));
		assert_ne!(Value::none(Type::Float64), Value::none(Type::Float32));
		assert_ne!(Value::none(Type::Float64), Value::float64(0.0));
	}

	#[test]
	fn test_nan_is_not_none() {
		let nan = Value::float64(f64::NAN);
		assert!(nan.is_nan());
		assert!(!nan.is_none());
		assert_ne!(nan, Value::none(Type::Float64));
	}

	#[test]
	fn test_get_type_of_none_is_inner() {
		assert_eq!(Value::none(Type::Time).get_type(), Type::Time);
		assert_eq!(Value::none(Type::Time).describe(), "null");
		assert_eq!(Value::Int16(3).describe(), "int16");
	}
}
