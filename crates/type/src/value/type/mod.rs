// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// The element kind of a column. Nullability is a property of the column,
/// not of the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Type {
	/// An instant in time, UTC
	Time,
	/// An 8-byte floating point
	Float64,
	/// A 4-byte floating point
	Float32,
	/// A UTF-8 encoded text
	Utf8,
	/// A boolean: true or false
	Boolean,
	/// A 1-byte signed integer
	Int8,
	/// A 2-byte signed integer
	Int16,
	/// A 4-byte signed integer
	Int32,
	/// An 8-byte signed integer
	Int64,
	/// A 1-byte unsigned integer
	Uint8,
	/// A 2-byte unsigned integer
	Uint16,
	/// A 4-byte unsigned integer
	Uint32,
	/// An 8-byte unsigned integer
	Uint64,
}

impl Type {
	pub const ALL: [Type; 13] = [
		Type::Time,
		Type::Float64,
		Type::Float32,
		Type::Utf8,
		Type::Boolean,
		Type::Int8,
		Type::Int16,
		Type::Int32,
		Type::Int64,
		Type::Uint8,
		Type::Uint16,
		Type::Uint32,
		Type::Uint64,
	];

	pub fn is_number(&self) -> bool {
		self.is_float() || self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Type::Float32 | Type::Float64)
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int8 | Type::Int16 | Type::Int32 | Type::Int64)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint8 | Type::Uint16 | Type::Uint32 | Type::Uint64)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Time)
	}

	/// The kind as written for an element of a nullable column, e.g. `*float64`.
	pub fn nullable(&self) -> NullableType {
		NullableType(*self)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Time => f.write_str("time.Time"),
			Type::Float64 => f.write_str("float64"),
			Type::Float32 => f.write_str("float32"),
			Type::Utf8 => f.write_str("string"),
			Type::Boolean => f.write_str("bool"),
			Type::Int8 => f.write_str("int8"),
			Type::Int16 => f.write_str("int16"),
			Type::Int32 => f.write_str("int32"),
			Type::Int64 => f.write_str("int64"),
			Type::Uint8 => f.write_str("uint8"),
			Type::Uint16 => f.write_str("uint16"),
			Type::Uint32 => f.write_str("uint32"),
			Type::Uint64 => f.write_str("uint64"),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullableType(pub Type);

impl Display for NullableType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "*{}", self.0)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_display_names() {
		assert_eq!(Type::Time.to_string(), "time.Time");
		assert_eq!(Type::Time.nullable().to_string(), "*time.Time");
		assert_eq!(Type::Utf8.to_string(), "string");
		assert_eq!(Type::Boolean.to_string(), "bool");
		assert_eq!(Type::Uint16.to_string(), "uint16");
		assert_eq!(Type::Int64.nullable().to_string(), "*int64");
	}

	#[test]
	fn test_families() {
		let numbers: Vec<Type> = Type::ALL.into_iter().filter(Type::is_number).collect();
		assert_eq!(numbers.len(), 10);
		assert!(!Type::Time.is_number());
		assert!(Type::Time.is_temporal());
		assert!(Type::Float32.is_float());
		assert!(!Type::Uint8.is_signed_integer());
	}
}
