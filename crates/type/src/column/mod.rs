// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod factory;
mod filter;
mod push;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
	Error, Result, Type, Value,
	value::container::{BoolContainer, NumberContainer, TemporalContainer, Utf8Container},
};

/// The storage of one column: a closed set of typed containers.
///
/// The variant fixes the element kind for the lifetime of the column. Whether
/// the column accepts missing values is decided by the container, see
/// [`ColumnData::is_nullable`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Time(TemporalContainer<DateTime<Utc>>),
	Float64(NumberContainer<f64>),
	Float32(NumberContainer<f32>),
	Utf8(Utf8Container),
	Boolean(BoolContainer),
	Int8(NumberContainer<i8>),
	Int16(NumberContainer<i16>),
	Int32(NumberContainer<i32>),
	Int64(NumberContainer<i64>),
	Uint8(NumberContainer<u8>),
	Uint16(NumberContainer<u16>),
	Uint32(NumberContainer<u32>),
	Uint64(NumberContainer<u64>),
}

macro_rules! with_container {
	($data:expr, $container:ident => $body:expr) => {
		match $data {
			ColumnData::Time($container) => $body,
			ColumnData::Float64($container) => $body,
			ColumnData::Float32($container) => $body,
			ColumnData::Utf8($container) => $body,
			ColumnData::Boolean($container) => $body,
			ColumnData::Int8($container) => $body,
			ColumnData::Int16($container) => $body,
			ColumnData::Int32($container) => $body,
			ColumnData::Int64($container) => $body,
			ColumnData::Uint8($container) => $body,
			ColumnData::Uint16($container) => $body,
			ColumnData::Uint32($container) => $body,
			ColumnData::Uint64($container) => $body,
		}
	};
}

pub(crate) use with_container;

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Time(_) => Type::Time,
			ColumnData::Float64(_) => Type::Float64,
			ColumnData::Float32(_) => Type::Float32,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Boolean(_) => Type::Boolean,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Int32(_) => Type::Int32,
			ColumnData::Int64(_) => Type::Int64,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Uint16(_) => Type::Uint16,
			ColumnData::Uint32(_) => Type::Uint32,
			ColumnData::Uint64(_) => Type::Uint64,
		}
	}

	pub fn len(&self) -> usize {
		with_container!(self, c => c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_nullable(&self) -> bool {
		with_container!(self, c => c.is_nullable())
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		with_container!(self, c => c.is_defined(idx))
	}

	/// The column written as a slice type: `[]float64`, or `[]*float64` when nullable.
	pub fn type_name(&self) -> String {
		if self.is_nullable() {
			format!("[]{}", self.get_type().nullable())
		} else {
			format!("[]{}", self.get_type())
		}
	}

	/// Reads element `index`. A missing element of a nullable column comes back
	/// as [`Value::None`] carrying the column's kind.
	pub fn get(&self, index: usize) -> Result<Value> {
		if index >= self.len() {
			return Err(Error::row_out_of_range(index, self.len()));
		}
		Ok(with_container!(self, c => c.get_value(index)))
	}

	pub fn as_string(&self, index: usize) -> String {
		with_container!(self, c => c.as_string(index))
	}
}
