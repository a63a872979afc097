// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::with_container;
use crate::{ColumnData, Error, Result, Value};

impl ColumnData {
	/// Appends `value`, rejecting any value whose kind differs from the
	/// column's, and missing values on a non-nullable column.
	pub fn push(&mut self, value: Value) -> Result<()> {
		match (self, value) {
			(column, Value::None {
				inner,
			}) => {
				if inner != column.get_type() {
					return Err(Error::type_mismatch(column.get_type(), inner.nullable()));
				}
				return column.push_none();
			}
			(ColumnData::Time(c), Value::Time(v)) => c.push(v),
			(ColumnData::Float64(c), Value::Float64(v)) => c.push(v),
			(ColumnData::Float32(c), Value::Float32(v)) => c.push(v),
			(ColumnData::Utf8(c), Value::Utf8(v)) => c.push(v),
			(ColumnData::Boolean(c), Value::Boolean(v)) => c.push(v),
			(ColumnData::Int8(c), Value::Int8(v)) => c.push(v),
			(ColumnData::Int16(c), Value::Int16(v)) => c.push(v),
			(ColumnData::Int32(c), Value::Int32(v)) => c.push(v),
			(ColumnData::Int64(c), Value::Int64(v)) => c.push(v),
			(ColumnData::Uint8(c), Value::Uint8(v)) => c.push(v),
			(ColumnData::Uint16(c), Value::Uint16(v)) => c.push(v),
			(ColumnData::Uint32(c), Value::Uint32(v)) => c.push(v),
			(ColumnData::Uint64(c), Value::Uint64(v)) => c.push(v),
			(column, value) => return Err(Error::type_mismatch(column.get_type(), value.describe())),
		}
		Ok(())
	}

	/// Whether [`ColumnData::push`] would accept `value`, without mutating.
	pub fn check(&self, value: &Value) -> Result<()> {
		match value {
			Value::None {
				inner,
			} if *inner != self.get_type() => Err(Error::type_mismatch(self.get_type(), inner.nullable())),
			Value::None {
				..
			} if !self.is_nullable() => Err(Error::type_mismatch(self.get_type(), "null")),
			Value::None {
				..
			} => Ok(()),
			value if value.get_type() != self.get_type() => {
				Err(Error::type_mismatch(self.get_type(), value.describe()))
			}
			_ => Ok(()),
		}
	}

	pub fn push_none(&mut self) -> Result<()> {
		with_container!(self, c => c.push_none())
	}

	/// Overwrites element `index` under the same kind rules as [`ColumnData::push`].
	pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
		match (self, value) {
			(column, Value::None {
				inner,
			}) => {
				if inner != column.get_type() {
					return Err(Error::type_mismatch(column.get_type(), inner.nullable()));
				}
				with_container!(column, c => c.set(index, None))
			}
			(ColumnData::Time(c), Value::Time(v)) => c.set(index, Some(v)),
			(ColumnData::Float64(c), Value::Float64(v)) => c.set(index, Some(v)),
			(ColumnData::Float32(c), Value::Float32(v)) => c.set(index, Some(v)),
			(ColumnData::Utf8(c), Value::Utf8(v)) => c.set(index, Some(v)),
			(ColumnData::Boolean(c), Value::Boolean(v)) => c.set(index, Some(v)),
			(ColumnData::Int8(c), Value::Int8(v)) => c.set(index, Some(v)),
			(ColumnData::Int16(c), Value::Int16(v)) => c.set(index, Some(v)),
			(ColumnData::Int32(c), Value::Int32(v)) => c.set(index, Some(v)),
			(ColumnData::Int64(c), Value::Int64(v)) => c.set(index, Some(v)),
			(ColumnData::Uint8(c), Value::Uint8(v)) => c.set(index, Some(v)),
			(ColumnData::Uint16(c), Value::Uint16(v)) => c.set(index, Some(v)),
			(ColumnData::Uint32(c), Value::Uint32(v)) => c.set(index, Some(v)),
			(ColumnData::Uint64(c), Value::Uint64(v)) => c.set(index, Some(v)),
			(column, value) => Err(Error::type_mismatch(column.get_type(), value.describe())),
		}
	}
}
