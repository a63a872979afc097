// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use chrono::{DateTime, Utc};

use crate::{
	ColumnData, Type,
	value::container::{BoolContainer, NumberContainer, TemporalContainer, Utf8Container},
};

impl ColumnData {
	/// An empty column of kind `target`.
	pub fn with_capacity(target: Type, nullable: bool, capacity: usize) -> Self {
		match target {
			Type::Time => ColumnData::Time(TemporalContainer::with_capacity(capacity, nullable)),
			Type::Float64 => ColumnData::Float64(NumberContainer::with_capacity(capacity, nullable)),
			Type::Float32 => ColumnData::Float32(NumberContainer::with_capacity(capacity, nullable)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity, nullable)),
			Type::Boolean => ColumnData::Boolean(BoolContainer::with_capacity(capacity, nullable)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity, nullable)),
			Type::Int16 => ColumnData::Int16(NumberContainer::with_capacity(capacity, nullable)),
			Type::Int32 => ColumnData::Int32(NumberContainer::with_capacity(capacity, nullable)),
			Type::Int64 => ColumnData::Int64(NumberContainer::with_capacity(capacity, nullable)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(capacity, nullable)),
			Type::Uint16 => ColumnData::Uint16(NumberContainer::with_capacity(capacity, nullable)),
			Type::Uint32 => ColumnData::Uint32(NumberContainer::with_capacity(capacity, nullable)),
			Type::Uint64 => ColumnData::Uint64(NumberContainer::with_capacity(capacity, nullable)),
		}
	}

	/// An empty column with the same kind and nullability as `self`.
	pub fn empty_like(&self) -> Self {
		Self::with_capacity(self.get_type(), self.is_nullable(), 0)
	}
}

macro_rules! impl_from_vec {
	($t:ty, $variant:ident, $container:ident) => {
		impl From<Vec<$t>> for ColumnData {
			fn from(data: Vec<$t>) -> Self {
				ColumnData::$variant($container::new(data))
			}
		}

		impl From<Vec<Option<$t>>> for ColumnData {
			fn from(data: Vec<Option<$t>>) -> Self {
				ColumnData::$variant($container::nullable(data))
			}
		}
	};
}

impl_from_vec!(DateTime<Utc>, Time, TemporalContainer);
impl_from_vec!(f64, Float64, NumberContainer);
impl_from_vec!(f32, Float32, NumberContainer);
impl_from_vec!(String, Utf8, Utf8Container);
impl_from_vec!(bool, Boolean, BoolContainer);
impl_from_vec!(i8, Int8, NumberContainer);
impl_from_vec!(i16, Int16, NumberContainer);
impl_from_vec!(i32, Int32, NumberContainer);
impl_from_vec!(i64, Int64, NumberContainer);
impl_from_vec!(u8, Uint8, NumberContainer);
impl_from_vec!(u16, Uint16, NumberContainer);
impl_from_vec!(u32, Uint32, NumberContainer);
impl_from_vec!(u64, Uint64, NumberContainer);

impl From<Vec<&str>> for ColumnData {
	fn from(data: Vec<&str>) -> Self {
		ColumnData::Utf8(Utf8Container::new(data.into_iter().map(str::to_string).collect()))
	}
}

impl From<Vec<Option<&str>>> for ColumnData {
	fn from(data: Vec<Option<&str>>) -> Self {
		ColumnData::Utf8(Utf8Container::nullable(data.into_iter().map(|v| v.map(str::to_string)).collect()))
	}
}
