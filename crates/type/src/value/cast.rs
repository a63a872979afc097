// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use chrono::{DateTime, Utc};

use crate::{Error, GetType, Value};

/// Decodes a [`Value`] into the native representation of its kind.
///
/// `T` accepts only a defined value of kind `T`. `Option<T>` additionally
/// accepts a missing value of kind `T` and yields `None` for it.
pub trait FromValue: Sized {
	fn from_value(value: Value) -> crate::Result<Self>;
}

macro_rules! impl_from_value {
	($t:ty, $variant:ident) => {
		impl FromValue for $t {
			fn from_value(value: Value) -> crate::Result<Self> {
				match value {
					Value::$variant(v) => Ok(v),
					other => Err(Error::type_mismatch(<$t>::get_type(), other.describe())),
				}
			}
		}

		impl FromValue for Option<$t> {
			fn from_value(value: Value) -> crate::Result<Self> {
				match value {
					Value::$variant(v) => Ok(Some(v)),
					Value::None {
						inner,
					} if inner == <$t>::get_type() => Ok(None),
					Value::None {
						inner,
					} => Err(Error::type_mismatch(<$t>::get_type().nullable(), inner.nullable())),
					other => Err(Error::type_mismatch(<$t>::get_type().nullable(), other.describe())),
				}
			}
		}
	};
}

impl_from_value!(DateTime<Utc>, Time);
impl_from_value!(f64, Float64);
impl_from_value!(f32, Float32);
impl_from_value!(String, Utf8);
impl_from_value!(bool, Boolean);
impl_from_value!(i8, Int8);
impl_from_value!(i16, Int16);
impl_from_value!(i32, Int32);
impl_from_value!(i64, Int64);
impl_from_value!(u8, Uint8);
impl_from_value!(u16, Uint16);
impl_from_value!(u32, Uint32);
impl_from_value!(u64, Uint64);

impl FromValue for Value {
	fn from_value(value: Value) -> crate::Result<Self> {
		Ok(value)
	}
}
