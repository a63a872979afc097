// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use chrono::{DateTime, Utc};

use crate::{GetType, Value};

pub trait IntoValue {
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::Utf8(self.to_string())
	}
}

impl IntoValue for Option<&str> {
	fn into_value(self) -> Value {
		match self {
			Some(v) => v.into_value(),
			None => Value::none(String::get_type()),
		}
	}
}

macro_rules! impl_into_value {
	($t:ty, $variant:ident) => {
		impl IntoValue for $t {
			fn into_value(self) -> Value {
				Value::$variant(self)
			}
		}

		impl IntoValue for Option<$t> {
			fn into_value(self) -> Value {
				match self {
					Some(v) => Value::$variant(v),
					None => Value::none(<$t>::get_type()),
				}
			}
		}

		impl From<$t> for Value {
			fn from(v: $t) -> Self {
				Value::$variant(v)
			}
		}
	};
}

impl_into_value!(DateTime<Utc>, Time);
impl_into_value!(f64, Float64);
impl_into_value!(f32, Float32);
impl_into_value!(String, Utf8);
impl_into_value!(bool, Boolean);
impl_into_value!(i8, Int8);
impl_into_value!(i16, Int16);
impl_into_value!(i32, Int32);
impl_into_value!(i64, Int64);
impl_into_value!(u8, Uint8);
impl_into_value!(u16, Uint16);
impl_into_value!(u32, Uint32);
impl_into_value!(u64, Uint64);
