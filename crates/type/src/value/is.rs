// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use chrono::{DateTime, Utc};
use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{DeserializeOwned, Error as _, Unexpected},
};

use crate::{IntoValue, value::r#type::GetType};

pub trait IsNumber:
	Display + Copy + Debug + PartialEq + PartialOrd + GetType + IntoValue + Default + Serialize + DeserializeOwned
{
	/// Element equality for column comparison. Floats treat NaN as equal to NaN.
	fn same(&self, other: &Self) -> bool {
		self == other
	}

	fn serialize_number<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.serialize(serializer)
	}

	fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Self::deserialize(deserializer)
	}
}

pub trait IsTemporal: Clone + Debug + PartialEq + PartialOrd + GetType + IntoValue + Default {}

#[derive(Deserialize)]
#[serde(untagged)]
enum FloatRepr<F> {
	Number(F),
	Text(String),
}

// Non-finite floats have no JSON number form; they travel as "NaN", "+Inf" and "-Inf".
macro_rules! impl_is_float {
	($t:ty) => {
		impl IsNumber for $t {
			fn same(&self, other: &Self) -> bool {
				self == other || (self.is_nan() && other.is_nan())
			}

			fn serialize_number<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				if self.is_nan() {
					serializer.serialize_str("NaN")
				} else if self.is_infinite() {
					serializer.serialize_str(if self.is_sign_positive() {
						"+Inf"
					} else {
						"-Inf"
					})
				} else {
					self.serialize(serializer)
				}
			}

			fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
				match FloatRepr::<$t>::deserialize(deserializer)? {
					FloatRepr::Number(v) => Ok(v),
					FloatRepr::Text(text) => match text.as_str() {
						"NaN" => Ok(<$t>::NAN),
						"+Inf" => Ok(<$t>::INFINITY),
						"-Inf" => Ok(<$t>::NEG_INFINITY),
						other => Err(D::Error::invalid_value(Unexpected::Str(other), &"a number, NaN, +Inf or -Inf")),
					},
				}
			}
		}
	};
}

impl_is_float!(f32);
impl_is_float!(f64);

impl IsNumber for i8 {}
impl IsNumber for i16 {}
impl IsNumber for i32 {}
impl IsNumber for i64 {}

impl IsNumber for u8 {}
impl IsNumber for u16 {}
impl IsNumber for u32 {}
impl IsNumber for u64 {}

impl IsTemporal for DateTime<Utc> {}
