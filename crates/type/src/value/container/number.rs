// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::check_validity;
use crate::{
	Error, Result,
	util::BitVec,
	value::{IntoValue, Value, is::IsNumber},
};

/// Numbers of one width, optionally paired with a validity mask.
///
/// Without a mask every element is defined and the container can never hold
/// a missing value. Undefined slots keep `T::default()` in `data`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", try_from = "NumberContainerRaw<T>")]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	#[serde(serialize_with = "serialize_numbers")]
	data: Vec<T>,
	bitvec: Option<BitVec>,
}

#[derive(Deserialize)]
#[serde(bound = "")]
struct NumberContainerRaw<T>
where
	T: IsNumber,
{
	#[serde(deserialize_with = "deserialize_numbers")]
	data: Vec<T>,
	bitvec: Option<BitVec>,
}

impl<T: IsNumber> TryFrom<NumberContainerRaw<T>> for NumberContainer<T> {
	type Error = Error;

	fn try_from(raw: NumberContainerRaw<T>) -> Result<Self> {
		check_validity(raw.data.len(), raw.bitvec.as_ref())?;
		Ok(Self {
			data: raw.data,
			bitvec: raw.bitvec,
		})
	}
}

fn serialize_numbers<T: IsNumber, S: Serializer>(data: &[T], serializer: S) -> std::result::Result<S::Ok, S::Error> {
	struct Encoded<'a, T>(&'a T);

	impl<T: IsNumber> Serialize for Encoded<'_, T> {
		fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
			self.0.serialize_number(serializer)
		}
	}

	serializer.collect_seq(data.iter().map(Encoded))
}

fn deserialize_numbers<'de, T: IsNumber, D: Deserializer<'de>>(
	deserializer: D,
) -> std::result::Result<Vec<T>, D::Error> {
	struct Decoded<T>(T);

	impl<'de, T: IsNumber> Deserialize<'de> for Decoded<T> {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
			T::deserialize_number(deserializer).map(Decoded)
		}
	}

	let decoded = Vec::<Decoded<T>>::deserialize(deserializer)?;
	Ok(decoded.into_iter().map(|d| d.0).collect())
}

/// Same validity and elements; NaN equals NaN so a column always equals its copy.
impl<T: IsNumber> PartialEq for NumberContainer<T> {
	fn eq(&self, other: &Self) -> bool {
		self.bitvec == other.bitvec
			&& self.data.len() == other.data.len()
			&& self.data.iter().zip(&other.data).all(|(a, b)| a.same(b))
	}
}

impl<T> NumberContainer<T>
where
	T: IsNumber,
{
	pub fn new(data: Vec<T>) -> Self {
		Self {
			data,
			bitvec: None,
		}
	}

	pub fn nullable(data: Vec<Option<T>>) -> Self {
		let bitvec = data.iter().map(Option::is_some).collect();
		Self {
			data: data.into_iter().map(Option::unwrap_or_default).collect(),
			bitvec: Some(bitvec),
		}
	}

	pub fn with_capacity(capacity: usize, nullable: bool) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			bitvec: nullable.then(|| BitVec::with_capacity(capacity)),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn is_nullable(&self) -> bool {
		self.bitvec.is_some()
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		if let Some(bitvec) = &mut self.bitvec {
			bitvec.push(true);
		}
	}

	pub fn push_none(&mut self) -> Result<()> {
		let Some(bitvec) = &mut self.bitvec else {
			return Err(Error::type_mismatch(T::get_type(), "null"));
		};
		bitvec.push(false);
		self.data.push(T::default());
		Ok(())
	}

	pub fn set(&mut self, index: usize, value: Option<T>) -> Result<()> {
		if index >= self.len() {
			return Err(Error::row_out_of_range(index, self.len()));
		}
		match (value, &mut self.bitvec) {
			(Some(v), bitvec) => {
				self.data[index] = v;
				if let Some(bitvec) = bitvec {
					bitvec.set(index, true);
				}
			}
			(None, Some(bitvec)) => {
				self.data[index] = T::default();
				bitvec.set(index, false);
			}
			(None, None) => return Err(Error::type_mismatch(T::get_type(), "null")),
		}
		Ok(())
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.as_ref().is_none_or(|bv| bv.get(idx))
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if self.is_defined(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn data(&self) -> &[T] {
		&self.data
	}

	pub fn as_string(&self, index: usize) -> String {
		self.get_value(index).to_string()
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self.get(index) {
			Some(v) => v.into_value(),
			None => Value::none(T::get_type()),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		(0..self.len()).map(|i| self.get(i).copied())
	}

	pub fn filter(&mut self, mask: &BitVec) {
		let mut data = Vec::with_capacity(mask.count_ones());
		let mut bitvec = self.bitvec.as_ref().map(|_| BitVec::with_capacity(mask.count_ones()));

		for (i, keep) in mask.iter().enumerate() {
			if keep && i < self.len() {
				data.push(self.data[i]);
				if let Some(bitvec) = &mut bitvec {
					bitvec.push(self.is_defined(i));
				}
			}
		}

		self.data = data;
		self.bitvec = bitvec;
	}
}
