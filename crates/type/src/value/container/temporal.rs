// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use super::check_validity;
use crate::{
	Error, Result,
	util::BitVec,
	value::{IntoValue, Value, is::IsTemporal},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TemporalContainerRaw<T>")]
pub struct TemporalContainer<T>
where
	T: IsTemporal,
{
	data: Vec<T>,
	bitvec: Option<BitVec>,
}

#[derive(Deserialize)]
struct TemporalContainerRaw<T> {
	data: Vec<T>,
	bitvec: Option<BitVec>,
}

impl<T: IsTemporal> TryFrom<TemporalContainerRaw<T>> for TemporalContainer<T> {
	type Error = Error;

	fn try_from(raw: TemporalContainerRaw<T>) -> Result<Self> {
		check_validity(raw.data.len(), raw.bitvec.as_ref())?;
		Ok(Self {
			data: raw.data,
			bitvec: raw.bitvec,
		})
	}
}

impl<T> TemporalContainer<T>
where
	T: IsTemporal,
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

	pub fn get_value(&self, index: usize) -> Value {
		match self.get(index) {
			Some(v) => v.clone().into_value(),
			None => Value::none(T::get_type()),
		}
	}

	pub fn as_string(&self, index: usize) -> String {
		self.get_value(index).to_string()
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}

	pub fn filter(&mut self, mask: &BitVec) {
		let mut data = Vec::with_capacity(mask.count_ones());
		let mut bitvec = self.bitvec.as_ref().map(|_| BitVec::with_capacity(mask.count_ones()));

		for (i, keep) in mask.iter().enumerate() {
			if keep && i < self.len() {
				data.push(self.data[i].clone());
				if let Some(bitvec) = &mut bitvec {
					bitvec.push(self.is_defined(i));
				}
			}
		}

		self.data = data;
		self.bitvec = bitvec;
	}
}

#[cfg(test)]
pub mod tests {
	use chrono::{DateTime, TimeZone, Utc};

	use super::*;

	fn at(second: u32) -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, second).unwrap()
	}

	#[test]
	fn test_as_string() {
		let container = TemporalContainer::nullable(vec![Some(at(5)), None]);
		assert_eq!(container.as_string(0), "2020-01-02 03:04:05 +0000 UTC");
		assert_eq!(container.as_string(1), "null");
	}

	#[test]
	fn test_filter() {
		let mut container = TemporalContainer::new(vec![at(0), at(15), at(30), at(45)]);
		container.filter(&BitVec::from_slice(&[false, true, true, false]));
		assert_eq!(container.data(), &[at(15), at(30)]);
		assert!(!container.is_nullable());
	}

	#[test]
	fn test_push_and_set() {
		let mut container = TemporalContainer::with_capacity(2, true);
		container.push(at(1));
		container.push_none().unwrap();
		container.set(1, Some(at(2))).unwrap();
		assert_eq!(container.iter().collect::<Vec<_>>(), vec![Some(&at(1)), Some(&at(2))]);
	}
}
