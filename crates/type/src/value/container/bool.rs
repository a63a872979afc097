// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use super::check_validity;
use crate::{
	Error, Result,
	util::BitVec,
	value::{Value, r#type::Type},
};

/// Booleans packed into a [`BitVec`], with an optional validity mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoolContainerRaw")]
pub struct BoolContainer {
	data: BitVec,
	bitvec: Option<BitVec>,
}

#[derive(Deserialize)]
struct BoolContainerRaw {
	data: BitVec,
	bitvec: Option<BitVec>,
}

impl TryFrom<BoolContainerRaw> for BoolContainer {
	type Error = Error;

	fn try_from(raw: BoolContainerRaw) -> Result<Self> {
		check_validity(raw.data.len(), raw.bitvec.as_ref())?;
		Ok(Self {
			data: raw.data,
			bitvec: raw.bitvec,
		})
	}
}

impl BoolContainer {
	pub fn new(data: Vec<bool>) -> Self {
		Self {
			data: BitVec::from_slice(&data),
			bitvec: None,
		}
	}

	pub fn nullable(data: Vec<Option<bool>>) -> Self {
		Self {
			data: data.iter().map(|v| v.unwrap_or_default()).collect(),
			bitvec: Some(data.iter().map(Option::is_some).collect()),
		}
	}

	pub fn with_capacity(capacity: usize, nullable: bool) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
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

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		if let Some(bitvec) = &mut self.bitvec {
			bitvec.push(true);
		}
	}

	pub fn push_none(&mut self) -> Result<()> {
		let Some(bitvec) = &mut self.bitvec else {
			return Err(Error::type_mismatch(Type::Boolean, "null"));
		};
		bitvec.push(false);
		self.data.push(false);
		Ok(())
	}

	pub fn set(&mut self, index: usize, value: Option<bool>) -> Result<()> {
		if index >= self.len() {
			return Err(Error::row_out_of_range(index, self.len()));
		}
		match (value, &mut self.bitvec) {
			(Some(v), bitvec) => {
				self.data.set(index, v);
				if let Some(bitvec) = bitvec {
					bitvec.set(index, true);
				}
			}
			(None, Some(bitvec)) => {
				self.data.set(index, false);
				bitvec.set(index, false);
			}
			(None, None) => return Err(Error::type_mismatch(Type::Boolean, "null")),
		}
		Ok(())
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.as_ref().is_none_or(|bv| bv.get(idx))
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if self.is_defined(index) {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn data(&self) -> &BitVec {
		&self.data
	}

	pub fn as_string(&self, index: usize) -> String {
		match self.get(index) {
			Some(v) => v.to_string(),
			None => "null".to_string(),
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self.get(index) {
			Some(v) => Value::Boolean(v),
			None => Value::none(Type::Boolean),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}

	pub fn filter(&mut self, mask: &BitVec) {
		let mut data = BitVec::with_capacity(mask.count_ones());
		let mut bitvec = self.bitvec.as_ref().map(|_| BitVec::with_capacity(mask.count_ones()));

		for (i, keep) in mask.iter().enumerate() {
			if keep && i < self.len() {
				data.push(self.data.get(i));
				if let Some(bitvec) = &mut bitvec {
					bitvec.push(self.is_defined(i));
				}
			}
		}

		self.data = data;
		self.bitvec = bitvec;
	}
}
