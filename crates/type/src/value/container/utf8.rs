// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use super::check_validity;
use crate::{
	Error, Result,
	util::BitVec,
	value::{Value, r#type::Type},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Utf8ContainerRaw")]
pub struct Utf8Container {
	data: Vec<String>,
	bitvec: Option<BitVec>,
}

#[derive(Deserialize)]
struct Utf8ContainerRaw {
	data: Vec<String>,
	bitvec: Option<BitVec>,
}

impl TryFrom<Utf8ContainerRaw> for Utf8Container {
	type Error = Error;

	fn try_from(raw: Utf8ContainerRaw) -> Result<Self> {
		check_validity(raw.data.len(), raw.bitvec.as_ref())?;
		Ok(Self {
			data: raw.data,
			bitvec: raw.bitvec,
		})
	}
}

impl Utf8Container {
	pub fn new(data: Vec<String>) -> Self {
		Self {
			data,
			bitvec: None,
		}
	}

	pub fn nullable(data: Vec<Option<String>>) -> Self {
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

	pub fn push(&mut self, value: String) {
		self.data.push(value);
		if let Some(bitvec) = &mut self.bitvec {
			bitvec.push(true);
		}
	}

	pub fn push_none(&mut self) -> Result<()> {
		let Some(bitvec) = &mut self.bitvec else {
			return Err(Error::type_mismatch(Type::Utf8, "null"));
		};
		bitvec.push(false);
		self.data.push(String::new());
		Ok(())
	}

	pub fn set(&mut self, index: usize, value: Option<String>) -> Result<()> {
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
				self.data[index].clear();
				bitvec.set(index, false);
			}
			(None, None) => return Err(Error::type_mismatch(Type::Utf8, "null")),
		}
		Ok(())
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.as_ref().is_none_or(|bv| bv.get(idx))
	}

	pub fn get(&self, index: usize) -> Option<&String> {
		if self.is_defined(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn data(&self) -> &[String] {
		&self.data
	}

	pub fn as_string(&self, index: usize) -> String {
		match self.get(index) {
			Some(v) => v.clone(),
			None => "null".to_string(),
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self.get(index) {
			Some(v) => Value::Utf8(v.clone()),
			None => Value::none(Type::Utf8),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&String>> + '_ {
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
