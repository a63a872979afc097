// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A packed vector of bits, used for validity masks and boolean data.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BitVecRaw")]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

#[derive(Deserialize)]
struct BitVecRaw {
	bits: Vec<u8>,
	len: usize,
}

impl TryFrom<BitVecRaw> for BitVec {
	type Error = Error;

	fn try_from(raw: BitVecRaw) -> Result<Self, Self::Error> {
		if raw.bits.len() != raw.len.div_ceil(8) {
			return Err(Error::invalid_data(format!(
				"bitvec of length {} needs {} bytes, got {}",
				raw.len,
				raw.len.div_ceil(8),
				raw.bits.len()
			)));
		}
		let mut result = Self {
			bits: raw.bits,
			len: raw.len,
		};
		result.clear_tail();
		Ok(result)
	}
}

impl BitVec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let byte = if value {
			0xFF
		} else {
			0x00
		};
		let mut result = Self {
			bits: vec![byte; len.div_ceil(8)],
			len,
		};
		result.clear_tail();
		result
	}

	pub fn from_slice(slice: &[bool]) -> Self {
		let mut result = Self::with_capacity(slice.len());
		for &bit in slice {
			result.push(bit);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push(&mut self, bit: bool) {
		let byte = self.len / 8;
		let offset = self.len % 8;
		if byte == self.bits.len() {
			self.bits.push(0);
		}
		if bit {
			self.bits[byte] |= 1 << offset;
		}
		self.len += 1;
	}

	pub fn get(&self, idx: usize) -> bool {
		assert!(idx < self.len, "bit index {idx} out of range for length {}", self.len);
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn set(&mut self, idx: usize, value: bool) {
		assert!(idx < self.len, "bit index {idx} out of range for length {}", self.len);
		let mask = 1 << (idx % 8);
		if value {
			self.bits[idx / 8] |= mask;
		} else {
			self.bits[idx / 8] &= !mask;
		}
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn count_zeros(&self) -> usize {
		self.len - self.count_ones()
	}

	pub fn all_ones(&self) -> bool {
		self.count_ones() == self.len
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			bitvec: self,
			pos: 0,
		}
	}

	// bits past `len` in the last byte must stay zero for count_ones and Eq
	fn clear_tail(&mut self) {
		let rem = self.len % 8;
		if rem != 0 {
			if let Some(last) = self.bits.last_mut() {
				*last &= (1u8 << rem) - 1;
			}
		}
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for bit in self.iter() {
			f.write_str(if bit {
				"1"
			} else {
				"0"
			})?;
		}
		Ok(())
	}
}

pub struct BitVecIter<'a> {
	bitvec: &'a BitVec,
	pos: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.bitvec.len {
			return None;
		}
		let bit = self.bitvec.get(self.pos);
		self.pos += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.bitvec.len - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitVecIter<'_> {}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let mut result = BitVec::new();
		for bit in iter {
			result.push(bit);
		}
		result
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut bv = BitVec::new();
		for i in 0..20 {
			bv.push(i % 3 == 0);
		}
		assert_eq!(bv.len(), 20);
		for i in 0..20 {
			assert_eq!(bv.get(i), i % 3 == 0, "bit {i}");
		}
	}

	#[test]
	fn test_repeat_counts() {
		let bv = BitVec::repeat(11, true);
		assert_eq!(bv.count_ones(), 11);
		assert!(bv.all_ones());

		let bv = BitVec::repeat(11, false);
		assert_eq!(bv.count_zeros(), 11);
	}

	#[test]
	fn test_set() {
		let mut bv = BitVec::repeat(9, false);
		bv.set(8, true);
		bv.set(0, true);
		bv.set(0, false);
		assert_eq!(bv.iter().collect::<Vec<_>>(), vec![false, false, false, false, false, false, false, false, true]);
	}

	#[test]
	fn test_equality_ignores_construction_path() {
		let a = BitVec::from_slice(&[true, false, true]);
		let b: BitVec = [true, false, true].into_iter().collect();
		let mut c = BitVec::repeat(3, true);
		c.set(1, false);
		assert_eq!(a, b);
		assert_eq!(a, c);
	}

	#[test]
	fn test_deserialize_checks_length() {
		let bv: BitVec = serde_json::from_str(r#"{"bits":[255],"len":3}"#).unwrap();
		assert_eq!(bv, BitVec::repeat(3, true));

		let err = serde_json::from_str::<BitVec>(r#"{"bits":[7],"len":9}"#).unwrap_err();
		assert!(err.to_string().contains("bitvec of length 9 needs 2 bytes, got 1"), "{err}");
	}

	#[test]
	#[should_panic(expected = "out of range")]
	fn test_get_out_of_range_panics() {
		BitVec::repeat(2, true).get(2);
	}
}
