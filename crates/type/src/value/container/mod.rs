// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod bool;
mod number;
mod temporal;
mod utf8;

pub use bool::BoolContainer;
pub use number::NumberContainer;
pub use temporal::TemporalContainer;
pub use utf8::Utf8Container;

use crate::{Error, Result, util::BitVec};

/// A validity mask must hold exactly one bit per element.
fn check_validity(len: usize, bitvec: Option<&BitVec>) -> Result<()> {
	match bitvec {
		Some(bitvec) if bitvec.len() != len => Err(Error::invalid_data(format!(
			"validity mask has {} bits for {} elements",
			bitvec.len(),
			len
		))),
		_ => Ok(()),
	}
}
